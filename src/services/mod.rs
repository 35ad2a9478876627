pub mod application_service;
