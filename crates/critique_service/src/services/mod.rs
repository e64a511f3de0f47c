pub mod analysis_service;
pub mod prompt_composer;
pub mod request_validator;
