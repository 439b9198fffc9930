pub mod api_error;
pub mod config;
pub mod envelope;
pub mod form;
pub mod media;
pub mod metadata;
pub mod record;
