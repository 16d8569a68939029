// Library exports for integration tests
pub mod app;
pub mod config;
pub mod form;
pub mod handlers;
pub mod templates;
