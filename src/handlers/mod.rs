pub mod api;
pub mod pages;

pub use api::validate_form;
pub use pages::{login, login_page};
