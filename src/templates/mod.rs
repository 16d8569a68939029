pub mod layout;
pub mod login;

pub use layout::base;
pub use login::{login, SUCCESS_MESSAGE};
