/// Admin Panel Client Library
/// CRUD console for a REST resource store (product catalog and user directory)

pub mod api;
pub mod cli;
pub mod client;
pub mod console;
pub mod error;
pub mod i18n;
pub mod models;
pub mod screen;

pub use error::{ClientError, Result};
pub use models::{Entity, Product, User};
pub use screen::{Modal, Screen};
