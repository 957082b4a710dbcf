pub mod auth;
pub mod backend;
pub mod category;
mod choice;
pub mod collection;
mod date;
mod error;
pub mod user;
pub mod validate;

pub use category::{Category, UNITS};
pub use choice::Choice;
pub use collection::Entity;
pub use date::*;
pub use error::*;
pub use user::User;

#[doc(hidden)]
pub use anyhow as __anyhow;
