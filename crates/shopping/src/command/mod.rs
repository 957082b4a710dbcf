mod clear;
mod create;
mod delete;
mod toggle;
mod update;

pub use clear::*;
pub use create::*;
pub use delete::*;
pub use toggle::*;
pub use update::*;
