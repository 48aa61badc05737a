pub mod catalog;
pub mod config;
pub mod error;
#[cfg(feature = "tui")]
pub mod tui;

pub use error::{Result, ShowroomError};
