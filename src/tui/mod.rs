//! Terminal user interface for browsing the catalog.

pub mod app;
pub mod render;
pub mod state;
pub mod theme;

pub use app::App;
pub use state::{BrowserState, RowId};
