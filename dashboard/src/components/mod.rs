//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod filters;
mod museum_form;
mod museum_table;
mod museums;

pub use header::Header;
pub use filters::FilterBar;
pub use museum_form::MuseumFormPanel;
pub use museum_table::MuseumTable;
pub use museums::{MuseumsPage, ScreenHandle};
