//! Prelude module for convenient imports.
//!
//! Re-exports the types most code touches:
//!
//! ```ignore
//! use atlas::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, LoadPhase, Screen};

// Data plane
pub use crate::api::CountriesClient;
pub use crate::error::LoadError;
pub use crate::models::{format_population, Country, CountryName, Flags};
pub use crate::query::{derive_working_set, region_options, SortMode, ViewQuery};

// View plane
pub use crate::ui::{render, LayoutContext, Theme, ThemeMode};
pub use crate::widgets::SearchInput;
