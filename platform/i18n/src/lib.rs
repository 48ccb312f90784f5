//! Key-based localization for the HR console.
//!
//! Language tables are flat `key -> template` maps. A [`Localizer`] is an
//! explicit context value holding the current language, so independent
//! contexts can run side by side without sharing state.

pub mod catalog;
pub mod localizer;
mod tables;

pub use catalog::{Catalog, LanguageTable, interpolate};
pub use localizer::{LanguageSelection, LanguageSignal, Localizer, StaticSignal};

/// Language used when the startup signal names no known table.
pub const DEFAULT_LANGUAGE: &str = "en";
