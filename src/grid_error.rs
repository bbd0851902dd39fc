//! GridError: unified error type for identity-grid public APIs
//!
//! The intersection adapters themselves never fail on their own; they forward
//! whatever the host grid does. This type covers the fallible entry points
//! around them: building the reference host and addressing levels/elements.

use thiserror::Error;

/// Unified error type for identity-grid operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// A refinement level above the grid's maximum level was requested.
    #[error("level {level} out of range (max level is {max_level})")]
    LevelOutOfRange { level: usize, max_level: usize },
    /// Element indices outside the element counts of the requested level.
    #[error("element ({i}, {j}) out of range on level {level} ({nx} x {ny} elements)")]
    ElementOutOfRange {
        level: usize,
        i: usize,
        j: usize,
        nx: usize,
        ny: usize,
    },
    /// The structured grid options describe an unusable layout.
    #[error("invalid grid layout: {0}")]
    InvalidLayout(String),
    /// A geometry could not be constructed from its corner data.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
