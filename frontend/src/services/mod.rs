//! Browser-side services for the share buttons.
//!
//! # Services
//!
//! - [`share_link`] - platform share link construction
//! - [`popup`] - share popup window

pub mod share_link;
pub mod popup;

pub use popup::*;
