//! Browser-facing services.
//!
//! This module keeps everything that talks to the outside of the widget:
//!
//! # Services
//!
//! - [`analyze`] - multipart upload to the analysis backend
//! - [`preview`] - object URL lifecycle for the image preview

pub mod analyze;
pub mod preview;

pub use analyze::*;
pub use preview::*;
