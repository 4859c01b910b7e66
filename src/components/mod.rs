//! UI components of the analyzer widget.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image selection zone and analyze control
//! - [`PreviewSection`] - Thumbnail of the selected image
//! - [`ResultsSection`] - Tag list with formatted confidences
//! - [`ToastStack`] - Transient notices

mod hero;
mod upload;
mod preview;
mod results;
mod toast;
mod footer;

pub use hero::*;
pub use upload::*;
pub use preview::*;
pub use results::*;
pub use toast::*;
pub use footer::*;
