//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Selection Types** - the chosen file and its local preview
//! - **Analysis Types** - response structures from the analysis service
//! - **Notice Types** - non-blocking user notifications

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Selection Types
// =============================================================================

/// Metadata of the user-chosen file.
///
/// A plain mirror of the browser file handle (which stays in the app
/// shell's session signal), replaced wholesale on each new selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name, including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared media type, e.g. `image/png`.
    pub media_type: String,
}

/// Locally resolvable handle used to render the selected image before
/// upload.
///
/// Wraps a browser object URL; superseded handles must be revoked through
/// [`crate::services::preview::revoke_preview`] so they do not accumulate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRef(String);

impl PreviewRef {
    /// Wrap a freshly created object URL.
    pub fn new(url: String) -> Self {
        Self(url)
    }

    /// The object URL, suitable for an `img` src attribute.
    pub fn url(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Analysis Types
// =============================================================================

/// One classification returned by the analysis service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Textual tag.
    pub label: String,
    /// Score as a fraction in [0, 1]; rendered as a percentage.
    pub confidence: f64,
}

/// Body of a successful analyze response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Returned tags, in service order. A body without a `tags` field
    /// decodes as no tags.
    #[serde(default)]
    pub tags: Vec<TagEntry>,
}

// =============================================================================
// Notice Types
// =============================================================================

/// A non-blocking notification shown in the toast stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Reducer-assigned id, used for dismissal.
    pub id: u64,
    /// What happened.
    pub kind: NoticeKind,
}

/// Notification kinds, one per user-visible situation.
#[derive(Clone, Debug, PartialEq)]
pub enum NoticeKind {
    /// A rejected selection, carrying the failing check.
    Validation(ValidationError),
    /// The analysis request failed; rendered as one generic message
    /// regardless of the underlying network or decode error.
    Failure,
    /// Informational prompt.
    Info(InfoNotice),
}

/// Informational prompts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfoNotice {
    /// Analysis was triggered with no file selected.
    SelectImageFirst,
}

impl NoticeKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Validation(_) => "toast-warning",
            NoticeKind::Failure => "toast-error",
            NoticeKind::Info(_) => "toast-info",
        }
    }
}
