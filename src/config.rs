//! Application configuration.
//!
//! Centralized configuration for the image analyzer frontend. Everything is
//! a documented constant except the service base URL, which can be replaced
//! at build time through the `ANALYZER_API_URL` environment variable.

use crate::messages::Messages;

/// Development default for the analysis service base URL.
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Analysis service base URL.
///
/// Resolved at build time: `ANALYZER_API_URL` when set, the development
/// default otherwise. The analyze endpoint path is appended by the request
/// service.
pub fn api_url() -> &'static str {
    option_env!("ANALYZER_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Maximum accepted image size in bytes.
///
/// 10 MiB limit, interpolated into the rejection message shown to the user.
pub const MAX_IMAGE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted image file extensions (lower case, leading dot).
///
/// File names are matched case-insensitively against this list.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"];

/// Seconds before an in-flight analysis request is abandoned.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Milliseconds a notice stays in the toast stack before auto-dismissing.
pub const NOTICE_TTL_MS: u32 = 6_000;

/// DOM id of the hidden file input.
///
/// Shared between the upload component (programmatic click) and the
/// dispatcher (picker reset after a rejected selection).
pub const FILE_INPUT_ID: &str = "fileInput";

/// User-facing copy (Spanish).
pub const MESSAGES: Messages = Messages::spanish();
