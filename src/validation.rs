//! Selection checks for user-chosen files.
//!
//! Pure functions with no side effects: a candidate either passes every
//! check or is rejected with the first failing one. Rendering of rejection
//! text happens in [`crate::messages`]; nothing here touches the browser.

use crate::config::ACCEPTED_EXTENSIONS;
use crate::error::ValidationError;
use crate::types::SelectedFile;

/// Check a candidate file against the selection rules.
///
/// Checks run in order and the first failure wins:
///
/// 1. the declared media type must belong to the image category
/// 2. the file name must end in one of [`ACCEPTED_EXTENSIONS`]
///    (case-insensitive)
/// 3. the size must not exceed `max_size_bytes`
pub fn validate_selection(file: &SelectedFile, max_size_bytes: u64) -> Result<(), ValidationError> {
    if !file.media_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage(file.media_type.clone()));
    }

    let lowered = file.name.to_lowercase();
    if !ACCEPTED_EXTENSIONS
        .iter()
        .any(|extension| lowered.ends_with(extension))
    {
        return Err(ValidationError::BadExtension(file.name.clone()));
    }

    if file.size > max_size_bytes {
        return Err(ValidationError::TooLarge {
            size: file.size,
            limit: max_size_bytes,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = 10 * 1024 * 1024;

    fn candidate(name: &str, size: u64, media_type: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            size,
            media_type: media_type.to_string(),
        }
    }

    #[test]
    fn test_accepts_common_image() {
        let file = candidate("gato.png", 512 * 1024, "image/png");
        assert!(validate_selection(&file, MAX).is_ok());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let file = candidate("FOTO.JPG", 1024, "image/jpeg");
        assert!(validate_selection(&file, MAX).is_ok());
    }

    #[test]
    fn test_rejects_non_image_media_type() {
        let file = candidate("informe.pdf", 1024, "application/pdf");
        assert_eq!(
            validate_selection(&file, MAX),
            Err(ValidationError::NotAnImage("application/pdf".to_string()))
        );
    }

    #[test]
    fn test_rejects_image_type_with_foreign_extension() {
        // Browsers can mislabel; the extension check catches the mismatch.
        let file = candidate("captura.svg", 1024, "image/svg+xml");
        assert_eq!(
            validate_selection(&file, MAX),
            Err(ValidationError::BadExtension("captura.svg".to_string()))
        );
    }

    #[test]
    fn test_media_type_check_runs_first() {
        let file = candidate("pelicula.mp4", MAX + 1, "video/mp4");
        assert!(matches!(
            validate_selection(&file, MAX),
            Err(ValidationError::NotAnImage(_))
        ));
    }

    #[test]
    fn test_size_at_limit_passes() {
        let file = candidate("grande.webp", MAX, "image/webp");
        assert!(validate_selection(&file, MAX).is_ok());
    }

    #[test]
    fn test_size_over_limit_carries_configured_limit() {
        let file = candidate("enorme.jpeg", MAX + 1, "image/jpeg");
        assert_eq!(
            validate_selection(&file, MAX),
            Err(ValidationError::TooLarge {
                size: MAX + 1,
                limit: MAX,
            })
        );
    }

    #[test]
    fn test_tiff_is_not_accepted() {
        let file = candidate("escaneo.tiff", 1024, "image/tiff");
        assert!(matches!(
            validate_selection(&file, MAX),
            Err(ValidationError::BadExtension(_))
        ));
    }
}
