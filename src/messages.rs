//! User-facing copy.
//!
//! Every string shown to the user lives in a [`Messages`] catalog so the
//! locale is a swappable resource rather than text scattered through
//! components. The shipped catalog is Spanish ([`Messages::spanish`]),
//! instantiated once in [`crate::config::MESSAGES`].

use crate::error::ValidationError;
use crate::types::{InfoNotice, NoticeKind};

/// Catalog of user-facing strings.
///
/// Static copy is stored verbatim; the size-limit rejection keeps a
/// `{max_mb}` placeholder filled with the configured limit when rendered.
#[derive(Clone, Debug)]
pub struct Messages {
    /// Page heading.
    pub app_title: &'static str,
    /// Subtitle under the heading.
    pub app_subtitle: &'static str,
    /// Hint shown inside the upload zone while no file is selected.
    pub pick_zone_hint: &'static str,
    /// Caption of the select-a-file button.
    pub pick_button: &'static str,
    /// Caption of the analyze button when idle.
    pub analyze_button: &'static str,
    /// Caption of the analyze button while a request is in flight.
    pub analyzing_button: &'static str,
    /// Heading above the tag list.
    pub results_heading: &'static str,
    /// Alt text of the preview image.
    pub preview_alt: &'static str,
    /// Footer line.
    pub footer_note: &'static str,
    /// Prompt when analysis is triggered without a selected file.
    pub select_image_first: &'static str,
    /// Generic message for any failed analysis request.
    pub analysis_failed: &'static str,
    /// Rejection: declared media type is not an image.
    pub invalid_type: &'static str,
    /// Rejection: file name extension outside the accepted set.
    pub invalid_extension: &'static str,
    /// Rejection: file over the size limit; `{max_mb}` is replaced with
    /// the configured limit in megabytes.
    pub file_too_large: &'static str,
}

impl Messages {
    /// Spanish catalog, the widget's shipped locale.
    pub const fn spanish() -> Self {
        Self {
            app_title: "Analizador de Imágenes",
            app_subtitle: "Sube una imagen y descubre las etiquetas que detecta el servicio de análisis.",
            pick_zone_hint: "Haz clic para seleccionar una imagen",
            pick_button: "Elegir una imagen",
            analyze_button: "Analizar",
            analyzing_button: "Analizando...",
            results_heading: "Resultados",
            preview_alt: "Vista previa",
            footer_note: "Analizador de Imágenes • Desarrollado con",
            select_image_first: "Por favor selecciona una imagen primero",
            analysis_failed: "Hubo un error analizando la imagen.",
            invalid_type: "Solo se permiten archivos de imagen (JPG, JPEG, PNG, GIF, BMP, WebP).",
            invalid_extension: "El archivo debe ser una imagen válida (JPG, JPEG, PNG, GIF, BMP, WebP).",
            file_too_large: "El archivo no debe superar los {max_mb} MB.",
        }
    }

    /// Text for one notice.
    pub fn notice_text(&self, kind: &NoticeKind) -> String {
        match kind {
            NoticeKind::Validation(error) => self.validation_text(error),
            NoticeKind::Failure => self.analysis_failed.to_string(),
            NoticeKind::Info(InfoNotice::SelectImageFirst) => self.select_image_first.to_string(),
        }
    }

    fn validation_text(&self, error: &ValidationError) -> String {
        match error {
            ValidationError::NotAnImage(_) => self.invalid_type.to_string(),
            ValidationError::BadExtension(_) => self.invalid_extension.to_string(),
            ValidationError::TooLarge { limit, .. } => {
                self.file_too_large.replace("{max_mb}", &mb_figure(*limit))
            }
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Megabyte figure for a byte count: whole number when the count is an
/// exact number of MiB, one decimal otherwise.
fn mb_figure(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes % MIB == 0 {
        (bytes / MIB).to_string()
    } else {
        format!("{:.1}", bytes as f64 / MIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_rejection_includes_configured_limit() {
        let messages = Messages::spanish();
        let kind = NoticeKind::Validation(ValidationError::TooLarge {
            size: 11 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        });
        let text = messages.notice_text(&kind);
        assert!(text.contains("10 MB"));
        assert!(!text.contains("{max_mb}"));
    }

    #[test]
    fn test_request_failures_render_one_generic_message() {
        let messages = Messages::spanish();
        assert_eq!(
            messages.notice_text(&NoticeKind::Failure),
            "Hubo un error analizando la imagen."
        );
    }

    #[test]
    fn test_prompt_text() {
        let messages = Messages::spanish();
        let text = messages.notice_text(&NoticeKind::Info(InfoNotice::SelectImageFirst));
        assert_eq!(text, "Por favor selecciona una imagen primero");
    }

    #[test]
    fn test_mb_figure() {
        assert_eq!(mb_figure(2 * 1024 * 1024), "2");
        assert_eq!(mb_figure(10 * 1024 * 1024), "10");
        assert_eq!(mb_figure(1_572_864), "1.5");
    }
}
