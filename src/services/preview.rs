//! Ciclo de vida de la URL de vista previa

use wasm_bindgen::JsValue;
use web_sys::{File, Url};

use crate::types::PreviewRef;

/// Create an object URL rendering the selected file.
pub fn create_preview(file: &File) -> Result<PreviewRef, JsValue> {
    Url::create_object_url_with_blob(file).map(PreviewRef::new)
}

/// Release a preview URL once nothing renders it anymore.
pub fn revoke_preview(preview: &PreviewRef) {
    if let Err(e) = Url::revoke_object_url(preview.url()) {
        log::warn!("⚠️ No se pudo liberar la URL de vista previa: {:?}", e);
    }
}
