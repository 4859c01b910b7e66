//! Servicio HTTP para enviar la imagen al backend de análisis

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{File, FormData};

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::types::{AnalyzeResponse, TagEntry};

/// Upload the selected image and decode the returned tags.
///
/// The whole exchange races against a timeout; hitting it is reported as a
/// network failure like any other.
pub async fn analyze_image(
    file: &File,
    api_url: &str,
    timeout_secs: u64,
) -> AnalyzeResult<Vec<TagEntry>> {
    let request = send_analysis(file, api_url);
    pin_mut!(request);

    let timeout = TimeoutFuture::new(timeout_secs as u32 * 1_000);
    pin_mut!(timeout);

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(AnalyzeError::Network(format!(
            "request timed out after {}s",
            timeout_secs
        ))),
    }
}

async fn send_analysis(file: &File, api_url: &str) -> AnalyzeResult<Vec<TagEntry>> {
    // Armar el multipart
    let form_data = FormData::new()
        .map_err(|e| AnalyzeError::Network(format!("failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", file)
        .map_err(|e| AnalyzeError::Network(format!("failed to append file: {:?}", e)))?;

    // Enviar la petición
    let url = format!("{}/api/analyze", api_url);
    log::info!("📤 Enviando imagen '{}' a {}", file.name(), url);

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AnalyzeError::Network(format!("failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AnalyzeError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AnalyzeError::Network(format!(
            "server returned status {}",
            response.status()
        )));
    }

    let decoded = response
        .json::<AnalyzeResponse>()
        .await
        .map_err(|e| AnalyzeError::Decode(format!("failed to parse response: {}", e)))?;

    log::info!("✅ Análisis completado: {} etiquetas", decoded.tags.len());
    Ok(decoded.tags)
}
