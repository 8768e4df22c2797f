use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderName, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use url::form_urlencoded;

use crate::core::text::normalize_text;
use crate::core::tts::AudioPayload;
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;

/// Wall-clock synthesis time in milliseconds
pub static X_DG_LATENCY: HeaderName = HeaderName::from_static("x-dg-latency");

/// First `model` value in the query string, if any.
///
/// A repeated key is not an error: the first occurrence wins.
fn model_param(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "model")
        .map(|(_, value)| value.into_owned())
}

/// A chat message as posted by the chat UI
#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// The text to speak
    pub content: String,
}

/// Handler for the /speak endpoint
///
/// Normalizes the message text, routes it to the provider selected by the
/// `model` query parameter and returns the audio as `audio/mp3`. Every failure
/// becomes a 500 carrying the error message as plain text.
pub async fn speak_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    body: Bytes,
) -> AppResult<Response> {
    debug!("Speak request: {}", uri);

    let voice_id =
        model_param(&uri).unwrap_or_else(|| state.providers.defaults().deepgram.clone());

    let message: ChatMessage = serde_json::from_slice(&body)
        .map_err(|e| AppError::InternalServerError(format!("Invalid chat message: {e}")))?;

    let text = normalize_text(&message.content);

    info!(
        "Speak request received - voice: {}, message: {}, role: {}, text length: {}",
        voice_id,
        message.id.as_deref().unwrap_or("-"),
        message.role.as_deref().unwrap_or("unknown"),
        text.len()
    );

    let start = Instant::now();
    let audio = state.providers.synthesize(&text, &voice_id).await?;

    let body = match audio {
        Some(AudioPayload::Buffer(bytes)) => {
            info!("TTS synthesis successful - {} bytes", bytes.len());
            Body::from(bytes)
        }
        Some(AudioPayload::Stream(stream)) => {
            info!("TTS synthesis successful - streaming response");
            Body::from_stream(stream)
        }
        None => {
            info!("TTS provider returned no audio");
            Body::empty()
        }
    };

    let latency_ms = start.elapsed().as_millis();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mp3".to_string()),
            (X_DG_LATENCY.clone(), latency_ms.to_string()),
        ],
        body,
    )
        .into_response())
}
