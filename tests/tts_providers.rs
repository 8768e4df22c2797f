//! Provider adapter tests against a local wiremock server.
//!
//! Each adapter is pointed at a `MockServer` through its config, so no test
//! needs network access or real credentials.

use bytes::Bytes;
use futures::StreamExt;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

use aura_speak::core::tts::{
    AudioPayload, DeepgramConfig, DeepgramTTS, ElevenLabsConfig, ElevenLabsTTS, OpenAIConfig,
    OpenAITTS, SpeechSynthesizer, TTSError,
};

/// Drain any payload shape into one buffer
async fn collect(payload: AudioPayload) -> Bytes {
    match payload {
        AudioPayload::Buffer(bytes) => bytes,
        AudioPayload::Stream(mut stream) => {
            let mut out = Vec::new();
            while let Some(chunk) = stream.next().await {
                out.extend_from_slice(&chunk.expect("stream chunk"));
            }
            Bytes::from(out)
        }
    }
}

// ============================================================================
// Deepgram
// ============================================================================

fn deepgram(server: &MockServer) -> DeepgramTTS {
    DeepgramTTS::new(DeepgramConfig {
        domain: server.uri(),
        api_key: "dg-key".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_deepgram_streams_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/speak"))
        .and(query_param("model", "aura-luna-en"))
        .and(header("authorization", "token dg-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"text": "good morning"})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp3-bytes".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let payload = deepgram(&server)
        .synthesize("good morning", "aura-luna-en")
        .await
        .unwrap()
        .expect("audio");

    assert!(payload.is_stream());
    assert_eq!(&collect(payload).await[..], b"mp3-bytes");
}

#[tokio::test]
async fn test_deepgram_passes_error_body_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/speak"))
        .respond_with(ResponseTemplate::new(401).set_body_string("INVALID_AUTH"))
        .mount(&server)
        .await;

    let payload = deepgram(&server)
        .synthesize("hello", "aura-asteria-en")
        .await
        .unwrap()
        .expect("body is forwarded");

    assert_eq!(&collect(payload).await[..], b"INVALID_AUTH");
}

#[tokio::test]
async fn test_deepgram_connection_failure_is_provider_error() {
    let tts = DeepgramTTS::new(DeepgramConfig {
        domain: "http://127.0.0.1:1".to_string(),
        api_key: String::new(),
    })
    .unwrap();

    let result = tts.synthesize("hello", "aura-asteria-en").await;
    assert!(matches!(result, Err(TTSError::ProviderError(_))));
}

// ============================================================================
// OpenAI
// ============================================================================

fn openai(server: &MockServer) -> OpenAITTS {
    OpenAITTS::new(OpenAIConfig {
        base_url: format!("{}/v1", server.uri()),
        api_key: Some("oa-key".to_string()),
    })
    .unwrap()
}

#[tokio::test]
async fn test_openai_returns_buffer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .and(header("authorization", "Bearer oa-key"))
        .and(body_json(json!({"model": "tts-1", "voice": "alloy", "input": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"openai-mp3".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let payload = openai(&server)
        .synthesize("hello", "alloy")
        .await
        .unwrap()
        .expect("audio");

    match payload {
        AudioPayload::Buffer(bytes) => assert_eq!(&bytes[..], b"openai-mp3"),
        other => panic!("Expected buffered audio, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_openai_rejection_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error":{"message":"Invalid voice"}}"#),
        )
        .mount(&server)
        .await;

    let err = openai(&server)
        .synthesize("hello", "not-a-voice")
        .await
        .unwrap_err();

    match err {
        TTSError::ProviderError(msg) => {
            assert!(msg.contains("400"));
            assert!(msg.contains("Invalid voice"));
        }
        other => panic!("Expected ProviderError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_openai_empty_body_is_no_audio() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = openai(&server).synthesize("hello", "alloy").await.unwrap();
    assert!(result.is_none());
}

// ============================================================================
// ElevenLabs
// ============================================================================

fn elevenlabs(server: &MockServer) -> ElevenLabsTTS {
    ElevenLabsTTS::new(ElevenLabsConfig {
        base_url: server.uri(),
        api_key: Some("el-key".to_string()),
    })
    .unwrap()
}

async fn mount_voice_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .and(header("xi-api-key", "el-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voices": [
                {"voice_id": "pNInz6obpgDQGcFmaJgB", "name": "Adam"},
                {"voice_id": "21m00Tcm4TlvDq8ikWAM", "name": "Rachel"}
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_elevenlabs_resolves_name_and_concatenates() {
    let server = MockServer::start().await;
    mount_voice_listing(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM/stream"))
        .and(header("xi-api-key", "el-key"))
        .and(body_json(
            json!({"text": "hello", "model_id": "eleven_multilingual_v2"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"eleven-audio".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let payload = elevenlabs(&server)
        .synthesize("hello", "Rachel")
        .await
        .unwrap()
        .expect("audio");

    assert!(!payload.is_stream());
    assert_eq!(&collect(payload).await[..], b"eleven-audio");
}

#[tokio::test]
async fn test_elevenlabs_voice_id_skips_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/pNInz6obpgDQGcFmaJgB/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"adam".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let payload = elevenlabs(&server)
        .synthesize("hello", "pNInz6obpgDQGcFmaJgB")
        .await
        .unwrap()
        .expect("audio");
    assert_eq!(&collect(payload).await[..], b"adam");
}

#[tokio::test]
async fn test_elevenlabs_unknown_voice_name() {
    let server = MockServer::start().await;
    mount_voice_listing(&server).await;

    let err = elevenlabs(&server)
        .synthesize("hello", "Nobody")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Provider error: Nobody is not a valid voice name"
    );
}

#[tokio::test]
async fn test_elevenlabs_rejection_is_provider_error() {
    let server = MockServer::start().await;
    mount_voice_listing(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM/stream"))
        .respond_with(ResponseTemplate::new(401).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = elevenlabs(&server)
        .synthesize("hello", "Rachel")
        .await
        .unwrap_err();

    match err {
        TTSError::ProviderError(msg) => assert!(msg.contains("quota exceeded")),
        other => panic!("Expected ProviderError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_elevenlabs_no_chunks_is_no_audio() {
    let server = MockServer::start().await;
    mount_voice_listing(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM/stream"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = elevenlabs(&server).synthesize("hello", "Rachel").await.unwrap();
    assert!(result.is_none());
}
