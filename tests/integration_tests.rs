use gemini_stt::{
    audio_to_text, GeminiSttClient, GeminiSttConfig, GeminiSttError, ThinkingLevel,
    TranscriptionParams,
};

fn get_client() -> Option<GeminiSttClient> {
    dotenvy::dotenv().ok();
    GeminiSttConfig::from_env()
        .ok()
        .and_then(|config| GeminiSttClient::new(config).ok())
}

#[tokio::test]
async fn test_empty_api_key_fails_before_io() {
    // The source path does not exist; the credential check must fire first.
    let result = audio_to_text(
        "/nonexistent/speech.mp3",
        "",
        TranscriptionParams::new(),
    )
    .await;
    assert!(matches!(
        result,
        Err(GeminiSttError::MissingCredential { .. })
    ));
}

#[tokio::test]
async fn test_missing_file_fails_before_network() {
    let result = audio_to_text(
        "/nonexistent/speech.mp3",
        "test-key",
        TranscriptionParams::new(),
    )
    .await;
    assert!(matches!(result, Err(GeminiSttError::NotFound { .. })));
}

#[tokio::test]
async fn test_directory_rejected() {
    let dir = std::env::temp_dir();
    let result = audio_to_text(
        dir.to_str().unwrap(),
        "test-key",
        TranscriptionParams::new(),
    )
    .await;
    assert!(matches!(result, Err(GeminiSttError::InvalidInput { .. })));
}

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY and tests/fixtures/speech.mp3"]
async fn test_transcribe_local_file() {
    let client = get_client().expect("GEMINI_API_KEY not set");

    let response = client
        .transcribe("tests/fixtures/speech.mp3", TranscriptionParams::new())
        .await;
    assert!(response.is_ok(), "Failed: {:?}", response.err());

    let result = response.unwrap();
    assert!(!result.text.is_empty());
    assert_eq!(result.model, gemini_stt::DEFAULT_MODEL);
    assert!(result.file_uri.is_some(), "upload should return a locator");
    println!("Transcript: {}", result.text);
}

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY and tests/fixtures/speech.mp3"]
async fn test_transcribe_reuses_uploaded_locator() {
    let client = get_client().expect("GEMINI_API_KEY not set");

    let first = client
        .transcribe("tests/fixtures/speech.mp3", TranscriptionParams::new())
        .await
        .expect("first transcription failed");
    let locator = first.file_uri.expect("upload should return a locator");

    // Second call feeds the locator back and must not re-upload.
    let second = client
        .transcribe(&locator, TranscriptionParams::new())
        .await
        .expect("locator reuse failed");
    assert!(!second.text.is_empty());
    assert!(second.file_uri.is_none());
}

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY and tests/fixtures/speech.mp3"]
async fn test_transcribe_inline() {
    let client = get_client().expect("GEMINI_API_KEY not set");

    let response = client
        .transcribe_inline("tests/fixtures/speech.mp3", TranscriptionParams::new())
        .await;
    assert!(response.is_ok(), "Failed: {:?}", response.err());

    let result = response.unwrap();
    assert!(!result.text.is_empty());
    assert!(result.file_uri.is_none());
}

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY and tests/fixtures/speech.mp3"]
async fn test_transcribe_with_thinking_level() {
    let client = get_client().expect("GEMINI_API_KEY not set");

    let params = TranscriptionParams::new()
        .with_model("gemini-3-flash-preview")
        .with_thinking_level(ThinkingLevel::Low);

    let response = client
        .transcribe("tests/fixtures/speech.mp3", params)
        .await;
    assert!(response.is_ok(), "Failed: {:?}", response.err());

    let result = response.unwrap();
    assert_eq!(result.model, "gemini-3-flash-preview");
    assert!(!result.text.is_empty());
}
