use mindcare_core::ChatSession;
use mindcare_core::ResponsePipeline;
use mindcare_core::classifier::CRISIS_RESPONSE;
use mindcare_core::generation::GenerationError;
use mindcare_core::responses::{RETURNING_GREETING, ResponseFamily};
use mindcare_infrastructure::SecretServiceImpl;
use mindcare_interaction::{GeminiApiAgent, HealthFinderClient};
use std::sync::Arc;
use tempfile::TempDir;

// Nothing listens on the discard port, so requests fail immediately.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn unreachable_pipeline() -> ResponsePipeline {
    let agent = GeminiApiAgent::new("test-key", "gemini-test").with_base_url(UNREACHABLE);
    ResponsePipeline::seeded(7)
        .with_generator(Arc::new(agent))
        .with_health_provider(Arc::new(HealthFinderClient::new(UNREACHABLE)))
}

#[tokio::test]
async fn test_agent_requires_configured_key() {
    let temp_dir = TempDir::new().unwrap();
    let secret_path = temp_dir.path().join("secret.json");
    std::fs::write(&secret_path, r#"{"gemini":{"api_key":"YOUR_GEMINI_API_KEY"}}"#).unwrap();

    let service = SecretServiceImpl::with_env_key(&secret_path, None);
    let result = GeminiApiAgent::try_from_secrets(&service).await;
    assert!(matches!(result, Err(GenerationError::NotConfigured)));
}

#[tokio::test]
async fn test_agent_from_secret_file() {
    let temp_dir = TempDir::new().unwrap();
    let secret_path = temp_dir.path().join("secret.json");
    std::fs::write(
        &secret_path,
        r#"{"gemini":{"api_key":"abc","model_name":"gemini-1.5-pro"}}"#,
    )
    .unwrap();

    let service = SecretServiceImpl::with_env_key(&secret_path, None);
    let agent = GeminiApiAgent::try_from_secrets(&service).await.unwrap();
    assert_eq!(agent.model(), "gemini-1.5-pro");
}

#[tokio::test]
async fn test_unreachable_services_fall_back_to_builtin_replies() {
    let mut pipeline = unreachable_pipeline();
    let mut session = ChatSession::new();

    let first = pipeline.respond(&mut session, "hello there").await.unwrap();
    assert!(ResponseFamily::Greeting.responses().contains(&first.as_str()));

    let second = pipeline.respond(&mut session, "hi again").await.unwrap();
    assert_eq!(second, RETURNING_GREETING);

    // General family with a failing health lookup stays un-enriched.
    let third = pipeline
        .respond(&mut session, "the weather is grey today")
        .await
        .unwrap();
    assert!(ResponseFamily::General.responses().contains(&third.as_str()));
    assert!(!third.contains("Related resource"));

    assert_eq!(session.history.len(), 6);
}

#[tokio::test]
async fn test_crisis_reply_skips_remote_services() {
    let mut pipeline = unreachable_pipeline();
    let mut session = ChatSession::new();

    let reply = pipeline
        .respond(&mut session, "I want to kill myself")
        .await
        .unwrap();
    assert_eq!(reply, CRISIS_RESPONSE);
    assert!(reply.contains("988"));
}
