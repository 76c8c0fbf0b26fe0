//! Integration tests for the provider-backed gateway using WireMock
//!
//! The provider is mocked at the HTTP level so the full path from prompt
//! construction to fail-soft handling is exercised.

use ai_core::InferenceConfig;
use application::{ClassificationGateway, EmailContent};
use domain::LanguageCode;
use infrastructure::LlmClassificationGateway;
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: format!("{base_url}/v1"),
        default_model: "test-model".to_string(),
        api_key: Some(SecretString::from("sk-test")),
        timeout_ms: 5000,
        classify_timeout_ms: 300,
        draft_timeout_ms: 300,
        ..InferenceConfig::default()
    }
}

fn gateway_for(server: &MockServer) -> LlmClassificationGateway {
    LlmClassificationGateway::from_config(config_for_mock(&server.uri()), "ACME Bank")
        .expect("Failed to create gateway")
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    }))
}

fn email() -> EmailContent {
    EmailContent::new("Please send the invoice for March", Some("Invoice".to_string()))
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(response)
        .mount(server)
        .await;
}

// =============================================================================
// Classification
// =============================================================================

mod classify_tests {
    use super::*;

    #[tokio::test]
    async fn returns_provider_verdict() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("ACME Bank"))
            .and(body_string_contains("Subject: Invoice"))
            .and(body_string_contains("json_object"))
            .respond_with(completion(r#"{"category":"Unproductive","confidence":0.83}"#))
            .expect(1)
            .mount(&server)
            .await;

        let verdict = gateway_for(&server).classify(&email(), LanguageCode::En).await;
        assert_eq!(verdict.label, "Unproductive");
        assert!((verdict.confidence - 0.83).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn unauthorized_is_conservative() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(401)).await;

        let verdict = gateway_for(&server).classify(&email(), LanguageCode::En).await;
        assert_eq!(verdict.label, "Productive");
        assert!((verdict.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn rate_limit_is_conservative() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(429)).await;

        let verdict = gateway_for(&server).classify(&email(), LanguageCode::Pt).await;
        assert_eq!(verdict.label, "Productive");
        assert!((verdict.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn malformed_content_is_conservative() {
        let server = MockServer::start().await;
        mount(&server, completion("I think it is productive")).await;

        let verdict = gateway_for(&server).classify(&email(), LanguageCode::En).await;
        assert_eq!(verdict.label, "Productive");
        assert!((verdict.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn timeout_is_conservative() {
        let server = MockServer::start().await;
        mount(
            &server,
            completion(r#"{"category":"Unproductive","confidence":0.9}"#)
                .set_delay(std::time::Duration::from_millis(1500)),
        )
        .await;

        let verdict = gateway_for(&server).classify(&email(), LanguageCode::En).await;
        assert_eq!(verdict.label, "Productive");
    }
}

// =============================================================================
// Reply Drafting
// =============================================================================

mod draft_tests {
    use super::*;

    #[tokio::test]
    async fn returns_stripped_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("REPLY LANGUAGE: English (en)"))
            .respond_with(completion(
                r#"{"suggested_reply":"Subject: Re: Invoice\nHi,\n\nWe will send it today.\n\nBest regards,\nSupport Team"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let reply = gateway_for(&server).draft_reply(&email(), LanguageCode::En).await;
        assert_eq!(reply, "Hi,\n\nWe will send it today.\n\nBest regards,\nSupport Team");
    }

    #[tokio::test]
    async fn server_error_yields_localized_fallback() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(503)).await;

        let reply = gateway_for(&server).draft_reply(&email(), LanguageCode::Pt).await;
        assert_eq!(
            reply,
            "Olá,\n\nNosso serviço de IA está temporariamente indisponível. Tente novamente mais tarde.\n\nAtenciosamente,\nEquipe de Atendimento"
        );
    }

    #[tokio::test]
    async fn empty_reply_yields_fallback() {
        let server = MockServer::start().await;
        mount(&server, completion(r#"{"suggested_reply":"Subject: only a subject"}"#)).await;

        let reply = gateway_for(&server).draft_reply(&email(), LanguageCode::En).await;
        assert!(reply.starts_with("Hi,\n\nOur AI service is temporarily unavailable."));
        assert!(reply.ends_with("Best regards,\nSupport Team"));
    }

    #[tokio::test]
    async fn unreachable_provider_yields_fallback() {
        let config = InferenceConfig {
            base_url: "http://127.0.0.1:1/v1".to_string(),
            api_key: Some(SecretString::from("sk-test")),
            ..InferenceConfig::default()
        };
        let gateway = LlmClassificationGateway::from_config(config, "ACME Bank").unwrap();

        let reply = gateway.draft_reply(&email(), LanguageCode::En).await;
        assert!(reply.contains("temporarily unavailable"));
    }
}
