//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use application::{
    ApplicationError, DraftStrategy, FailurePolicy, GenerationPort, LITE_INTEREST,
    LanguageClassifierPort, ModelDraftStrategy, ModelLoaderPort, ModelRegistry, OutreachService,
    PipelineMode, Stage, StageError, SummarizationPort, TemplateDraftStrategy, TranslationPort,
};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    http::{HeaderName, HeaderValue, StatusCode},
};
use axum_test::TestServer;
use domain::{DraftContent, FALLBACK_INTEREST, LanguageTag, OutreachBrief};
use presentation_http::{AppState, create_app, create_router};
use serde_json::json;

// ============ Test doubles ============

/// Strategy that always aborts at one stage
struct FailingStrategy(Stage);

#[async_trait]
impl DraftStrategy for FailingStrategy {
    fn mode(&self) -> PipelineMode {
        PipelineMode::Full
    }

    async fn draft(&self, _brief: &OutreachBrief) -> Result<DraftContent, StageError> {
        Err(StageError::new(self.0, &"x".repeat(800)))
    }
}

/// Strategy returning fixed content
struct FixedStrategy {
    interest: &'static str,
}

#[async_trait]
impl DraftStrategy for FixedStrategy {
    fn mode(&self) -> PipelineMode {
        PipelineMode::Full
    }

    async fn draft(&self, brief: &OutreachBrief) -> Result<DraftContent, StageError> {
        Ok(DraftContent {
            language: LanguageTag::english(),
            summary: brief.company_profile.clone(),
            interest: self.interest.to_string(),
        })
    }
}

struct FixedClassifier(&'static str);

impl LanguageClassifierPort for FixedClassifier {
    fn classify(&self, _text: &str) -> LanguageTag {
        LanguageTag::new(self.0)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

struct EchoModels;

#[async_trait]
impl TranslationPort for EchoModels {
    async fn translate(&self, _text: &str) -> Result<String, ApplicationError> {
        Err(ApplicationError::Internal("translation must be skipped".into()))
    }
}

#[async_trait]
impl SummarizationPort for EchoModels {
    async fn summarize(&self, _text: &str) -> Result<String, ApplicationError> {
        Ok("They make solar panels.".to_string())
    }
}

#[async_trait]
impl GenerationPort for EchoModels {
    async fn generate(&self, _prompt: &str) -> Result<String, ApplicationError> {
        Ok("We would like to co-develop products with you.\nWe would like to co-develop products with you.".to_string())
    }
}

/// Loader whose primary classifier is unsure and whose secondary says French
struct FrenchLoader;

#[async_trait]
impl ModelLoaderPort for FrenchLoader {
    async fn load_primary_classifier(
        &self,
    ) -> Result<Arc<dyn LanguageClassifierPort>, ApplicationError> {
        Ok(Arc::new(FixedClassifier("")))
    }

    async fn load_secondary_classifier(
        &self,
    ) -> Result<Arc<dyn LanguageClassifierPort>, ApplicationError> {
        Ok(Arc::new(FixedClassifier("fr")))
    }

    async fn load_translator(&self) -> Result<Arc<dyn TranslationPort>, ApplicationError> {
        Ok(Arc::new(EchoModels))
    }

    async fn load_summarizer(&self) -> Result<Arc<dyn SummarizationPort>, ApplicationError> {
        Ok(Arc::new(EchoModels))
    }

    async fn load_generator(&self) -> Result<Arc<dyn GenerationPort>, ApplicationError> {
        Ok(Arc::new(EchoModels))
    }
}

fn server_with(strategy: Arc<dyn DraftStrategy>) -> TestServer {
    let state = AppState::new(Arc::new(OutreachService::new(strategy)));
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn lite_server() -> TestServer {
    server_with(Arc::new(TemplateDraftStrategy))
}

fn payload(profile: &str) -> serde_json::Value {
    json!({
        "your_company": "Globex",
        "your_name": "Jasmine",
        "your_title": "BD Manager",
        "target_company": "Acme Inc.",
        "company_profile": profile
    })
}

fn today() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

// ============ Status Endpoint Tests ============

#[tokio::test]
async fn status_endpoint_reports_lite_mode() {
    let server = lite_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Backend is running");
    assert_eq!(body["endpoints"], json!(["POST /generate", "GET /healthz"]));
    assert_eq!(body["lite_mode"], "1");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn status_endpoint_reports_full_mode() {
    let server = server_with(Arc::new(FixedStrategy { interest: "" }));

    let body: serde_json::Value = server.get("/").await.json();
    assert_eq!(body["lite_mode"], "0");
}

#[tokio::test]
async fn healthz_returns_ok() {
    let server = lite_server();

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    response.assert_json(&json!({"ok": true}));
}

#[tokio::test]
async fn get_generate_returns_usage_hint() {
    let server = lite_server();

    let response = server.get("/generate").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "error": "Use POST /generate",
        "example_payload": {
            "your_company": "Your Co.",
            "your_name": "Jasmine",
            "your_title": "BD Manager",
            "target_company": "Acme Inc.",
            "company_profile": "Paste the target company's intro here..."
        }
    }));
}

// ============ Generate Endpoint Tests ============

#[tokio::test]
async fn lite_generation_scenario() {
    let server = lite_server();

    let response = server
        .post("/generate")
        .json(&payload("We build solar panels for residential use."))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let email = body["email_body_en"].as_str().unwrap();

    assert!(email.starts_with("Dear Acme Inc. Team,"));
    assert!(email.contains("impressed by: We build solar panels for residential use."));
    assert!(email.contains(LITE_INTEREST));
    assert!(email.ends_with("Best regards,\nJasmine\nBD Manager\nGlobex"));
    assert_eq!(
        body["filename"],
        format!("Business_Dev_Email_Acme Inc._{}.txt", today())
    );
}

#[tokio::test]
async fn blank_identity_fields_use_defaults() {
    let server = lite_server();

    let response = server
        .post("/generate")
        .json(&json!({
            "your_company": " ",
            "your_name": "",
            "your_title": "",
            "target_company": "",
            "company_profile": "Acme makes anvils."
        }))
        .await;

    let body: serde_json::Value = response.json();
    let email = body["email_body_en"].as_str().unwrap();
    assert!(email.starts_with("Dear Target Company Team,"));
    assert!(email.contains("My name is Your Name, and I am a BD Manager at Your Company."));
}

#[tokio::test]
async fn empty_profile_is_reported_with_ok_status() {
    let server = lite_server();

    let response = server.post("/generate").json(&payload("   \n\t ")).await;

    response.assert_status_ok();
    response.assert_json(&json!({"error": "Empty company profile."}));
}

#[tokio::test]
async fn stage_failure_reports_hint_and_truncated_details() {
    let server = server_with(Arc::new(FailingStrategy(Stage::Translate)));

    let response = server.post("/generate").json(&payload("我们是一家公司。")).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Translation model unavailable.");
    assert_eq!(
        body["hint"],
        "First run requires internet to download Hugging Face weights. Or set LITE_MODE=1 to skip models."
    );
    assert_eq!(body["details"].as_str().unwrap().chars().count(), 500);
    assert!(body.get("email_body_en").is_none());
}

#[tokio::test]
async fn short_interest_is_replaced_by_fallback() {
    let server = server_with(Arc::new(FixedStrategy { interest: "Hi." }));

    let body: serde_json::Value = server
        .post("/generate")
        .json(&payload("Acme makes anvils."))
        .await
        .json();

    let email = body["email_body_en"].as_str().unwrap();
    assert!(email.contains(FALLBACK_INTEREST));
    assert!(!email.contains("\n\nHi.\n\n"));
}

#[tokio::test]
async fn escalated_language_skips_translation_end_to_end() {
    let registry = Arc::new(ModelRegistry::new(Arc::new(FrenchLoader)));
    let strategy = ModelDraftStrategy::new(registry, FailurePolicy::default());
    let server = server_with(Arc::new(strategy));

    let body: serde_json::Value = server
        .post("/generate")
        .json(&payload(
            "Nous fabriquons des panneaux solaires. Depuis 1990. Pour les maisons individuelles.",
        ))
        .await
        .json();

    let email = body["email_body_en"].as_str().expect("email body");
    assert!(email.contains("impressed by: They make solar panels."));
    assert_eq!(
        email.matches("We would like to co-develop products with you.").count(),
        1
    );
}

// ============ Validation Tests ============

#[tokio::test]
async fn missing_field_is_unprocessable() {
    let server = lite_server();

    let response = server
        .post("/generate")
        .json(&json!({"company_profile": "Acme makes anvils."}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "validation_error");
}

#[tokio::test]
async fn malformed_json_is_unprocessable() {
    let server = lite_server();

    let response = server
        .post("/generate")
        .bytes(Bytes::from_static(b"{\"company_profile\": "))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn oversized_profile_is_bad_request() {
    let server = lite_server();

    let response = server
        .post("/generate")
        .json(&payload(&"a".repeat(20_001)))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "validation_error");
    assert!(body["error"].as_str().unwrap().contains("company_profile"));
}

#[tokio::test]
async fn oversized_identity_field_is_bad_request() {
    let server = lite_server();

    let mut body = payload("Acme makes anvils.");
    body["target_company"] = json!("A".repeat(201));

    let response = server.post("/generate").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ============ Middleware Tests ============

#[tokio::test]
async fn cors_allows_any_origin() {
    let state = AppState::new(Arc::new(OutreachService::new(Arc::new(
        TemplateDraftStrategy,
    ))));
    let server = TestServer::new(create_app(state)).expect("Failed to create test server");

    let response = server
        .get("/healthz")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("chrome-extension://abcdef"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = lite_server();

    let response = server.get("/v1/chat").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
