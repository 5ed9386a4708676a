pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Scan
        .route("/api/v1/scan", post(analysis::handle_scan))
        // Generate Resume
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        .route(
            "/api/v1/resumes/generate/pdf",
            post(generation::handle_generate_pdf),
        )
        // Paginator only
        .route("/api/v1/render", post(generation::handle_render))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extraction::docx::fixtures::docx_with_paragraphs;
    use crate::layout::default_page_config;
    use crate::llm_client::testing::ScriptedModel;

    const BOUNDARY: &str = "ats-test-boundary";

    const REPORT: &str = "Candidate Matching Score: 64%\n\nMissing Keywords:\n- Kafka\n- Terraform\n";

    fn test_state(model: Arc<ScriptedModel>) -> AppState {
        AppState {
            model,
            config: Config {
                google_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                max_upload_bytes: 1024 * 1024,
            },
            page_config: default_page_config(),
        }
    }

    fn multipart_request(uri: &str, job_description: &str, file: Option<(&str, &[u8])>) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"job_description\"\r\n\r\n{job_description}\r\n"
            )
            .as_bytes(),
        );
        if let Some((filename, content)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn resume_docx() -> Vec<u8> {
        docx_with_paragraphs(&["Jane Doe", "Software Engineer", "Skills: Go, SQL"])
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(Arc::new(ScriptedModel::default())));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_scan_returns_report_and_parsed_fields() {
        let model = Arc::new(ScriptedModel::new(vec![REPORT]));
        let app = build_router(test_state(model.clone()));
        let docx = resume_docx();

        let response = app
            .oneshot(multipart_request(
                "/api/v1/scan",
                "Backend engineer with Kafka",
                Some(("Resume.DOCX", docx.as_slice())),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["report"], REPORT);
        assert_eq!(body["match_score"], 64);
        assert_eq!(body["missing_keywords"], serde_json::json!(["Kafka", "Terraform"]));

        assert_eq!(model.call_count(), 1);
        assert!(model.prompts()[0].contains("Jane Doe\nSoftware Engineer\nSkills: Go, SQL"));
    }

    #[tokio::test]
    async fn test_scan_rejects_unsupported_format() {
        let model = Arc::new(ScriptedModel::new(vec![REPORT]));
        let app = build_router(test_state(model.clone()));

        let response = app
            .oneshot(multipart_request(
                "/api/v1/scan",
                "Backend engineer",
                Some(("resume.txt", &b"Jane Doe"[..])),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains(".pdf, .docx"));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_scan_without_file_is_empty_input() {
        let model = Arc::new(ScriptedModel::new(vec![REPORT]));
        let app = build_router(test_state(model.clone()));

        let response = app
            .oneshot(multipart_request("/api/v1/scan", "Backend engineer", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "EMPTY_INPUT");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_surfaces_format_fallback() {
        let model = Arc::new(ScriptedModel::new(vec![REPORT, "Draft resume", ""]));
        let app = build_router(test_state(model.clone()));
        let docx = resume_docx();

        let response = app
            .oneshot(multipart_request(
                "/api/v1/resumes/generate",
                "Backend engineer",
                Some(("resume.docx", docx.as_slice())),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["resume_text"], "Draft resume");
        assert_eq!(body["formatted"], false);
        assert_eq!(
            body["warnings"],
            serde_json::json!(["Failed to generate a formatted resume."])
        );
        assert_eq!(model.call_count(), 3);
    }

    #[tokio::test]
    async fn test_generate_stops_when_draft_is_empty() {
        let model = Arc::new(ScriptedModel::new(vec![REPORT, ""]));
        let app = build_router(test_state(model.clone()));
        let docx = resume_docx();

        let response = app
            .oneshot(multipart_request(
                "/api/v1/resumes/generate",
                "Backend engineer",
                Some(("resume.docx", docx.as_slice())),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"]["code"], "GENERATION_FAILED");
        // analysis + draft; the reformat stage never runs
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_generate_pdf_is_download() {
        let model = Arc::new(ScriptedModel::new(vec![
            REPORT,
            "Draft resume",
            "Contact Information:\n**Jane Doe**",
        ]));
        let app = build_router(test_state(model));
        let docx = resume_docx();

        let response = app
            .oneshot(multipart_request(
                "/api/v1/resumes/generate/pdf",
                "Backend engineer",
                Some(("resume.docx", docx.as_slice())),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"formatted_resume.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_render_rejects_null_text() {
        let app = build_router(test_state(Arc::new(ScriptedModel::default())));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/render")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text": null}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "EMPTY_INPUT");
    }

    #[tokio::test]
    async fn test_render_returns_pdf() {
        let app = build_router(test_state(Arc::new(ScriptedModel::default())));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/render")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text": "Skills:\n• Rust"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
