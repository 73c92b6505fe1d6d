pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as cv;
use crate::courses::handlers as courses;
use crate::cover_letter::handlers as letters;
use crate::render::handlers as render;
use crate::roles::handlers as roles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // CV API
        .route("/api/v1/cv/segment", post(cv::handle_segment))
        .route("/api/v1/cv/upload", post(cv::handle_upload))
        .route("/api/v1/cv/analyze", post(cv::handle_analyze))
        // Role catalog
        .route("/api/v1/roles", get(roles::handle_list_roles))
        .route(
            "/api/v1/roles/:company/:role",
            get(roles::handle_get_requirements),
        )
        // Rendering
        .route("/api/v1/render/cv", post(render::handle_render_cv))
        // Cover letters and learning resources
        .route("/api/v1/cover-letter", post(letters::handle_generate_cover_letter))
        .route(
            "/api/v1/cover-letter/regenerate",
            post(letters::handle_regenerate_cover_letter),
        )
        .route("/api/v1/courses/recommend", post(courses::handle_recommend_courses))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;

    const BOUNDARY: &str = "tailor-test-boundary";

    const CV_TEXT: &str = "Jane Doe\njane@example.com | +1 555 010 2030\n\
        SUMMARY\nSystems engineer.\n\
        SKILLS\nJavaScript, React, Node.js, Algorithms\n\
        EXPERIENCE\nSoftware Engineer\nAcme\n2020 - 2023\n\
        EDUCATION\nBSc Computer Science";

    fn app() -> Router {
        app_with(Config::default())
    }

    fn app_with(config: Config) -> Router {
        build_router(AppState::from_config(config).unwrap())
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Builds a multipart body from `(name, filename, value)` parts.
    fn multipart_request(uri: &str, parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (name, filename, value) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(value);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

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

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "tailor-api");
    }

    #[tokio::test]
    async fn test_segment() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/cv/segment",
                serde_json::json!({ "text": CV_TEXT }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["sections"][0]["type"], "summary");
        assert_eq!(json["sections"][1]["content"][0], "JavaScript, React, Node.js, Algorithms");
    }

    #[tokio::test]
    async fn test_segment_empty_text_is_400() {
        let response = app()
            .oneshot(json_request("/api/v1/cv/segment", serde_json::json!({ "text": "  \n" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_txt() {
        let response = app()
            .oneshot(multipart_request(
                "/api/v1/cv/upload",
                &[("cv", Some("jane.txt"), CV_TEXT)],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["filename"], "jane.txt");
        assert_eq!(json["profile"]["email"], "jane@example.com");
        assert_eq!(json["profile"]["skills"][1], "React");
        assert_eq!(json["segmented"]["sections"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_upload_legacy_doc_is_415() {
        let response = app()
            .oneshot(multipart_request(
                "/api/v1/cv/upload",
                &[("cv", Some("jane.doc"), CV_TEXT)],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_400() {
        let response = app()
            .oneshot(multipart_request(
                "/api/v1/cv/upload",
                &[("company", None, "google")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_empty_file_is_400() {
        let response = app()
            .oneshot(multipart_request("/api/v1/cv/upload", &[("cv", Some("cv.txt"), "")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_413() {
        let config = Config {
            max_upload_bytes: 256,
            ..Config::default()
        };
        let big = "x".repeat(4096);
        let response = app_with(config)
            .oneshot(multipart_request(
                "/api/v1/cv/upload",
                &[("cv", Some("big.txt"), big.as_str())],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_analyze_with_catalog_role() {
        let response = app()
            .oneshot(multipart_request(
                "/api/v1/cv/analyze",
                &[
                    ("cv", Some("jane.txt"), CV_TEXT),
                    ("company", None, "google"),
                    ("role", None, "Software Engineer"),
                    ("company_name", None, "Google"),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let analysis = &json["analysis"];
        assert_eq!(analysis["analyzer"], "basic");
        // JavaScript, React, Node.js, Algorithms of six required skills
        assert_eq!(analysis["matching_skills"].as_array().unwrap().len(), 4);
        assert_eq!(
            analysis["missing_skills"],
            serde_json::json!(["Cloud Computing", "System Design"])
        );
        assert_eq!(analysis["score"], 67);
        assert_eq!(json["match_score"]["level"], "Good Match");
        assert_eq!(json["match_score"]["color"], "#f57c00");
        assert_eq!(json["company_name"], "Google");
        assert!(json["analysis_id"].is_string());
        assert!(json["improved_cv"].is_null());
    }

    #[tokio::test]
    async fn test_analyze_with_inline_requirements() {
        let response = app()
            .oneshot(multipart_request(
                "/api/v1/cv/analyze",
                &[
                    ("cv", Some("jane.txt"), CV_TEXT),
                    ("company", None, "acme"),
                    ("role", None, "Frontend Dev"),
                    (
                        "role_requirements",
                        None,
                        r#"{"skills":["React","Vue"],"experience":2}"#,
                    ),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["role_requirements"]["experience_years"], 2);
        assert_eq!(json["analysis"]["missing_skills"], serde_json::json!(["Vue"]));
        assert_eq!(json["match_score"]["level"], "Good Match");
    }

    #[tokio::test]
    async fn test_analyze_unknown_role_is_404() {
        let response = app()
            .oneshot(multipart_request(
                "/api/v1/cv/analyze",
                &[
                    ("cv", Some("jane.txt"), CV_TEXT),
                    ("company", None, "google"),
                    ("role", None, "Astronaut"),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_analyze_missing_role_is_400() {
        let response = app()
            .oneshot(multipart_request(
                "/api/v1/cv/analyze",
                &[("cv", Some("jane.txt"), CV_TEXT), ("company", None, "google")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_roles_endpoints() {
        let response = app()
            .oneshot(Request::get("/api/v1/roles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["amazon"][0], "Software Developer");

        let response = app()
            .oneshot(
                Request::get("/api/v1/roles/microsoft/Cloud%20Engineer")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["experience_years"], 2);

        let response = app()
            .oneshot(
                Request::get("/api/v1/roles/microsoft/Chef")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_render_cv_html() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/render/cv",
                serde_json::json!({ "cv_content": CV_TEXT, "template": "technical" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("// TECHNICAL STACK"));
        assert!(html.contains("mailto:jane@example.com"));
    }

    #[tokio::test]
    async fn test_render_empty_content_is_400() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/render/cv",
                serde_json::json!({ "cv_content": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cover_letter_from_user_info() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/cover-letter",
                serde_json::json!({
                    "company": "Acme",
                    "role": "Platform Engineer",
                    "template": "technical",
                    "userInfo": { "name": "Ada Lovelace", "skills": ["Rust", "Go"] }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["writer"], "template");
        assert_eq!(json["template"], "technical");
        let content = json["content"].as_str().unwrap();
        assert!(content.contains("Platform Engineer position at Acme"));
        assert!(content.ends_with("Ada Lovelace"));
        let html = json["html"].as_str().unwrap();
        assert!(html.contains("Consolas"));
        assert!(html.contains("<title>Cover Letter - Ada Lovelace</title>"));
        assert!(json["letter_id"].is_string());
    }

    #[tokio::test]
    async fn test_cover_letter_from_cv_text() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/cover-letter",
                serde_json::json!({ "company": "Google", "role": "SRE", "cv_text": CV_TEXT }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["template"], "professional");
        let content = json["content"].as_str().unwrap();
        assert!(content.contains("skills such as JavaScript, React, Node.js,"));
        assert!(content.contains("experience in Software Engineer"));
        assert!(content.ends_with("Jane Doe"));
    }

    #[tokio::test]
    async fn test_cover_letter_requires_company_and_candidate() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/cover-letter",
                serde_json::json!({ "role": "SRE", "cv_text": CV_TEXT }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app()
            .oneshot(json_request(
                "/api/v1/cover-letter",
                serde_json::json!({ "company": "Google", "role": "SRE", "cv_text": "  " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_regenerate_without_model_keeps_content() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/cover-letter/regenerate",
                serde_json::json!({
                    "content": "Dear Hiring Manager,\n\nHire me.",
                    "company": "Acme",
                    "role": "SRE"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["content"], "Dear Hiring Manager,\n\nHire me.");
        assert!(json["html"].as_str().unwrap().contains("<p>Hire me.</p>"));

        let response = app()
            .oneshot(json_request(
                "/api/v1/cover-letter/regenerate",
                serde_json::json!({ "content": "", "company": "Acme", "role": "SRE" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_courses_for_missing_skills() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/courses/recommend",
                serde_json::json!({
                    "missingSkills": ["Cloud Computing", "System Design"],
                    "company": "google",
                    "role": "Software Engineer"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Found 5 resources!");
        assert_eq!(json["recommender"], "static");
        assert_eq!(json["recommendations"][0]["skill_gap"], "Cloud Computing");
    }

    #[tokio::test]
    async fn test_courses_without_gaps() {
        let response = app()
            .oneshot(json_request(
                "/api/v1/courses/recommend",
                serde_json::json!({ "missing_skills": [" "] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["message"],
            "No skill gaps found! Your CV matches the role perfectly."
        );
        assert_eq!(json["recommendations"], serde_json::json!([]));
        assert!(json["recommender"].is_null());
    }
}
