//! Triage API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//!
//! Middleware stack (outermost → innermost):
//! 1. Security headers → 2. Extension(ApiContext) → 3. Access log → 4. Session

use axum::http::header::{
    CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS, X_XSS_PROTECTION,
};
use axum::http::{HeaderName, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::config::ServerConfig;

const SECURITY_HEADERS: [(HeaderName, &str); 6] = [
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "DENY"),
    (X_XSS_PROTECTION, "1; mode=block"),
    (REFERRER_POLICY, "strict-origin-when-cross-origin"),
    (STRICT_TRANSPORT_SECURITY, "max-age=31536000; includeSubDomains"),
    (CONTENT_SECURITY_POLICY, "default-src 'self'; frame-ancestors 'none'"),
];

/// Build the triage API router.
///
/// Middleware uses `Extension<ApiContext>` (injected outside the session
/// layer). Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
pub fn triage_router(config: ServerConfig) -> Router {
    build_router(ApiContext::new(config))
}

/// Build router from a pre-constructed `ApiContext`.
pub(crate) fn build_router(ctx: ApiContext) -> Router {
    let mut router = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/set_language", post(endpoints::language::set))
        .route("/calculate_ctas", post(endpoints::assessment::calculate))
        .route("/download_csv", post(endpoints::assessment::download_csv))
        .route(
            "/calculate_self_assessment",
            post(endpoints::self_assessment::calculate),
        )
        .route(
            "/download_self_assessment_csv",
            post(endpoints::self_assessment::download_csv),
        )
        .with_state(ctx.clone())
        // Innermost first, outermost last
        .layer(axum::middleware::from_fn(middleware::session::resolve_session))
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::Extension(ctx));

    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ));
    }
    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE, SET_COOKIE};
    use axum::http::{Request, Response, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        triage_router(ServerConfig::default())
    }

    fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(c) = cookie {
            builder = builder.header(COOKIE, c);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn language_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/set_language")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: Response<Body>) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    /// Switch the session language to English and return the cookie pair.
    async fn english_session(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(language_request(r#"{"language":"en"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_response_shape() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], "2.0.0-ctas");
        assert_eq!(json["system"], "CTAS Triage System - Saudi Arabia");
        assert_eq!(json["environment"], "production");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn security_headers_on_every_response() {
        let response = app()
            .oneshot(Request::get("/nonexistent").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let headers = response.headers();
        assert_eq!(headers.get(X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert_eq!(headers.get(X_FRAME_OPTIONS).unwrap(), "DENY");
        assert!(headers.contains_key(CONTENT_SECURITY_POLICY));
        assert!(headers.contains_key(STRICT_TRANSPORT_SECURITY));
    }

    #[tokio::test]
    async fn chest_pain_is_level_two_in_default_language() {
        let req = form_request(
            "/calculate_ctas",
            "patient_age=45&chief_complaint=chest_pain_cardiac&heart_rate=90&spo2=96",
            None,
        );
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["ctas_level"], 2);
        assert_eq!(json["reassessment_interval"], 15);
        assert_eq!(json["lang"], "ar");
        assert_eq!(json["complaint"], "ألم في الصدر (يشتبه بالقلب)");
        assert_eq!(json["wait_time_estimate"], "≤ 15 دقيقة");
        assert_eq!(json["name"], "N/A");
        assert_eq!(json["pain"], "0");
        assert!(json["gender"].is_null());
        assert_eq!(json["validation_warnings"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn out_of_range_values_are_reported_not_rejected() {
        let req = form_request(
            "/calculate_ctas",
            "patient_age=30&chief_complaint=rash&heart_rate=250",
            None,
        );
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        // 250 bpm is a critical adult vital, so the level is still computed.
        assert_eq!(json["ctas_level"], 1);
        let warnings = json["validation_warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["field"], "heart_rate");
        assert_eq!(warnings[0]["range"], "30-220 bpm");
    }

    #[tokio::test]
    async fn repeated_form_key_uses_first_value() {
        let req = form_request(
            "/calculate_ctas",
            "patient_age=30&chief_complaint=rash&chief_complaint=shock",
            None,
        );
        let json = response_json(app().oneshot(req).await.unwrap()).await;
        assert_eq!(json["ctas_level"], 5);
        assert_eq!(json["complaint"], "طفح جلدي");
    }

    #[tokio::test]
    async fn missing_age_is_rejected_before_complaint() {
        let req = form_request("/calculate_ctas", "patient_age=&heart_rate=80", None);
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "MISSING_AGE");
        assert_eq!(json["error"]["message"], "بيانات مطلوبة مفقودة");
    }

    #[tokio::test]
    async fn missing_complaint_is_rejected() {
        let req = form_request("/calculate_ctas", "patient_age=30", None);
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "MISSING_COMPLAINT");
        assert_eq!(json["error"]["details"]["field"], "chief_complaint");
    }

    #[tokio::test]
    async fn non_form_body_is_a_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/calculate_ctas")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"patient_age":"30"}"#))
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn language_switch_persists_for_session() {
        let app = app();
        let cookie = english_session(&app).await;
        assert!(cookie.starts_with("triage_session="));

        let req = form_request(
            "/calculate_ctas",
            "patient_age=30&chief_complaint=rash",
            Some(&cookie),
        );
        let response = app.clone().oneshot(req).await.unwrap();
        let json = response_json(response).await;
        assert_eq!(json["lang"], "en");
        assert_eq!(json["complaint"], "Rash");
        assert_eq!(json["ctas_level"], 5);
        assert_eq!(json["wait_time_estimate"], "≤ 120 minutes");

        // A different client without the cookie still gets the default.
        let req = form_request("/calculate_ctas", "patient_age=30&chief_complaint=rash", None);
        let json = response_json(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["lang"], "ar");
    }

    #[tokio::test]
    async fn set_language_cookie_attributes() {
        let response = app()
            .oneshot(language_request(r#"{"language":"en"}"#))
            .await
            .unwrap();
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap().to_string();
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("Max-Age=3600"));

        let json = response_json(response).await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["language"], "en");
    }

    #[tokio::test]
    async fn unsupported_language_is_rejected() {
        let response = app()
            .oneshot(language_request(r#"{"language":"fr"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(SET_COOKIE).is_none());

        let json = response_json(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Unsupported language");
    }

    #[tokio::test]
    async fn self_assessment_derives_before_classifying() {
        let app = app();
        let cookie = english_session(&app).await;
        let req = form_request(
            "/calculate_self_assessment",
            "patient_age=40&main_symptom=cannot_breathe&alertness=A",
            Some(&cookie),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["level"], 1);
        assert_eq!(json["reassessment_interval"], 0);
        assert_eq!(json["main_symptom"], "Cannot breathe / Severe choking");
        assert_eq!(json["alertness"], "Fully awake and alert");
        assert_eq!(json["recommendation"]["title"], "CTAS I - Resuscitation");
        assert_eq!(json["recommendation"]["tone"], "critical");
    }

    #[tokio::test]
    async fn self_assessment_requires_main_symptom() {
        let req = form_request("/calculate_self_assessment", "patient_age=40", None);
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "MISSING_SYMPTOM");
    }

    #[tokio::test]
    async fn professional_csv_download() {
        let req = form_request(
            "/download_csv",
            "patient_name=Sara+Ali&patient_age=45&chief_complaint=stroke",
            None,
        );
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"ctas_assessment_saraali_"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.starts_with(b"\xEF\xBB\xBF"));
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("جلطة دماغية"));
        assert!(text.trim_end().ends_with(",2"));
    }

    #[tokio::test]
    async fn self_assessment_csv_download() {
        let req = form_request(
            "/download_self_assessment_csv",
            "patient_age=22&main_symptom=minor_injury&alertness=A",
            None,
        );
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("filename=\"self_assessment_"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("Assessment Date/Time"));
        assert!(text.contains("إصابة طفيفة"));
    }
}
