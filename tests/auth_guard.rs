// =====================================================
// 인증 가드 통합 테스트
// =====================================================
// 보호된 라우트는 모두 유효한 Bearer 토큰을 요구한다.
// 토큰 검증 실패 사유(서명, 만료, 형식)는 응답에서 구분되지 않는다.

mod common;
use common::*;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use finance_api::domains::auth::services::issue_token;
use serde_json::json;
use tower::ServiceExt;

/// 테스트: 토큰 없이 요청
#[tokio::test]
async fn test_missing_token_is_rejected() {
    for (method, uri) in [
        (Method::GET, "/categorias"),
        (Method::POST, "/categorias"),
        (Method::GET, "/transacciones"),
        (Method::GET, "/transacciones/1"),
        (Method::DELETE, "/transacciones"),
    ] {
        let (status, body) = send(default_app(), method.clone(), uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(body, json!({ "error": "Authorization token required" }));
    }
}

/// 테스트: Bearer 가 아닌 Authorization 헤더
#[tokio::test]
async fn test_non_bearer_scheme_is_missing_token() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/categorias")
        .header(header::AUTHORIZATION, format!("Token {}", user_token()))
        .body(Body::empty())
        .unwrap();

    let response = default_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Authorization token required");
}

/// 테스트: 형식이 잘못된 토큰
#[tokio::test]
async fn test_malformed_token_is_rejected() {
    for token in ["garbage", "a.b", "a.b.c", "a.b.c.d", "..", "x..y"] {
        let (status, body) =
            send(default_app(), Method::GET, "/transacciones", Some(token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "token {:?}", token);
        assert_eq!(body, json!({ "error": "Invalid or expired token" }));
    }
}

/// 테스트: 다른 비밀키로 서명된 토큰
#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let now = chrono::Utc::now().timestamp();
    let token = issue_token("42", b"someone-elses-secret", now).unwrap();

    let (status, body) = send(default_app(), Method::GET, "/categorias", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

/// 테스트: 만료된 토큰
#[tokio::test]
async fn test_expired_token_is_rejected() {
    // 1시간 + 1초 전에 발급 → exp 가 현재보다 과거
    let issued_at = chrono::Utc::now().timestamp() - 3601;
    let token = issue_token("42", TEST_SECRET, issued_at).unwrap();

    let (status, body) =
        send(default_app(), Method::GET, "/transacciones", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

/// 테스트: 숫자가 아닌 subject
#[tokio::test]
async fn test_non_numeric_subject_is_rejected() {
    let token = token_for("firebase-uid-abc");

    let (status, body) = send(default_app(), Method::GET, "/categorias", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

/// 테스트: 인증은 본문 검증보다 먼저 수행됨
#[tokio::test]
async fn test_auth_runs_before_body_validation() {
    let (status, _) = send(
        default_app(),
        Method::POST,
        "/transacciones",
        Some("not-a-token"),
        Some(json!({ "tipo": "Prestamo" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// 테스트: 서명된 토큰의 페이로드를 바꾸면 거절
#[tokio::test]
async fn test_tampered_payload_is_rejected() {
    let token = user_token();
    let forged = token_for("1");

    let mut parts: Vec<&str> = token.split('.').collect();
    let forged_payload = forged.split('.').nth(1).unwrap();
    parts[1] = forged_payload;
    let tampered = parts.join(".");

    let (status, _) = send(default_app(), Method::GET, "/categorias", Some(&tampered), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// 테스트: BIGINT 범위를 넘는 subject
#[tokio::test]
async fn test_subject_beyond_bigint_is_rejected() {
    let token = token_for(&u64::MAX.to_string());

    let (status, body) = send(default_app(), Method::GET, "/transacciones", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}
