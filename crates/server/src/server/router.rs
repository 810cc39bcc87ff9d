//! Axum router construction.

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/set", get(handlers::set_signed))
        .route("/get", get(handlers::get_signed))
        .route("/:level/set", get(handlers::set_cookie))
        .route("/:level/get", get(handlers::get_cookie))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use base64::{engine::general_purpose::URL_SAFE, Engine as _};
    use common::protocol::ErrorResponse;
    use tower::ServiceExt;

    async fn send(uri: &str, cookie: Option<&str>) -> Response {
        let mut req = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        build(AppState::default())
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// The `name=value` pair a browser would send back for the response's cookie.
    fn returned_pair(resp: &Response) -> String {
        let set_cookie = resp.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        let parsed = cookie::Cookie::parse(set_cookie.to_owned()).unwrap();
        format!("{}={}", parsed.name(), parsed.value())
    }

    async fn error_code(resp: Response) -> String {
        let body = body_text(resp).await;
        serde_json::from_str::<ErrorResponse>(&body).unwrap().code
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let resp = send("/unknown/route/here", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_level_returns_404() {
        let resp = send("/rot13/set", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_code(resp).await, "not_found");
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let resp = send("/health", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("\"ok\""));
    }

    #[tokio::test]
    async fn set_writes_cookie_with_attributes() {
        let resp = send("/encrypted/set", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let set_cookie = resp.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("exampleCookie="));
        for attr in ["Path=/", "Max-Age=3600", "HttpOnly", "Secure", "SameSite=Lax"] {
            assert!(set_cookie.contains(attr), "missing {attr} in {set_cookie}");
        }
        assert_eq!(body_text(resp).await, "cookie set!");
    }

    #[tokio::test]
    async fn set_then_get_round_trips_every_level() {
        for level in ["plain", "signed", "encrypted"] {
            let set = send(&format!("/{level}/set"), None).await;
            assert_eq!(set.status(), StatusCode::OK, "{level}/set");
            let pair = returned_pair(&set);

            let get = send(&format!("/{level}/get"), Some(&pair)).await;
            assert_eq!(get.status(), StatusCode::OK, "{level}/get");
            assert_eq!(
                body_text(get).await,
                "Name: \"Kevin\"\nAge: 23\nHeight: 5.9\nHaircolor: \"black\"\n"
            );
        }
    }

    #[tokio::test]
    async fn shorthand_routes_use_signed_cookies() {
        let set = send("/set", None).await;
        let pair = returned_pair(&set);
        assert_eq!(send("/get", Some(&pair)).await.status(), StatusCode::OK);
        assert_eq!(send("/signed/get", Some(&pair)).await.status(), StatusCode::OK);
        assert_eq!(
            send("/encrypted/get", Some(&pair)).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn missing_cookie_returns_400() {
        let resp = send("/signed/get", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "cookie_not_found");
    }

    #[tokio::test]
    async fn tampered_cookie_returns_400() {
        for level in ["signed", "encrypted"] {
            let set = send(&format!("/{level}/set"), None).await;
            let pair = returned_pair(&set);
            let (name, value) = pair.split_once('=').unwrap();

            let mut envelope = URL_SAFE.decode(value).unwrap();
            let last = envelope.len() - 1;
            envelope[last] ^= 0x01;
            let forged = format!("{name}={}", URL_SAFE.encode(&envelope));

            let resp = send(&format!("/{level}/get"), Some(&forged)).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{level}");
            assert_eq!(error_code(resp).await, "invalid_cookie");
        }
    }

    #[tokio::test]
    async fn plain_cookie_with_foreign_payload_returns_400() {
        let forged = format!("exampleCookie={}", URL_SAFE.encode(b"{\"admin\":true}"));
        let resp = send("/plain/get", Some(&forged)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
