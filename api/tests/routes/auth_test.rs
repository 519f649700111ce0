#[cfg(test)]
mod tests {
    use crate::helpers::{ISSUER, bearer, get_json_body, make_test_app, mint_token};
    use api::auth::TokenVerifier;
    use api::auth::verifier::missing_settings;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::{self, AppConfig};

    fn get_actors(authorization: Option<String>) -> Request<AxumBody> {
        let mut builder = Request::builder().method("GET").uri("/actors");
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }
        builder.body(AxumBody::empty()).unwrap()
    }

    async fn rejection(authorization: Option<String>) -> Value {
        let (app, _) = make_test_app().await;
        let response = app.oneshot(get_actors(authorization)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 401);
        assert_eq!(json["message"], "authentification failed");
        json
    }

    #[tokio::test]
    async fn test_missing_header() {
        let json = rejection(None).await;
        assert_eq!(json["code"], "authorization_header_missing");
    }

    #[tokio::test]
    async fn test_non_bearer_scheme() {
        let token = mint_token(&["get:actors"], json!({}));
        let json = rejection(Some(format!("Basic {token}"))).await;
        assert_eq!(json["code"], "invalid_header");
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let json = rejection(Some(bearer("not.a.jwt"))).await;
        assert_eq!(json["code"], "invalid_header");
    }

    #[tokio::test]
    async fn test_expired_token() {
        let past = Utc::now().timestamp() - 7200;
        let token = mint_token(&["get:actors"], json!({ "iat": past - 3600, "exp": past }));
        let json = rejection(Some(bearer(&token))).await;
        assert_eq!(json["code"], "token_expired");
    }

    #[tokio::test]
    async fn test_wrong_issuer() {
        let token = mint_token(&["get:actors"], json!({ "iss": "https://evil.example.com/" }));
        let json = rejection(Some(bearer(&token))).await;
        assert_eq!(json["code"], "invalid_claims");
    }

    #[tokio::test]
    async fn test_wrong_audience() {
        let token = mint_token(&["get:actors"], json!({ "aud": ["someone-else"] }));
        let json = rejection(Some(bearer(&token))).await;
        assert_eq!(json["code"], "invalid_claims");
    }

    #[tokio::test]
    async fn test_tampered_signature() {
        let token = mint_token(&["get:actors"], json!({}));
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = mint_token(&["get:actors", "delete:actors"], json!({}));
        let forged_payload = forged.split('.').nth(1).unwrap().to_owned();
        parts[1] = &forged_payload;

        let json = rejection(Some(bearer(&parts.join(".")))).await;
        assert_eq!(json["code"], "invalid_signature");
    }

    #[tokio::test]
    async fn test_permissions_claim_absent() {
        let token = mint_token(&[], json!({ "permissions": null }));
        let json = rejection(Some(bearer(&token))).await;
        assert_eq!(json["code"], "permissions_missing");
    }

    #[tokio::test]
    async fn test_required_permission_absent() {
        let token = mint_token(&["get:movies"], json!({}));
        let json = rejection(Some(bearer(&token))).await;
        assert_eq!(json["code"], "unauthorized");
    }

    #[tokio::test]
    async fn test_audience_list_containing_api_is_accepted() {
        let (app, _) = make_test_app().await;
        let token = mint_token(
            &["get:actors"],
            json!({ "aud": ["coursework-api", "https://test-tenant.example.com/userinfo"] }),
        );

        let response = app.oneshot(get_actors(Some(bearer(&token)))).await.unwrap();
        // Authorized; the table is empty.
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    #[serial]
    fn test_verifier_from_config_uses_tenant_issuer() {
        AppConfig::set_auth0_domain("test-tenant.example.com");
        AppConfig::set_api_audience("coursework-api");

        let verifier = TokenVerifier::from_config();
        assert_eq!(verifier.issuer(), ISSUER);
        assert_eq!(verifier.audience(), "coursework-api");
        assert_eq!(
            config::jwks_url(),
            "https://test-tenant.example.com/.well-known/jwks.json"
        );

        AppConfig::reset();
    }

    #[test]
    #[serial]
    fn test_missing_audience_is_reported() {
        AppConfig::set_auth0_domain("test-tenant.example.com");
        AppConfig::set_api_audience("");
        assert_eq!(missing_settings(), vec!["API_AUDIENCE"]);

        AppConfig::set_auth0_domain("");
        assert_eq!(missing_settings(), vec!["AUTH0_DOMAIN", "API_AUDIENCE"]);

        AppConfig::set_api_audience("coursework-api");
        AppConfig::set_auth0_domain("test-tenant.example.com");
        assert!(missing_settings().is_empty());

        AppConfig::reset();
    }
}
