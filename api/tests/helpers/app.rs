use api::{auth::KeySet, auth::TokenVerifier, routes::routes, state::AppState};
use axum::{body::Body, http::Request, response::Response};
use db::test_utils::setup_test_db;
use jsonwebtoken::{Algorithm, jwk::JwkSet};
use serde_json::Value;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;

use super::auth::{AUDIENCE, ISSUER, test_key_set};

pub type TestApp = BoxCloneService<Request<Body>, Response, Infallible>;

/// Router over a fresh in-memory database, verifying tokens against the
/// static test key set.
pub async fn make_test_app() -> (TestApp, AppState) {
    let db = setup_test_db().await;
    let keys: JwkSet = test_key_set();
    let verifier = TokenVerifier::new(
        KeySet::Static(keys),
        ISSUER,
        AUDIENCE,
        vec![Algorithm::HS256],
    );
    let app_state = AppState::new(db, verifier);

    let router = routes(app_state.clone());
    (router.into_service().boxed_clone(), app_state)
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
