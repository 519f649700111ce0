use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode, jwk::JwkSet};
use serde_json::{Value, json};

pub const ISSUER: &str = "https://test-tenant.example.com/";
pub const AUDIENCE: &str = "coursework-api";

const KID: &str = "test-key";
const SECRET: &[u8] = b"casting-agency-test-secret-key-hs256-0000-xyz";
// base64url(SECRET)
const SECRET_B64: &str = "Y2FzdGluZy1hZ2VuY3ktdGVzdC1zZWNyZXQta2V5LWhzMjU2LTAwMDAteHl6";

pub fn test_key_set() -> JwkSet {
    serde_json::from_value(json!({
        "keys": [ { "kty": "oct", "kid": KID, "alg": "HS256", "k": SECRET_B64 } ]
    }))
    .unwrap()
}

/// Signs a token granting `permissions`. Entries of `overrides` replace the
/// default claims; a `null` override removes the claim.
pub fn mint_token(permissions: &[&str], overrides: Value) -> String {
    let now = Utc::now().timestamp();
    let mut claims = json!({
        "iss": ISSUER,
        "sub": "auth0|casting-director",
        "aud": AUDIENCE,
        "iat": now,
        "exp": now + 3600,
        "permissions": permissions,
    });

    if let (Some(claims), Some(overrides)) = (claims.as_object_mut(), overrides.as_object()) {
        for (key, value) in overrides {
            if value.is_null() {
                claims.remove(key);
            } else {
                claims.insert(key.clone(), value.clone());
            }
        }
    }

    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(KID.to_owned());
    encode(&header, &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
