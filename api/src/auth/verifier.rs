use super::{AuthError, Claims, KeySet};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use std::str::FromStr;
use std::time::Duration;
use util::config;

/// Auth settings left empty in the configuration.
pub fn missing_settings() -> Vec<&'static str> {
    let mut missing = Vec::new();
    if config::auth0_domain().is_empty() {
        missing.push("AUTH0_DOMAIN");
    }
    if config::api_audience().is_empty() {
        missing.push("API_AUDIENCE");
    }
    missing
}

/// Verifies bearer tokens issued by the identity provider.
pub struct TokenVerifier {
    keys: KeySet,
    issuer: String,
    audience: String,
    algorithms: Vec<Algorithm>,
}

impl TokenVerifier {
    pub fn new(
        keys: KeySet,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        algorithms: Vec<Algorithm>,
    ) -> Self {
        Self {
            keys,
            issuer: issuer.into(),
            audience: audience.into(),
            algorithms,
        }
    }

    /// Remote key set, issuer and audience taken from `AUTH0_DOMAIN`,
    /// `API_AUDIENCE` and `AUTH_ALGORITHMS`.
    pub fn from_config() -> Self {
        for setting in missing_settings() {
            tracing::warn!("{setting} is not set; every protected route will reject tokens");
        }

        let algorithms: Vec<Algorithm> = config::auth_algorithms()
            .iter()
            .filter_map(|name| match Algorithm::from_str(name) {
                Ok(alg) => Some(alg),
                Err(_) => {
                    tracing::warn!(algorithm = %name, "Ignoring unknown signing algorithm");
                    None
                }
            })
            .collect();
        let algorithms = if algorithms.is_empty() {
            vec![Algorithm::RS256]
        } else {
            algorithms
        };

        Self::new(
            KeySet::remote(
                config::jwks_url(),
                Duration::from_secs(config::jwks_cache_seconds()),
            ),
            config::auth_issuer(),
            config::api_audience(),
            algorithms,
        )
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token)
            .map_err(|_| AuthError::InvalidHeader("Unable to parse authentication token."))?;

        if !self.algorithms.contains(&header.alg) {
            return Err(AuthError::InvalidHeader("Token algorithm is not accepted."));
        }

        let jwk = self.keys.find(header.kid.as_deref()).await?;
        let key = DecodingKey::from_jwk(&jwk)
            .map_err(|_| AuthError::InvalidHeader("Unable to find the appropriate key."))?;

        let mut validation = Validation::new(header.alg);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::InvalidIssuer
                | ErrorKind::InvalidAudience
                | ErrorKind::MissingRequiredClaim(_)
                | ErrorKind::ImmatureSignature => AuthError::InvalidClaims,
                ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidHeader("Token algorithm does not match its key.")
                }
                _ => AuthError::InvalidHeader("Unable to parse authentication token."),
            })
    }
}
