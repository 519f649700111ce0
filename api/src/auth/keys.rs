use super::AuthError;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Source of the public keys tokens are verified against.
pub enum KeySet {
    /// A fixed set, e.g. pinned keys or keys minted in tests.
    Static(JwkSet),
    /// The provider's published set, fetched lazily and cached.
    Remote(RemoteKeySet),
}

/// Shortest gap between two fetches forced by an unknown `kid`.
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

pub struct RemoteKeySet {
    url: String,
    ttl: Duration,
    min_refresh: Duration,
    client: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

impl KeySet {
    pub fn remote(url: impl Into<String>, ttl: Duration) -> Self {
        KeySet::Remote(RemoteKeySet {
            url: url.into(),
            ttl,
            min_refresh: MIN_REFRESH_INTERVAL,
            client: reqwest::Client::new(),
            cache: RwLock::new(None),
        })
    }

    /// Key matching the token's `kid`. A token without `kid` is accepted only
    /// when the set holds exactly one key.
    pub async fn find(&self, kid: Option<&str>) -> Result<Jwk, AuthError> {
        match self {
            KeySet::Static(set) => select(set, kid),
            KeySet::Remote(remote) => remote.find(kid).await,
        }
    }
}

fn select(set: &JwkSet, kid: Option<&str>) -> Result<Jwk, AuthError> {
    let found = match kid {
        Some(kid) => set.find(kid),
        None if set.keys.len() == 1 => set.keys.first(),
        None => None,
    };
    found
        .cloned()
        .ok_or(AuthError::InvalidHeader("Unable to find the appropriate key."))
}

impl RemoteKeySet {
    async fn find(&self, kid: Option<&str>) -> Result<Jwk, AuthError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                let age = cached.fetched_at.elapsed();
                if age < self.ttl {
                    match select(&cached.keys, kid) {
                        Ok(key) => return Ok(key),
                        Err(err) if age < self.min_refresh => {
                            tracing::debug!(kid = ?kid, "Unknown key id; refresh not due yet");
                            return Err(err);
                        }
                        Err(_) => {}
                    }
                }
            }
        }

        // Stale cache or unknown kid (the provider may have rotated keys).
        let keys = self.fetch().await?;
        let key = select(&keys, kid);
        *self.cache.write().await = Some(CachedKeys {
            keys,
            fetched_at: Instant::now(),
        });
        key
    }

    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        tracing::info!(url = %self.url, "Fetching signing keys");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::error!(error = %e, url = %self.url, "Signing key fetch failed");
                AuthError::KeySetUnavailable(e.to_string())
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            tracing::error!(error = %e, url = %self.url, "Signing key set is not valid JSON");
            AuthError::KeySetUnavailable(e.to_string())
        })
    }
}
