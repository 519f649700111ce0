use crate::auth::verifier::TokenVerifier;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared handles threaded to every handler through the router state.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, verifier: TokenVerifier) -> Self {
        Self {
            db,
            verifier: Arc::new(verifier),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn verifier(&self) -> Arc<TokenVerifier> {
        Arc::clone(&self.verifier)
    }
}
