//! Permission gate for routes protected by the identity provider.
//!
//! A bearer token is decoded, its signature checked against the provider's
//! published key set, its issuer and audience verified, and finally the
//! required permission looked up in its `permissions` claim.

pub mod claims;
pub mod error;
pub mod extractors;
pub mod guards;
pub mod keys;
pub mod middleware;
pub mod verifier;

pub use claims::{Audience, Claims};
pub use error::AuthError;
pub use guards::{PermissionGuard, authorize, check_permission, require_permission};
pub use keys::KeySet;
pub use verifier::TokenVerifier;
