// src/infrastructure/security/token.rs
use crate::application::{
    dto::Identity,
    error::{ApplicationError, ApplicationResult},
    ports::security::IdentityVerifier,
};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use biscuit_auth::{Biscuit, PublicKey, builder::Algorithm, macros::authorizer};

/// Verifies biscuit bearer tokens sealed by the identity provider's root key.
///
/// A token must carry an authority fact `user(<id>, <name>)` and pass its own
/// checks (typically `check if time($now), $now <= <exp>`).
#[derive(Clone)]
pub struct BiscuitIdentityVerifier {
    root: PublicKey,
}

impl BiscuitIdentityVerifier {
    pub fn new(public_key_hex: &str) -> ApplicationResult<Self> {
        let root = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self::from_public_key(root))
    }

    pub fn from_public_key(root: PublicKey) -> Self {
        Self { root }
    }
}

#[async_trait]
impl IdentityVerifier for BiscuitIdentityVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<Identity> {
        let biscuit = Biscuit::from_base64(token, self.root)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = authorizer!("allow if user($id, $name);")
            .time()
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let users: Vec<(i64, String)> = authorizer
            .query("data($id, $name) <- user($id, $name)")
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (id, name) = match users.as_slice() {
            [single] => single.clone(),
            [] => return Err(ApplicationError::unauthorized("token carries no user")),
            _ => return Err(ApplicationError::unauthorized("token carries several users")),
        };

        let id = UserId::new(id).map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let username =
            Username::new(name).map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        Ok(Identity::new(id, username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biscuit_auth::{KeyPair, macros::biscuit};

    fn issue(root: &KeyPair, id: i64, name: &str) -> String {
        biscuit!("user({id}, {name});", id = id, name = name)
            .build(root)
            .unwrap()
            .to_base64()
            .unwrap()
    }

    #[tokio::test]
    async fn verifies_token_from_root_key() {
        let root = KeyPair::new();
        let verifier = BiscuitIdentityVerifier::from_public_key(root.public());

        let identity = verifier.verify(&issue(&root, 7, "ana")).await.unwrap();
        assert_eq!(i64::from(identity.id), 7);
        assert_eq!(identity.username.as_str(), "ana");
    }

    #[tokio::test]
    async fn rejects_token_from_foreign_key() {
        let root = KeyPair::new();
        let other = KeyPair::new();
        let verifier = BiscuitIdentityVerifier::from_public_key(root.public());

        let err = verifier.verify(&issue(&other, 7, "ana")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let root = KeyPair::new();
        let verifier = BiscuitIdentityVerifier::from_public_key(root.public());

        let err = verifier.verify("not-a-biscuit").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn rejects_non_positive_user_id() {
        let root = KeyPair::new();
        let verifier = BiscuitIdentityVerifier::from_public_key(root.public());

        let err = verifier.verify(&issue(&root, 0, "ana")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn public_key_hex_round_trips() {
        let root = KeyPair::new();
        let hex = root.public().to_bytes_hex();
        assert!(BiscuitIdentityVerifier::new(&hex).is_ok());
        assert!(BiscuitIdentityVerifier::new("zz").is_err());
    }
}
