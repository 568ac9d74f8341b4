use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use tracing::error;

use crate::domain::{
    authentication::{
        ports::TokenVerifier,
        value_objects::{Identity, IdentityClaims},
    },
    common::{AuthConfig, AuthKey, entities::app_errors::CoreError},
};

#[derive(Debug, Deserialize)]
struct TokenClaims {
    sub: Option<String>,
    user_id: Option<String>,
    #[serde(default)]
    admin: Option<bool>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl TokenClaims {
    fn into_identity(self) -> Option<Identity> {
        let uid = self
            .sub
            .filter(|sub| !sub.is_empty())
            .or(self.user_id.filter(|id| !id.is_empty()))?;

        Some(Identity::new(
            uid,
            IdentityClaims {
                admin: self.admin,
                role: self.role,
                email: self.email,
                name: self.name,
            },
        ))
    }
}

/// Verifies signed JWTs issued by the identity provider.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(config: &AuthConfig) -> Result<Self, CoreError> {
        let (key, algorithm) = match &config.key {
            AuthKey::Secret(secret) => (
                DecodingKey::from_secret(secret.as_bytes()),
                Algorithm::HS256,
            ),
            AuthKey::RsaPublicKeyPem(pem) => {
                let key = DecodingKey::from_rsa_pem(pem.as_bytes()).map_err(|e| {
                    error!("Invalid RSA public key: {}", e);
                    CoreError::InternalServerError
                })?;
                (key, Algorithm::RS256)
            }
        };

        let mut validation = Validation::new(algorithm);
        match &config.issuer {
            Some(issuer) => validation.set_issuer(&[issuer]),
            None => validation.iss = None,
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Ok(Self { key, validation })
    }
}

impl TokenVerifier for JwtTokenVerifier {
    async fn verify_token(&self, token: String) -> Result<Identity, CoreError> {
        let data = decode::<TokenClaims>(&token, &self.key, &self.validation)
            .map_err(|_| CoreError::InvalidToken)?;

        data.claims.into_identity().ok_or(CoreError::InvalidToken)
    }
}
