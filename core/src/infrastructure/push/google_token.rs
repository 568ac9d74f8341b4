use std::time::{Duration, Instant};

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::domain::common::entities::app_errors::CoreError;

const MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Tokens this close to expiry are refreshed.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// The fields of a Google service-account JSON key used for FCM.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: Option<String>,
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw).map_err(|e| {
            error!("Invalid service account key: {}", e);
            CoreError::ExternalServiceError(format!("invalid service account key: {}", e))
        })
    }

    pub async fn from_file(path: &str) -> Result<Self, CoreError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read service account key {}: {}", path, e);
            CoreError::ExternalServiceError(format!("cannot read {}: {}", path, e))
        })?;
        Self::from_json(&raw)
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        now + REFRESH_MARGIN < self.expires_at
    }
}

/// Mints OAuth access tokens for a service account and caches them until
/// shortly before they expire.
pub struct GoogleTokenProvider {
    key: ServiceAccountKey,
    signing_key: EncodingKey,
    client: Client,
    cached: Mutex<Option<CachedToken>>,
}

impl GoogleTokenProvider {
    pub fn new(key: ServiceAccountKey, client: Client) -> Result<Self, CoreError> {
        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
            error!("Invalid service account private key: {}", e);
            CoreError::ExternalServiceError(format!("invalid private key: {}", e))
        })?;

        Ok(Self {
            key,
            signing_key,
            client,
            cached: Mutex::new(None),
        })
    }

    pub async fn access_token(&self) -> Result<String, CoreError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref()
            && token.is_fresh(Instant::now())
        {
            return Ok(token.value.clone());
        }

        let token = self.fetch_token().await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(value)
    }

    fn assertion(&self) -> Result<String, CoreError> {
        let iat = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: MESSAGING_SCOPE,
            aud: &self.key.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key).map_err(|e| {
            error!("Failed to sign token assertion: {}", e);
            CoreError::ExternalServiceError(format!("cannot sign assertion: {}", e))
        })
    }

    async fn fetch_token(&self) -> Result<CachedToken, CoreError> {
        let assertion = self.assertion()?;

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("OAuth token request failed: {}", e);
                CoreError::ExternalServiceError(format!("OAuth token error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("OAuth token endpoint error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "OAuth token endpoint returned {}",
                status
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            error!("Failed to parse OAuth token response: {}", e);
            CoreError::ExternalServiceError(format!("invalid OAuth token response: {}", e))
        })?;
        debug!(expires_in = token.expires_in, "minted FCM access token");

        Ok(CachedToken {
            value: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}
