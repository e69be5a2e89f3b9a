use crate::config::AuthSettings;
use anyhow::Result;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::Value;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Integer or numeric string, depending on the issuer.
    #[serde(default)]
    pub role_id: Option<Value>,
    #[serde(default)]
    pub area_id: Option<Value>,
    pub exp: i64,
}

/// Verifies access tokens issued by the auth service.
///
/// Identity claims are only trusted once the signature, algorithm and `exp`
/// (plus `iss`, when configured) have been checked.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(decoding_key: DecodingKey, algorithm: Algorithm, issuer: Option<&str>) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key,
            validation,
        }
    }

    /// Build the verifier from settings: a shared secret for HMAC algorithms,
    /// a PEM public key file for everything else.
    pub fn from_settings(settings: &AuthSettings) -> Result<Self> {
        let decoding_key = match settings.algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
                let secret = settings.shared_secret.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("auth.shared_secret is required for {:?}", settings.algorithm)
                })?;
                DecodingKey::from_secret(secret.expose_secret().as_bytes())
            }
            algorithm => {
                let path = settings.public_key_path.as_deref().ok_or_else(|| {
                    anyhow::anyhow!("auth.public_key_path is required for {:?}", algorithm)
                })?;
                let public_key_pem = fs::read_to_string(path).map_err(|e| {
                    anyhow::anyhow!("Failed to read public key from {}: {}", path, e)
                })?;
                let pem = public_key_pem.as_bytes();
                match algorithm {
                    Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(pem),
                    Algorithm::EdDSA => DecodingKey::from_ed_pem(pem),
                    _ => DecodingKey::from_rsa_pem(pem),
                }
                .map_err(|e| anyhow::anyhow!("Failed to parse public key: {}", e))?
            }
        };

        tracing::info!(algorithm = ?settings.algorithm, "Token verifier initialized");

        Ok(Self::new(
            decoding_key,
            settings.algorithm,
            settings.issuer.as_deref(),
        ))
    }

    pub fn verify(&self, token: &str) -> Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(token.trim(), &self.decoding_key, &self.validation)
            .map_err(|e| anyhow::anyhow!("Invalid access token: {}", e))?;

        Ok(token_data.claims)
    }
}
