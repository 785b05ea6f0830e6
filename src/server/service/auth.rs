use std::sync::Arc;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::server::{
    config::{Config, IdentityKey},
    error::{auth::AuthError, config::ConfigError},
    model::auth::{Identity, IdentityClaims},
};

/// Verifies identity provider tokens and enforces the email domain allowlist.
///
/// Cheap to clone, the key material is shared.
#[derive(Clone)]
pub struct IdentityVerifier {
    inner: Arc<VerifierInner>,
}

struct VerifierInner {
    key: DecodingKey,
    validation: Validation,
    allowed_domain: String,
}

impl IdentityVerifier {
    /// Build a verifier from server configuration.
    ///
    /// # Returns
    /// - `Ok(IdentityVerifier)` - Key material parsed successfully
    /// - `Err(ConfigError::InvalidEnvValue)` - The configured public key is not a valid RSA PEM
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let (key, algorithm) = match &config.identity_key {
            IdentityKey::RsaPem(pem) => {
                // PEMs passed through a single-line env var usually carry escaped newlines
                let pem = pem.replace("\\n", "\n");
                let key = DecodingKey::from_rsa_pem(pem.as_bytes()).map_err(|e| {
                    ConfigError::InvalidEnvValue {
                        var: "IDENTITY_JWT_PUBLIC_KEY".to_string(),
                        reason: e.to_string(),
                    }
                })?;

                (key, Algorithm::RS256)
            }
            IdentityKey::Secret(secret) => {
                (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
            }
        };

        Ok(Self::new(
            key,
            algorithm,
            &config.allowed_email_domain,
            config.identity_issuer.as_deref(),
        ))
    }

    /// Build an HS256 verifier from a shared secret.
    pub fn from_secret(secret: &str, allowed_domain: &str, issuer: Option<&str>) -> Self {
        Self::new(
            DecodingKey::from_secret(secret.as_bytes()),
            Algorithm::HS256,
            allowed_domain,
            issuer,
        )
    }

    fn new(
        key: DecodingKey,
        algorithm: Algorithm,
        allowed_domain: &str,
        issuer: Option<&str>,
    ) -> Self {
        let mut validation = Validation::new(algorithm);
        // Provider session tokens are not issued for a specific audience
        validation.validate_aud = false;
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            inner: Arc::new(VerifierInner {
                key,
                validation,
                allowed_domain: allowed_domain.trim_start_matches('@').to_lowercase(),
            }),
        }
    }

    /// The domain emails must belong to, without the leading `@`
    pub fn allowed_domain(&self) -> &str {
        &self.inner.allowed_domain
    }

    /// Verify a bearer token and return the caller's identity.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Signature, expiry and issuer are valid and the email is in the allowed domain
    /// - `Err(AuthError::InvalidToken)` - Token is malformed, expired or signed with another key
    /// - `Err(AuthError::EmailDomainNotAllowed)` - Email claim missing or outside the allowed domain
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = decode::<IdentityClaims>(token, &self.inner.key, &self.inner.validation)?.claims;

        let email = claims
            .email
            .map(|email| email.trim().to_lowercase())
            .unwrap_or_default();

        if !self.is_allowed_email(&email) {
            return Err(AuthError::EmailDomainNotAllowed {
                email,
                domain: self.inner.allowed_domain.clone(),
            });
        }

        Ok(Identity {
            subject: claims.sub,
            email,
            name: claims.name,
            avatar_url: claims.picture,
        })
    }

    fn is_allowed_email(&self, email: &str) -> bool {
        match email.rsplit_once('@') {
            Some((local, domain)) => !local.is_empty() && domain == self.inner.allowed_domain,
            None => false,
        }
    }
}
