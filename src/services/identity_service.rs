use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// JWT Claims emitidos pelo provedor de identidade
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,           // uid do usuário no provedor
    pub email: String,
    pub name: Option<String>,
    pub iat: usize,            // issued at
    pub exp: usize,            // expiration
    pub aud: String,           // audience
    pub iss: String,           // issuer
}

fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

fn get_jwt_issuer() -> String {
    std::env::var("JWT_ISSUER").unwrap_or_else(|_| "task-service".to_string())
}

fn get_jwt_audience() -> String {
    std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "task-api".to_string())
}

/// Verificador dos tokens emitidos pelo provedor de identidade.
/// Carrega as coordenadas (segredo, issuer, audience) uma vez no startup;
/// a emissão de tokens acontece fora deste serviço.
#[derive(Clone)]
pub struct IdentityVerifier {
    secret: String,
    issuer: String,
    audience: String,
}

impl IdentityVerifier {
    pub fn new(secret: &str, issuer: &str, audience: &str) -> Self {
        Self {
            secret: secret.to_string(),
            issuer: issuer.to_string(),
            audience: audience.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: get_jwt_secret(),
            issuer: get_jwt_issuer(),
            audience: get_jwt_audience(),
        }
    }

    /// Valida assinatura, expiração, audience e issuer do token
    pub fn verify(&self, token: &str) -> Result<Claims, String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[self.audience.clone()]);

        let mut issuers = HashSet::new();
        issuers.insert(self.issuer.clone());
        validation.iss = Some(issuers);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| format!("Invalid token: {}", e))
    }
}

#[cfg(test)]
pub fn mint_token(
    secret: &str,
    issuer: &str,
    audience: &str,
    sub: &str,
    email: &str,
    ttl_secs: i64,
) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    let iat = Utc::now().timestamp() as usize;
    let exp = (Utc::now() + Duration::seconds(ttl_secs)).timestamp() as usize;

    let claims = Claims {
        sub: sub.to_string(),
        email: email.to_string(),
        name: None,
        iat,
        exp,
        aud: audience.to_string(),
        iss: issuer.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("Failed to mint test token")
}
