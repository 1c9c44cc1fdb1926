use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // email du user
    pub uid: i32,
    pub iat: i64,
    pub exp: i64, // expiration timestamp
}

/// Clés HS256 et durée de vie des tokens, partagées via web::Data
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        // pas de tolérance : un token expiré est refusé dès la seconde suivante
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Génère un JWT token pour un utilisateur
    pub fn generate_token(&self, user_id: i32, email: &str) -> Result<String, String> {
        self.generate_token_with_ttl(user_id, email, self.ttl)
    }

    pub fn generate_token_with_ttl(
        &self,
        user_id: i32,
        email: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(ttl)
            .ok_or("Failed to calculate expiration")?;

        let claims = Claims {
            sub: email.to_string(),
            uid: user_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| format!("Failed to generate token: {}", e))
    }

    /// Vérifie la signature et l'expiration, puis décode les claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, String> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| format!("Invalid token: {}", e))
    }
}
