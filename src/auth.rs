use crate::error::{self, Error, Result};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<Claims>()
            .ok_or(error::COULD_NOT_GET_CLAIMS)
    }
}

pub trait JwtTrait: Send + Sync + 'static {
    fn get_claims(&self, token: &str) -> Result<Claims>;
}

pub struct Jwt {
    decoding: DecodingKey,
}

impl Jwt {
    pub fn from_env() -> Self {
        Self {
            decoding: DecodingKey::from_secret(
                env::var("JWT_SECRET")
                    .expect("JWT_SECRET is not set")
                    .as_ref(),
            ),
        }
    }
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 5;

    validation
});

impl JwtTrait for Jwt {
    fn get_claims(&self, token: &str) -> Result<Claims> {
        match jsonwebtoken::decode(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => Ok(decoded.claims),
            Err(error) => {
                warn!(error = error.to_string(), "tried invalid token");
                Err(error::JWT_INVALID_TOKEN)
            }
        }
    }
}
