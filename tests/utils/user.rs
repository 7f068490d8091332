use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
struct Claims {
    sub: Uuid,
    exp: i64,
    iat: i64,
}

#[allow(unused)]
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub access_token: String,
}

#[allow(unused)]
impl User {
    /// Mints a token for a fresh user id. The user only exists in the
    /// database after a successful `/user/register`.
    pub fn new(secret: &str) -> Self {
        let id = Uuid::new_v4();

        User {
            id,
            email: format!("{}@example.com", super::uuid()),
            access_token: token(secret, id),
        }
    }
}

#[allow(unused)]
fn token(secret: &str, user_id: Uuid) -> String {
    let now = chrono::Utc::now().timestamp();

    jsonwebtoken::encode(
        &Header::default(),
        &Claims {
            sub: user_id,
            exp: now + 3600,
            iat: now,
        },
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("failed to sign token")
}
