use super::{request::RequestBuilder, user::User};
use http::StatusCode;
use leetlab_backend::State;
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn, EntityTrait, Set};
use serde_json::{json, Value};
use std::{env, net::SocketAddr, sync::Arc};
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;
use uuid::Uuid;
use wiremock::MockServer;

pub const JWT_SECRET: &str = "test-secret";
pub const GEMINI_MODEL: &str = "gemini-test";

async fn setup_database() -> (ContainerAsync<Postgres>, DbConn) {
    let container = Postgres::default().with_tag("16").start().await.unwrap();

    let connection_string = format!(
        "postgres://postgres:postgres@{}:{}/postgres",
        container.get_host().await.unwrap(),
        container.get_host_port_ipv4(5432).await.unwrap(),
    );

    let opts = ConnectOptions::new(connection_string);
    let db = Database::connect(opts).await.unwrap();

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    (container, db)
}

pub struct App {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
    pub judge: MockServer,
    pub gemini: MockServer,
    _container: Arc<ContainerAsync<Postgres>>,
}

impl App {
    #[allow(unused)]
    pub async fn new() -> App {
        Self::with_ai_key(Some("test-key")).await
    }

    #[allow(unused)]
    pub async fn without_ai_key() -> App {
        Self::with_ai_key(None).await
    }

    /// The state reads its configuration from the environment, so tests
    /// creating an `App` must run serially.
    async fn with_ai_key(ai_key: Option<&str>) -> App {
        dotenvy::dotenv().ok();

        let (container, db) = setup_database().await;
        let judge = MockServer::start().await;
        let gemini = MockServer::start().await;

        env::set_var("JWT_SECRET", JWT_SECRET);
        env::set_var("JUDGE0_URL", judge.uri());
        env::set_var("GEMINI_API_URL", gemini.uri());
        env::set_var("GEMINI_MODEL", GEMINI_MODEL);
        match ai_key {
            Some(key) => env::set_var("GEMINI_API_KEY", key),
            None => env::remove_var("GEMINI_API_KEY"),
        }

        let state = State::with_database(db.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            leetlab_backend::run(listener, state).await.unwrap();
        });

        App {
            addr,
            client: Client::new(),
            db,
            judge,
            gemini,
            _container: Arc::new(container),
        }
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    #[allow(unused)]
    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }
}

impl App {
    #[allow(unused)]
    pub async fn register_user(&self) -> User {
        let user = User::new(JWT_SECRET);

        let res = self
            .post("/user/register")
            .user(&user)
            .json(&json!({
                "name": "Test User",
                "email": user.email,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        user
    }

    #[allow(unused)]
    pub async fn register_admin(&self) -> User {
        let user = self.register_user().await;

        let update = entity::users::ActiveModel {
            id: Set(user.id),
            role: Set(entity::users::Role::Admin),
            ..Default::default()
        };

        entity::users::Entity::update(update)
            .exec(&self.db)
            .await
            .expect("failed to promote user");

        user
    }

    #[allow(unused)]
    pub async fn create_problem(&self, admin: &User) -> Uuid {
        let res = self
            .post("/problem")
            .user(admin)
            .json(&json!({
                "title": format!("Sum {}", super::uuid()),
                "description": "Add two numbers read from stdin.",
                "difficulty": "EASY",
                "tags": ["math"],
                "examples": [{ "input": "2 7", "output": "9" }],
                "test_cases": [
                    { "input": "2 7", "output": "9" },
                    { "input": "1 1", "output": "2" },
                ],
                "start_code": { "Python": "def add():\n    pass" },
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        Uuid::parse_str(body["problem_id"].as_str().unwrap()).unwrap()
    }

    #[allow(unused)]
    pub async fn create_playlist(&self, user: &User, name: &str) -> Uuid {
        let res = self
            .post("/playlist/create-playlist")
            .user(user)
            .json(&json!({ "name": name }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        Uuid::parse_str(body["playlist"]["id"].as_str().unwrap()).unwrap()
    }
}
