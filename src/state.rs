use crate::{
    auth::{Jwt, JwtTrait},
    clients::{AiTrait, GeminiClient, Judge0Client, JudgeTrait},
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, sync::Arc};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Jwt: JwtTrait;
    type Judge: JudgeTrait;
    type Ai: AiTrait;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Self::Jwt;
    fn judge(&self) -> &Self::Judge;
    fn ai(&self) -> &Self::Ai;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
    judge: Judge0Client,
    ai: GeminiClient,
}

impl State {
    pub async fn new() -> Arc<Self> {
        Self::with_database(Self::connect_database().await)
    }

    pub fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            jwt: Jwt::from_env(),
            judge: Judge0Client::from_env(),
            ai: GeminiClient::from_env(),
        })
    }

    async fn connect_database() -> DbConn {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        info!("Connected to database");

        db
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Jwt = Jwt;
    type Judge = Judge0Client;
    type Ai = GeminiClient;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Self::Jwt {
        &self.jwt
    }

    fn judge(&self) -> &Self::Judge {
        &self.judge
    }

    fn ai(&self) -> &Self::Ai {
        &self.ai
    }
}
