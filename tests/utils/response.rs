use http::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct TestResponse {
    inner: reqwest::Response,
}

#[allow(unused)]
impl TestResponse {
    pub(super) fn new(inner: reqwest::Response) -> Self {
        TestResponse { inner }
    }

    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let bytes = self.inner.bytes().await.expect("failed to read body");
        serde_json::from_slice(&bytes).expect("body is not json")
    }
}
