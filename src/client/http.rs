use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use uuid::Uuid;

use crate::{
    client::api::{ClientError, FeedbackApi},
    models::{FeedbackInput, FeedbackList, FeedbackRecord},
};

const DEFAULT_API_BASE: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { api_base }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var("FEEDBACK_API_BASE") {
            Ok(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => {
                tracing::info!("FEEDBACK_API_BASE not set, using default: {DEFAULT_API_BASE}");
                Self::new(DEFAULT_API_BASE)
            }
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[derive(Debug, Clone)]
pub struct HttpFeedbackApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpFeedbackApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    // Each segment is percent-encoded, so owner ids may hold '/', '#' or '?'.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid_base =
            || ClientError::Transport(format!("Invalid API base: {}", self.config.api_base));

        let mut url = Url::parse(&self.config.api_base).map_err(|_| invalid_base())?;
        url.path_segments_mut()
            .map_err(|_| invalid_base())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

async fn check(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let message = res.text().await.unwrap_or_default();
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: serde::de::DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    res.json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl FeedbackApi for HttpFeedbackApi {
    async fn list(&self, owner_id: &str) -> Result<Vec<FeedbackRecord>, ClientError> {
        let res = self
            .http
            .get(self.url(&["feedback", owner_id])?)
            .send()
            .await
            .map_err(transport)?;

        let list: FeedbackList = decode(check(res).await?).await?;
        Ok(list.feedback)
    }

    async fn create(&self, input: &FeedbackInput) -> Result<FeedbackRecord, ClientError> {
        let res = self
            .http
            .post(self.url(&["feedback"])?)
            .json(input)
            .send()
            .await
            .map_err(transport)?;

        decode(check(res).await?).await
    }

    async fn update(
        &self,
        id: Uuid,
        input: &FeedbackInput,
    ) -> Result<FeedbackRecord, ClientError> {
        let id = id.to_string();
        let res = self
            .http
            .put(self.url(&["feedback", id.as_str()])?)
            .json(input)
            .send()
            .await
            .map_err(transport)?;

        decode(check(res).await?).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let id = id.to_string();
        let res = self
            .http
            .delete(self.url(&["feedback", id.as_str()])?)
            .send()
            .await
            .map_err(transport)?;

        check(res).await?;
        Ok(())
    }
}
