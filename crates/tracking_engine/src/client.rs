use std::time::Duration;

use engine_logging::engine_debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracking_core::{Batch, Receipt, TrackingResult};

use crate::{ApiError, Authenticator, BearerToken, Credentials, FailureKind, TrackingApi};

pub const DEFAULT_TOKEN_URL: &str = "https://api.correios.com.br/token/v1/autentica";
pub const DEFAULT_ASYNC_URL: &str =
    "https://api.correios.com.br/rastro-async/v1/objetos/async?resultado=U";
pub const DEFAULT_RECEIPT_URL: &str = "https://api.correios.com.br/rastro-async/v1/recibo/";

/// The three endpoints a run talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub async_url: String,
    /// Base URL; the receipt number is appended verbatim.
    pub receipt_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            async_url: DEFAULT_ASYNC_URL.to_string(),
            receipt_url: DEFAULT_RECEIPT_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    numero: String,
}

#[derive(Deserialize)]
struct ReceiptResponse {
    #[serde(default)]
    objetos: Vec<TrackingResult>,
}

#[derive(Debug, Clone)]
pub struct ReqwestTrackingClient {
    endpoints: Endpoints,
    client: reqwest::Client,
}

impl ReqwestTrackingClient {
    pub fn new(endpoints: Endpoints, settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { endpoints, client })
    }
}

#[async_trait::async_trait]
impl Authenticator for ReqwestTrackingClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<BearerToken, ApiError> {
        let url = parse_url(&self.endpoints.token_url)?;
        engine_debug!("requesting token from {}", url);
        let response = self
            .client
            .post(url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: TokenResponse = read_json(response).await?;
        if body.token.is_empty() {
            return Err(ApiError::new(
                FailureKind::MalformedResponse,
                "token response carries an empty token",
            ));
        }
        Ok(BearerToken::new(body.token))
    }
}

#[async_trait::async_trait]
impl TrackingApi for ReqwestTrackingClient {
    async fn submit(&self, batch: &Batch, token: &BearerToken) -> Result<Receipt, ApiError> {
        let url = parse_url(&self.endpoints.async_url)?;
        engine_debug!("submitting {} codes to {}", batch.len(), url);
        let response = self
            .client
            .post(url)
            .bearer_auth(token.as_str())
            .json(batch.codes())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: SubmitResponse = read_json(response).await?;
        Ok(Receipt::new(body.numero))
    }

    async fn check_receipt(
        &self,
        receipt: &Receipt,
        token: &BearerToken,
    ) -> Result<Vec<TrackingResult>, ApiError> {
        let url = parse_url(&format!("{}{}", self.endpoints.receipt_url, receipt))?;
        engine_debug!("checking receipt at {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: ReceiptResponse = read_json(response).await?;
        Ok(body.objetos)
    }
}

fn parse_url(raw: &str) -> Result<reqwest::Url, ApiError> {
    reqwest::Url::parse(raw)
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, format!("{raw}: {err}")))
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&bytes)
        .map_err(|err| ApiError::new(FailureKind::MalformedResponse, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
