use std::time::Duration;

use anyhow::Context as _;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use url::Url;

use crate::error::{Error, Result};
use crate::models::analysis::{HandAnalysis, UserStats};
use crate::models::preferences::GameType;
use crate::services::session_service::SessionService;

/// Bodies longer than this are not echoed back in error messages.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for the remote hand-analysis backend.
///
/// The bearer token is read from the session on every request, so signing in
/// or out takes effect immediately.
#[derive(Clone)]
pub struct ApiService {
    client: Client,
    base_url: Url,
    session: SessionService,
}

impl ApiService {
    pub fn new(base_url: Url, timeout: Duration, session: SessionService) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    pub async fn analyze_hand_image(
        &self,
        image: &[u8],
        mime_type: &str,
        game_type: GameType,
    ) -> Result<HandAnalysis> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AnalyzeReq<'a> {
            image_base64: String,
            mime_type: &'a str,
            game_type: &'a str,
        }

        if image.is_empty() {
            return Err(Error::InvalidArgument("Image is empty".to_string()));
        }
        let body = AnalyzeReq {
            image_base64: BASE64.encode(image),
            mime_type,
            game_type: game_type.as_str(),
        };

        tracing::info!(bytes = image.len(), game_type = game_type.as_str(), "Submitting hand image for analysis");
        let req = self.client.post(endpoint(&self.base_url, "/api/analyze")).json(&body);
        self.send(req).await
    }

    pub async fn fetch_user_stats(&self) -> Result<UserStats> {
        let req = self.client.get(endpoint(&self.base_url, "/api/stats"));
        self.send(req).await
    }

    pub async fn health_check(&self) -> bool {
        match self.client.get(endpoint(&self.base_url, "/health")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::warn!("Analysis backend health check failed: {}", e);
                false
            }
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let req = match self.session.access_token()? {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req.header("Accept", "application/json").send().await?;
        read_json_response(resp).await
    }
}

pub(crate) fn endpoint(base: &Url, path: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), path)
}

pub(crate) async fn read_json_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let txt = resp.text().await.unwrap_or_default();
    if !status.is_success() {
        let message = format_api_error(status.as_u16(), &txt);
        tracing::warn!(status = status.as_u16(), "Backend request failed: {}", message);
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }
    let parsed = serde_json::from_str(&txt).context("backend response parse failed")?;
    Ok(parsed)
}

/// Human-readable message for a failed backend call.
pub fn format_api_error(status: u16, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<JsonValue>(body) {
        for field in ["error", "message", "detail"] {
            if let Some(msg) = json.get(field).and_then(|v| v.as_str()) {
                if !msg.trim().is_empty() {
                    return msg.trim().to_string();
                }
            }
        }
    }

    let text = body.trim();
    if text.is_empty() || text.chars().count() > MAX_ERROR_BODY_CHARS {
        format!("Request failed with status {}", status)
    } else {
        format!("Request failed with status {}: {}", status, text)
    }
}
