use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

use crate::error::Result;
use crate::models::analysis::SupportTicket;
use crate::services::api_service::{endpoint, read_json_response};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicketRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 120))]
    pub subject: String,
    #[validate(length(min = 10, max = 5000))]
    pub message: String,
    pub app_version: Option<String>,
    pub platform: Option<String>,
}

#[derive(Clone)]
pub struct SupportService {
    client: Client,
    base_url: Url,
}

impl SupportService {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub async fn submit_ticket(&self, request: &SupportTicketRequest) -> Result<SupportTicket> {
        request.validate()?;

        let resp = self
            .client
            .post(endpoint(&self.base_url, "/api/support/tickets"))
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await?;
        let ticket: SupportTicket = read_json_response(resp).await?;
        tracing::info!(ticket_id = %ticket.id, "Support ticket submitted");
        Ok(ticket)
    }
}
