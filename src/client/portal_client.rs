use std::time::Duration;

use anyhow::Context;

use reqwest::{Client, StatusCode};

use serde::{Deserialize, Serialize};

use url::Url;

use crate::domain::{RecordParams, RecordQuery};
use crate::model::{BrandHistory, RecordPage, Subscriber, SubscriberCount};

/// HTTP client for the portal's JSON API
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: Client,
    base_url: Url,
}

/// Result of one subscription request, as the subscribe form needs to tell them apart
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Subscribed(Subscriber),
    /// The address was already on the list
    AlreadySubscribed(String),
    Failed(String),
}

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct SubscribeResponse {
    data: Subscriber,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl PortalClient {
    pub fn new(base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Build an endpoint URL below the base URL, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("{} cannot be used as a base URL", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[tracing::instrument(name = "Fetch records via API", skip(self))]
    pub async fn list_records(&self, query: &RecordQuery) -> anyhow::Result<RecordPage> {
        let page = self
            .client
            .get(self.endpoint(&["records"])?)
            .query(&RecordParams::from(query))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to decode record page")?;

        Ok(page)
    }

    #[tracing::instrument(name = "Fetch brand history via API", skip(self))]
    pub async fn brand_history(&self, brand: &str) -> anyhow::Result<BrandHistory> {
        let history = self
            .client
            .get(self.endpoint(&["brand", brand])?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to decode brand history")?;

        Ok(history)
    }

    #[tracing::instrument(name = "Fetch subscriber count via API", skip(self))]
    pub async fn subscriber_count(&self) -> anyhow::Result<i64> {
        let SubscriberCount { count } = self
            .client
            .get(self.endpoint(&["subscribers"])?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to decode subscriber count")?;

        Ok(count)
    }

    /// Submit an email address.
    /// Never fails outright: transport and server errors become [`SubmissionOutcome::Failed`].
    #[tracing::instrument(name = "Subscribe via API", skip(self, email))]
    pub async fn subscribe(&self, email: &str) -> SubmissionOutcome {
        match self.try_subscribe(email).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Subscription request failed");
                SubmissionOutcome::Failed("Connection error, please try again".into())
            }
        }
    }

    async fn try_subscribe(&self, email: &str) -> anyhow::Result<SubmissionOutcome> {
        let res = self
            .client
            .post(self.endpoint(&["subscribers"])?)
            .json(&SubscribeRequest { email })
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            let body: SubscribeResponse = res.json().await?;
            return Ok(SubmissionOutcome::Subscribed(body.data));
        }

        let message = match res.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };

        Ok(match status {
            StatusCode::CONFLICT => SubmissionOutcome::AlreadySubscribed(message),
            _ => SubmissionOutcome::Failed(message),
        })
    }
}
