use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{ContactError, DraftMessage, FieldValidationError, error::Result};

/// Path of the contact endpoint, relative to the API base URL.
pub const CONTACT_PATH: &str = "/api/contact2";

/// Classified answer of the contact API.
///
/// Anything that is neither accepted nor a well-formed `400` is surfaced as
/// a [`ContactError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    Accepted,
    Rejected(Vec<FieldValidationError>),
}

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn send(&self, draft: &DraftMessage) -> Result<ApiReply>;
}

#[async_trait]
impl<T: ContactApi + ?Sized> ContactApi for std::sync::Arc<T> {
    async fn send(&self, draft: &DraftMessage) -> Result<ApiReply> {
        (**self).send(draft).await
    }
}

/// [`ContactApi`] over HTTP: one JSON `POST` per call, no retries.
#[derive(Clone, Debug)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn send(&self, draft: &DraftMessage) -> Result<ApiReply> {
        let res = self.client.post(&self.endpoint).json(draft).send().await?;
        let status = res.status();

        if status.is_success() {
            return Ok(ApiReply::Accepted);
        }

        if status == StatusCode::BAD_REQUEST {
            let body = res.bytes().await?;
            let errors = serde_json::from_slice::<Vec<FieldValidationError>>(&body)?;

            return Ok(ApiReply::Rejected(errors));
        }

        Err(ContactError::UnexpectedStatus(status.as_u16()))
    }
}

fn endpoint(base_url: &str) -> String {
    format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/'))
}
