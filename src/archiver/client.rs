extern crate async_trait;
extern crate log;
extern crate reqwest;

pub(crate) mod extract;
pub mod retry;
pub mod submission;

use crate::{
    config::client::{BASE_URL, FIREFOX_UA},
    error::{Error, Result},
    fetch::SourceFetcher,
};
use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use self::retry::RetryPolicy;
use self::submission::{Envelope, Submission};

const API_STATUS_OK: &str = "OK";

pub struct Session {
    client: Client,
    retry: RetryPolicy,
}

impl Session {
    pub fn new() -> Result<Self> {
        Ok(Session {
            client: Client::builder()
                .user_agent(FIREFOX_UA)
                .cookie_store(true)
                .build()
                .map_err(Error::Network)?,
            retry: RetryPolicy::default(),
        })
    }

    pub async fn user_status(&self, handle: &str, count: u64) -> Result<Vec<Submission>> {
        let url = format!("{}/api/user.status", BASE_URL);
        let count = count.to_string();
        let query = [("handle", handle), ("from", "1"), ("count", count.as_str())];
        let url = url.as_str();
        let query = &query;
        let client = &self.client;
        let envelope = self
            .retry
            .run(move || async move {
                client
                    .get(url)
                    .query(query)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Envelope>()
                    .await
            })
            .await
            .map_err(Error::Network)?;
        if envelope.status != API_STATUS_OK {
            return Err(Error::Api(envelope.comment));
        }
        Ok(envelope.result)
    }
}

#[async_trait]
impl SourceFetcher for Session {
    async fn fetch_source(&self, contest_id: u64, submission_id: u64) -> Result<Option<String>> {
        let url = format!(
            "{}/contest/{}/submission/{}",
            BASE_URL, contest_id, submission_id
        );
        let url = url.as_str();
        let client = &self.client;
        let page = match self
            .retry
            .run(move || async move {
                client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await
            })
            .await
        {
            Ok(page) => page,
            // Treated like a challenge page: no source, the loop moves on.
            Err(e) => {
                warn!("fetching {} failed: {}", url, e);
                return Ok(None);
            }
        };
        Ok(extract::source_text(&page))
    }
}
