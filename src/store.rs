use anyhow::Context;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::NewSignup;

/// Collection holding one row per beta signup, uniquely keyed by `email`.
const SIGNUPS_COLLECTION: &str = "beta_signups";

/// Unique-constraint violation, surfaced verbatim by the store's REST layer
/// when an email is already on the list.
const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Client for the hosted signup store. The access key doubles as the bearer
/// token, per the store's REST conventions.
pub struct StoreClient {
    client: Client,
    collection_url: reqwest::Url,
    access_key: Secret<String>,
}

#[derive(Debug)]
pub enum StoreOutcome {
    Inserted(Vec<SignupRow>),
    Duplicate,
}

#[derive(Debug, Deserialize)]
pub struct SignupRow {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub signed_up_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("the store rejected the insert: {message}")]
    Backend { code: String, message: String },
    #[error("failed to reach the signup store")]
    Transport(#[from] reqwest::Error),
}

impl StoreClient {
    pub fn new(base_url: &str, access_key: Secret<String>) -> Result<Self, anyhow::Error> {
        let collection_url = reqwest::Url::parse(base_url)
            .and_then(|url| url.join(&format!("/rest/v1/{}", SIGNUPS_COLLECTION)))
            .with_context(|| format!("invalid store url: {}", base_url))?;
        Ok(Self {
            client: Client::new(),
            collection_url,
            access_key,
        })
    }

    /// Insert a signup into the collection. A duplicate email is reported as
    /// an outcome, not an error: the store's uniqueness constraint is how the
    /// system detects repeat signups in the first place.
    ///
    /// No timeout is set on the request; the call resolves or fails on the
    /// store's own terms.
    #[tracing::instrument(name = "Inserting signup into the store", skip(self, signup))]
    pub async fn insert_signup(&self, signup: &NewSignup) -> Result<StoreOutcome, StoreError> {
        let response = self
            .client
            .post(self.collection_url.clone())
            .header("apikey", self.access_key.expose_secret())
            .bearer_auth(self.access_key.expose_secret())
            .header("Prefer", "return=representation")
            // the REST layer takes a batch; a submission is a batch of one
            .json(&[signup])
            .send()
            .await?;

        if response.status().is_success() {
            // the representation is best-effort; an empty body is still an
            // insert
            let rows = response.json::<Vec<SignupRow>>().await.unwrap_or_default();
            return Ok(StoreOutcome::Inserted(rows));
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        if body.code == UNIQUE_VIOLATION_CODE {
            return Ok(StoreOutcome::Duplicate);
        }
        Err(StoreError::Backend {
            code: body.code,
            message: body.message,
        })
    }
}
