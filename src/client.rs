use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::{form_urlencoded, Url};

use crate::constants::{REGION_PARAM, REGISTER_PATH, USERS_PATH};
use crate::error::{DirectoryError, Result};
use crate::responses::ErrorBody;
use crate::types::{QueryResult, RegisterResponse, RegistrationInput};

/// HTTP client for the user-directory API.
pub struct DirectoryClient {
    http: Client,
    base_url: Url,
}

impl DirectoryClient {
    /// `base_url` must end with a `/` so endpoint paths join beneath it.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|_| DirectoryError::InvalidUrl(format!("{}{path}", self.base_url)))
    }

    /// URL of the user list, filtered by region when one is given.
    pub fn users_url(&self, region: &str) -> Result<Url> {
        let mut url = self.endpoint(USERS_PATH)?;
        if !region.is_empty() {
            url.set_query(Some(&format!("{REGION_PARAM}={}", encode_component(region))));
        }
        Ok(url)
    }

    pub async fn register(&self, input: &RegistrationInput) -> Result<RegisterResponse> {
        let url = self.endpoint(REGISTER_PATH)?;
        tracing::debug!(%url, "sending registration request");

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(input)
            .send()
            .await?;

        decode(check_status(response).await?).await
    }

    pub async fn list_users(&self, region: &str) -> Result<QueryResult> {
        let url = self.users_url(region)?;
        tracing::debug!(%url, "fetching users");

        let response = self.http.get(url).send().await?;

        decode(check_status(response).await?).await
    }
}

/// Percent-encode a query value, spaces as `%20` rather than `+`.
fn encode_component(value: &str) -> String {
    // `byte_serialize` escapes a literal `+` as `%2B`, so any `+` left is a space.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Turn a non-2xx response into `DirectoryError::Request`, keeping any
/// message the server put in the body.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .and_then(ErrorBody::into_message);

    Err(DirectoryError::Request {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
