use crate::domain::model::NormalizedPerson;
use crate::utils::error::{Result, StarwError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the `/starw` surface, as used by downstream consumers.
#[derive(Debug, Clone)]
pub struct StarwApiClient {
    client: Client,
    api_url: String,
}

impl StarwApiClient {
    /// `api_url` is the server root, e.g. `http://127.0.0.1:8080`.
    pub fn new(client: Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: format!("{}/starw/", api_url.trim_end_matches('/')),
        }
    }

    pub async fn list_people(&self) -> Result<Vec<NormalizedPerson>> {
        self.get(&self.api_url).await
    }

    pub async fn get_person(&self, id: &str) -> Result<NormalizedPerson> {
        let url = format!("{}{}", self.api_url, id);
        self.get(&url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Calling {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let message = serde_json::from_slice::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());

        if status == reqwest::StatusCode::NOT_FOUND {
            Err(StarwError::not_found(message))
        } else {
            Err(StarwError::ApiStatus {
                status: status.as_u16(),
                message,
            })
        }
    }
}
