use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

pub const WEBFONTS_ENDPOINT: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// Ordering accepted by the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Alpha,
    Date,
    Popularity,
    Style,
    Trending,
}

#[derive(Serialize)]
struct WebfontsQuery<'a> {
    key: &'a str,
    sort: SortOrder,
}

pub struct WebfontsResult {
    pub body: String,
    pub status: StatusCode,
}

/// Single GET against `endpoint` with the key and sort order as query parameters.
///
/// No retries and no timeout beyond whatever the `client` was built with.
pub async fn fetch_webfonts(
    client: &Client,
    endpoint: &str,
    api_key: &str,
    sort: SortOrder,
) -> Result<WebfontsResult, FetchWebfontsError> {
    let response = client
        .get(endpoint)
        .query(&WebfontsQuery { key: api_key, sort })
        .send()
        .await
        // the url carries the key
        .map_err(|source| FetchWebfontsError::RequestSend {
            source: source.without_url(),
        })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchWebfontsError::ResponseRead {
            source: source.without_url(),
        })?;

    Ok(WebfontsResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchWebfontsError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
