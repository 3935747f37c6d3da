use axum::{
	body::Body,
	extract::State,
	http::{header, StatusCode},
	response::{IntoResponse, Response},
};
use interfaces_google_webfonts::index::{
	fetch_webfonts, FetchWebfontsError, SortOrder, WebfontsResult};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error};

use crate::state::AppState;

/// Upstream body characters echoed back in `details`.
pub const DETAILS_MAX_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum FontListError {
	#[error("ApiKeyMissing: {var} is not set")]
	ApiKeyMissing {
		var: String,
	},

	#[error("UpstreamStatus: {status}: {body}")]
	UpstreamStatus {
		status: StatusCode,
		body: String,
	},

	#[error("FetchWebfonts: {source}")]
	FetchWebfonts {
		#[from]
		source: FetchWebfontsError,
	},

	#[error("DecodeUpstreamBody: {source}")]
	DecodeUpstreamBody {
		#[from]
		source: serde_json::Error,
	},
}

impl IntoResponse for FontListError {
	fn into_response(self) -> Response {
		let (status, body) = match &self {
			FontListError::ApiKeyMissing { var } => {
				error!("{var} is not set in the environment");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					json!({ "error": "Server configuration error: API key missing." }),
				)
			}
			FontListError::UpstreamStatus { status, body } => {
				error!(%status, %body, "Google API responded with an error status");
				(
					*status,
					json!({
						"error": "Failed to fetch fonts from Google API.",
						"details": truncate_details(body),
					}),
				)
			}
			FontListError::FetchWebfonts { .. } | FontListError::DecodeUpstreamBody { .. } => {
				error!(error = %self, "Font fetch failed");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					json!({ "error": "Internal server error during font fetch." }),
				)
			}
		};

		// No content type on errors, only the success path sets one.
		(status, Body::from(body.to_string())).into_response()
	}
}

/// First `DETAILS_MAX_CHARS` characters of `body`, always followed by `...`.
pub fn truncate_details(body: &str) -> String {
	let mut details: String = body.chars().take(DETAILS_MAX_CHARS).collect();
	details.push_str("...");
	details
}

/// Fetches the trending font list and decodes it as opaque JSON.
///
/// A missing or empty `api_key` short-circuits before any network call.
pub async fn list_fonts(
	state: &AppState,
	api_key: Option<&str>,
) -> Result<Value, FontListError> {
	let api_key = api_key
		.filter(|key| !key.is_empty())
		.ok_or_else(|| FontListError::ApiKeyMissing {
			var: state.api_key_var.to_string(),
		})?;

	let WebfontsResult { body, status } = fetch_webfonts(
		&state.client,
		&state.upstream_endpoint,
		api_key,
		SortOrder::Trending,
	)
	.await?;

	if !status.is_success() {
		return Err(FontListError::UpstreamStatus { status, body });
	}

	debug!(%status, bytes = body.len(), "Google API returned font list");

	Ok(serde_json::from_str(&body)?)
}

/// Axum handler: ANY /.netlify/functions/get-fonts, ANY /api/fonts
pub async fn handler(State(state): State<AppState>) -> Result<Response, FontListError> {
	let api_key = state.api_key();
	let fonts = list_fonts(&state, api_key.as_deref()).await?;

	Ok((
		StatusCode::OK,
		[(header::CONTENT_TYPE, "application/json")],
		Body::from(fonts.to_string()),
	)
		.into_response())
}
