use axum::{routing::any, Router};

use crate::endpoints::google::fonts::list::index::handler as google_fonts_list_handler;
use crate::state::AppState;

/// Netlify function path, kept so existing browser clients keep working.
pub const NETLIFY_FONTS_PATH: &str = "/.netlify/functions/get-fonts";
pub const FONTS_PATH: &str = "/api/fonts";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route(NETLIFY_FONTS_PATH, any(google_fonts_list_handler))
		.route(FONTS_PATH, any(google_fonts_list_handler))
		.with_state(state)
}
