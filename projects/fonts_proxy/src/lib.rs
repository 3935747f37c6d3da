//! Google Fonts list proxy
//!
//! - Endpoint in `endpoints/`, mounted by `router`
//! - Reads GOOGLE_FONTS_API_KEY from the environment on every request
//! - Process settings (listen address, logging, upstream override) in `config`

pub mod config;
pub mod endpoints;
pub mod router;
pub mod state;
