//! Client for the Google Fonts Developer API (`webfonts/v1/webfonts`).
//!
//! Returns the raw upstream status and body; callers decide how to interpret them.

pub mod index;
