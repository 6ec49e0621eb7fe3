//! # BioBot API
//!
//! REST API for BioBot, served with actix-web.
//!
//! Every client works in a session holding its own copy of a built-in
//! question table. Uploads merge into that copy; the quiz card on screen
//! is kept per session as well.

pub mod rest;

pub use rest::{AppState, RestApi, DEFAULT_MAX_UPLOAD_BYTES};
