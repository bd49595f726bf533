//! HTTP server module for the quorum backend.
//!
//! This module provides an axum-based HTTP server that exposes the
//! availability engine as a REST API. The scraping collaborator renders the
//! third-party scheduling page, extracts the raw availability arrays, and
//! POSTs them here together with the user's roster; the engine's report is
//! returned as JSON for the front end to render.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Slot building, reconciliation, block detection         │
//! │  - Pure, synchronous analysis per request                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Rate limiting and CSRF protection belong to the hosting deployment, not
//! to this layer.

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
