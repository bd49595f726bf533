//! # Quorum Rust Backend
//!
//! Availability aggregation and name-reconciliation engine.
//!
//! This crate analyzes group-availability data scraped from a When2Meet-style
//! scheduling page. Given the raw per-slot attendance arrays and a
//! user-supplied roster of expected names, it produces a reconciliation of
//! the roster against the scraped participants, a ranking of the single
//! best-attended time slots, and recommended contiguous meeting blocks
//! (1h/2h/3h) with adaptive attendance thresholds. The engine is exposed as
//! a REST API via Axum for the hosting front end.
//!
//! ## Features
//!
//! - **Data Loading**: Parse raw availability payloads from JSON format
//! - **Slot Building**: Per-slot attendance counts and percentages
//! - **Reconciliation**: Greedy fuzzy matching of roster names to scraped names
//! - **Block Detection**: Sliding-window contiguous-block search with
//!   threshold relaxation
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Raw-payload parsing, validation, and slot-grid timestamps
//! - [`services`]: The analysis engine (slots, reconciliation, blocks)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The engine itself is synchronous and pure: every invocation builds fresh
//! output from an immutable input snapshot and holds no shared state, so
//! concurrent requests in the hosting process are safe by construction.

pub mod api;

pub mod config;
pub mod error;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
