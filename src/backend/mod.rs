//! Search backend integration
//!
//! The indexing and search engine lives in an external service; this module
//! only talks to it over HTTP.

pub mod client;
pub mod error;
pub mod models;

pub use client::{BackendClient, DEFAULT_BACKEND_URL};
pub use error::{ClientError, RequestFailure};
pub use models::{IndexReceipt, SearchResponse, SearchResult};
