//! # Quotepoll Core
//!
//! Contracts and loop machinery for the quotepoll client: fetch a JSON
//! array of quote records from one HTTP endpoint on a fixed interval and
//! surface the first record of each response.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint configuration from `$SNAP_DATA/config.toml` |
//! | [`domain`] | The quote record payload type |
//! | [`error`] | Poll cycle error taxonomy (fatal vs. skip) |
//! | [`feed`] | One GET-and-decode cycle against the endpoint |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`poller`] | The recurring poll loop with stop signaling |
//!
//! ## Error Handling
//!
//! A poll cycle fails in exactly one fatal way — the upstream answering
//! with an HTTP error status — and the poll loop propagates that error to
//! its caller. Everything else (transport failure, malformed body, empty
//! array) skips the cycle:
//!
//! ```rust
//! use quotepoll_core::PollError;
//!
//! fn handle_error(error: PollError) {
//!     if error.is_fatal() {
//!         // surface it; the run is over
//!     } else {
//!         // log it; the next tick polls again
//!     }
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod http_client;
pub mod poller;

// Re-export commonly used types at crate root for convenience

pub use config::{Config, ConfigError, CONFIG_FILE, DEFAULT_ENDPOINT};
pub use domain::QuoteRecord;
pub use error::PollError;
pub use feed::QuoteFeed;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use poller::Poller;
