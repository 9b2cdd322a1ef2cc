//! Rust SDK for the [AfterShip](https://www.aftership.com/) shipment
//! tracking API.
//!
//! The entry point is [`AfterShip`]; each resource is exposed as a handler
//! field, e.g. [`AfterShip::last_checkpoint`]. Handlers validate their input
//! locally, send a single request through a [`Transport`] and decode the
//! `{meta, data}` envelope into either a typed value or an [`ApiError`].

pub mod client;
pub mod config;
pub mod error;
pub mod objects;
pub mod transport;

pub use client::{AfterShip, LastCheckpointHandler};
#[cfg(feature = "client")]
pub use client::ReqwestTransport;
pub use config::ClientConfig;
pub use error::{ApiError, ClientError, ConfigError, HandlerError, TransportError};
pub use objects::checkpoint::{Checkpoint, Tag, TrackingSummary};
pub use objects::envelope::{ApiResponse, Meta, RateLimit};
pub use objects::lookup::{LastCheckpointQuery, LookupParams, TrackingLocator};
pub use transport::{Transport, TransportResponse};
