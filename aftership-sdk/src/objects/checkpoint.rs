//! Tracking and checkpoint response types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Delivery status tag assigned by AfterShip to trackings and checkpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Pending,
    InfoReceived,
    InTransit,
    OutForDelivery,
    AttemptFail,
    Delivered,
    AvailableForPickup,
    Exception,
    Expired,
    /// A tag this SDK version does not know about yet, or no tag at all.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Tag {
    /// Whether the shipment has reached a state that will not change anymore.
    pub fn is_final(self) -> bool {
        matches!(self, Tag::Delivered | Tag::Expired)
    }
}

/// A single recorded tracking event.
///
/// Every field may be missing: a `fields` query makes the API return only the
/// requested ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Courier slug that reported the event.
    #[serde(default)]
    pub slug: Option<String>,
    /// When AfterShip recorded the checkpoint.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Courier-local event time as reported by the carrier.
    ///
    /// Kept verbatim: carriers do not always include a UTC offset.
    #[serde(default)]
    pub checkpoint_time: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country_iso3: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Latitude/longitude pairs, possibly empty.
    #[serde(default)]
    pub coordinates: Vec<(f64, f64)>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tag: Tag,
    #[serde(default)]
    pub subtag: Option<String>,
    #[serde(default)]
    pub subtag_message: Option<String>,
    #[serde(default)]
    pub raw_tag: Option<String>,
}

/// Response of `GET /last_checkpoint/...`: a tracking and its most recent
/// checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingSummary {
    pub id: String,
    pub tracking_number: String,
    pub slug: String,
    pub tag: Tag,
    #[serde(default)]
    pub subtag: Option<String>,
    #[serde(default)]
    pub subtag_message: Option<String>,
    pub checkpoint: Checkpoint,
}
