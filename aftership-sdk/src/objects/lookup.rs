//! Request types for addressing a single tracking.

use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// Loosely typed tracking lookup, as accepted by the public API.
///
/// A tracking is addressed either by courier `slug` + `tracking_number`, or
/// by its AfterShip `tracking_id`. Empty strings count as absent. Convert to
/// a [`TrackingLocator`] to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
}

impl LookupParams {
    pub fn by_slug_and_number(slug: impl Into<String>, tracking_number: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            tracking_number: Some(tracking_number.into()),
            tracking_id: None,
        }
    }

    pub fn by_tracking_id(tracking_id: impl Into<String>) -> Self {
        Self {
            tracking_id: Some(tracking_id.into()),
            ..Self::default()
        }
    }
}

/// A validated tracking address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackingLocator {
    BySlugAndNumber {
        slug: String,
        tracking_number: String,
    },
    ByTrackingId {
        tracking_id: String,
    },
}

impl TrackingLocator {
    /// Reject identifiers that cannot be sent as a single path segment.
    ///
    /// `.` and `..` are dot segments: URL normalization removes them (even
    /// when percent-encoded), which would address a different resource.
    pub fn check_segments(&self) -> Result<(), HandlerError> {
        let dot_segment = |v: &str| v == "." || v == "..";
        let invalid = match self {
            Self::BySlugAndNumber {
                slug,
                tracking_number,
            } => dot_segment(slug) || dot_segment(tracking_number),
            Self::ByTrackingId { tracking_id } => dot_segment(tracking_id),
        };
        if invalid {
            return Err(HandlerError::DotSegment);
        }
        Ok(())
    }

    /// Build the resource path below `base` (e.g. `last_checkpoint`).
    ///
    /// Identifiers are percent-encoded, so `/` and `?` cannot split them.
    /// Dot segments are rejected by [`check_segments`](Self::check_segments).
    pub fn path(&self, base: &str) -> String {
        match self {
            Self::BySlugAndNumber {
                slug,
                tracking_number,
            } => format!(
                "/{base}/{}/{}",
                urlencoding::encode(slug),
                urlencoding::encode(tracking_number)
            ),
            Self::ByTrackingId { tracking_id } => {
                format!("/{base}/{}", urlencoding::encode(tracking_id))
            }
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl TryFrom<&LookupParams> for TrackingLocator {
    type Error = HandlerError;

    fn try_from(params: &LookupParams) -> Result<Self, Self::Error> {
        let slug = present(&params.slug);
        let tracking_number = present(&params.tracking_number);
        let tracking_id = present(&params.tracking_id);

        let locator = match (tracking_id, tracking_number) {
            (None, None) => Err(HandlerError::MissingIdentifier),
            (Some(_), Some(_)) => Err(HandlerError::ConflictingIdentifiers),
            // A slug next to a tracking id carries no information and is ignored.
            (Some(id), None) => Ok(Self::ByTrackingId {
                tracking_id: id.to_owned(),
            }),
            (None, Some(number)) => match slug {
                Some(slug) => Ok(Self::BySlugAndNumber {
                    slug: slug.to_owned(),
                    tracking_number: number.to_owned(),
                }),
                None => Err(HandlerError::MissingIdentifier),
            },
        }?;
        locator.check_segments()?;
        Ok(locator)
    }
}

impl TryFrom<LookupParams> for TrackingLocator {
    type Error = HandlerError;

    fn try_from(params: LookupParams) -> Result<Self, Self::Error> {
        Self::try_from(&params)
    }
}

/// Optional query parameters of the last-checkpoint endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastCheckpointQuery {
    /// Restrict the returned checkpoint fields, e.g. `["city", "tag"]`.
    #[serde(default)]
    pub fields: Vec<String>,
    /// Language for translated checkpoint messages (courier dependent).
    #[serde(default)]
    pub lang: Option<String>,
}

impl LastCheckpointQuery {
    /// Encode as query pairs; empty parameters are omitted.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.fields.is_empty() {
            pairs.push(("fields".to_owned(), self.fields.join(",")));
        }
        if let Some(lang) = present(&self.lang) {
            pairs.push(("lang".to_owned(), lang.to_owned()));
        }
        pairs
    }
}
