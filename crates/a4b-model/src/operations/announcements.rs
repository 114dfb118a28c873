//! Announcement operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Content, Filter};
use crate::fmt::WireBody;

/// Request to send an announcement to rooms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendAnnouncementRequest {
    /// Rooms to announce in (empty criteria targets every room)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_filters: Option<Vec<Filter>>,
    /// What to announce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// How long devices keep trying to play the announcement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live_in_seconds: Option<i32>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl SendAnnouncementRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one room filter, allocating the backing list on first use.
    #[must_use]
    pub fn with_room_filter(mut self, filter: Filter) -> Self {
        self.room_filters.get_or_insert_with(Vec::new).push(filter);
        self
    }

    /// Set the announcement content.
    #[must_use]
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the delivery time-to-live.
    #[must_use]
    pub const fn with_time_to_live_in_seconds(mut self, seconds: i32) -> Self {
        self.time_to_live_in_seconds = Some(seconds);
        self
    }

    /// Set the idempotency token.
    #[must_use]
    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }
}

impl fmt::Display for SendAnnouncementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("RoomFilters", &self.room_filters)?;
        w.field("Content", &self.content)?;
        w.field("TimeToLiveInSeconds", &self.time_to_live_in_seconds)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.end()
    }
}

/// Response of the send-announcement operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendAnnouncementResponse {
    /// ARN identifying the announcement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_arn: Option<String>,
}

impl fmt::Display for SendAnnouncementResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("AnnouncementArn", &self.announcement_arn)?;
        w.end()
    }
}
