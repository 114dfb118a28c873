//! Room operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Filter, Room, RoomData, RoomSkillParameter, Sort, Tag};
use crate::fmt::WireBody;

/// Request to create a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoomRequest {
    /// Name for the room (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// Description for the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ARN of the profile to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
    /// Calendar identifier in the calendar provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_calendar_id: Option<String>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Tags for the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateRoomRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room name.
    #[must_use]
    pub fn with_room_name(mut self, room_name: impl Into<String>) -> Self {
        self.room_name = Some(room_name.into());
        self
    }

    /// Set the room description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the profile to apply.
    #[must_use]
    pub fn with_profile_arn(mut self, profile_arn: impl Into<String>) -> Self {
        self.profile_arn = Some(profile_arn.into());
        self
    }

    /// Set the provider calendar identifier.
    #[must_use]
    pub fn with_provider_calendar_id(mut self, provider_calendar_id: impl Into<String>) -> Self {
        self.provider_calendar_id = Some(provider_calendar_id.into());
        self
    }

    /// Set the idempotency token.
    #[must_use]
    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }

    /// Append one tag, allocating the backing list on first use.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }
}

impl fmt::Display for CreateRoomRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomName", &self.room_name)?;
        w.field("Description", &self.description)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.field("ProviderCalendarId", &self.provider_calendar_id)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.list("Tags", &self.tags)?;
        w.end()
    }
}

/// Response of the create-room operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoomResponse {
    /// ARN of the created room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
}

impl fmt::Display for CreateRoomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.end()
    }
}

/// Request to fetch a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoomRequest {
    /// ARN of the room to fetch; absent means the caller's default room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
}

impl GetRoomRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room to fetch.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }
}

impl fmt::Display for GetRoomRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.end()
    }
}

/// Response of the get-room operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoomResponse {
    /// The requested room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
}

impl fmt::Display for GetRoomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Room", &self.room)?;
        w.end()
    }
}

/// Request to update a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRoomRequest {
    /// ARN of the room to update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// New name for the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// New description for the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New provider calendar identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_calendar_id: Option<String>,
    /// New profile to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
}

impl UpdateRoomRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room to update.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }

    /// Set the new room name.
    #[must_use]
    pub fn with_room_name(mut self, room_name: impl Into<String>) -> Self {
        self.room_name = Some(room_name.into());
        self
    }

    /// Set the new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the new provider calendar identifier.
    #[must_use]
    pub fn with_provider_calendar_id(mut self, provider_calendar_id: impl Into<String>) -> Self {
        self.provider_calendar_id = Some(provider_calendar_id.into());
        self
    }

    /// Set the new profile.
    #[must_use]
    pub fn with_profile_arn(mut self, profile_arn: impl Into<String>) -> Self {
        self.profile_arn = Some(profile_arn.into());
        self
    }
}

impl fmt::Display for UpdateRoomRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("RoomName", &self.room_name)?;
        w.field("Description", &self.description)?;
        w.field("ProviderCalendarId", &self.provider_calendar_id)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.end()
    }
}

/// Response of the update-room operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRoomResponse {}

impl fmt::Display for UpdateRoomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

/// Request to delete a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRoomRequest {
    /// ARN of the room to delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
}

impl DeleteRoomRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room to delete.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }
}

impl fmt::Display for DeleteRoomRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.end()
    }
}

/// Response of the delete-room operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteRoomResponse {}

impl fmt::Display for DeleteRoomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

/// Request to search rooms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRoomsRequest {
    /// Filter criteria (supported keys: `RoomName`, `ProfileName`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Sort criteria (supported keys: `RoomName`, `ProfileName`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<Vec<Sort>>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl SearchRoomsRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one filter criterion, allocating the backing list on first
    /// use.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(filter);
        self
    }

    /// Append one sort criterion.
    #[must_use]
    pub fn with_sort_criterion(mut self, sort: Sort) -> Self {
        self.sort_criteria.get_or_insert_with(Vec::new).push(sort);
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl fmt::Display for SearchRoomsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("Filters", &self.filters)?;
        w.list("SortCriteria", &self.sort_criteria)?;
        w.field("MaxResults", &self.max_results)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Response of the search-rooms operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRoomsResponse {
    /// Rooms matching the criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<RoomData>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
}

impl fmt::Display for SearchRoomsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("Rooms", &self.rooms)?;
        w.field("NextToken", &self.next_token)?;
        w.field("TotalCount", &self.total_count)?;
        w.end()
    }
}

/// Request to resolve the room a skill request originated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolveRoomRequest {
    /// Identifier of the requesting user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Identifier of the requesting skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
}

impl ResolveRoomRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requesting user.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the requesting skill.
    #[must_use]
    pub fn with_skill_id(mut self, skill_id: impl Into<String>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }
}

impl fmt::Display for ResolveRoomRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("UserId", &self.user_id)?;
        w.field("SkillId", &self.skill_id)?;
        w.end()
    }
}

/// Response of the resolve-room operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolveRoomResponse {
    /// ARN of the resolved room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// Name of the resolved room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// Skill parameters scoped to the resolved room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_skill_parameters: Option<Vec<RoomSkillParameter>>,
}

impl fmt::Display for ResolveRoomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("RoomName", &self.room_name)?;
        w.list("RoomSkillParameters", &self.room_skill_parameters)?;
        w.end()
    }
}

/// Request to fetch one room skill parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoomSkillParameterRequest {
    /// ARN of the room; absent means the caller's default room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// Identifier of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
    /// Key of the parameter to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_key: Option<String>,
}

impl GetRoomSkillParameterRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }

    /// Set the skill.
    #[must_use]
    pub fn with_skill_id(mut self, skill_id: impl Into<String>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }

    /// Set the parameter key.
    #[must_use]
    pub fn with_parameter_key(mut self, parameter_key: impl Into<String>) -> Self {
        self.parameter_key = Some(parameter_key.into());
        self
    }
}

impl fmt::Display for GetRoomSkillParameterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("SkillId", &self.skill_id)?;
        w.field("ParameterKey", &self.parameter_key)?;
        w.end()
    }
}

/// Response of the get-room-skill-parameter operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoomSkillParameterResponse {
    /// The requested parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_skill_parameter: Option<RoomSkillParameter>,
}

impl fmt::Display for GetRoomSkillParameterResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomSkillParameter", &self.room_skill_parameter)?;
        w.end()
    }
}

/// Request to store one room skill parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRoomSkillParameterRequest {
    /// ARN of the room; absent means the caller's default room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// Identifier of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
    /// Parameter to store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_skill_parameter: Option<RoomSkillParameter>,
}

impl PutRoomSkillParameterRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }

    /// Set the skill.
    #[must_use]
    pub fn with_skill_id(mut self, skill_id: impl Into<String>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }

    /// Set the parameter to store.
    #[must_use]
    pub fn with_room_skill_parameter(mut self, parameter: RoomSkillParameter) -> Self {
        self.room_skill_parameter = Some(parameter);
        self
    }
}

impl fmt::Display for PutRoomSkillParameterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("SkillId", &self.skill_id)?;
        w.field("RoomSkillParameter", &self.room_skill_parameter)?;
        w.end()
    }
}

/// Response of the put-room-skill-parameter operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PutRoomSkillParameterResponse {}

impl fmt::Display for PutRoomSkillParameterResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_room_request_renders_set_fields_in_order() {
        let request = CreateRoomRequest::new()
            .with_room_name("Room 12")
            .with_profile_arn("arn:aws:a4b:us-east-1:111122223333:profile/abc");
        assert_eq!(
            request.to_string(),
            "{RoomName: Room 12,ProfileArn: arn:aws:a4b:us-east-1:111122223333:profile/abc}"
        );
    }

    #[test]
    fn test_fluent_and_field_assignment_agree() {
        let fluent = CreateRoomRequest::new()
            .with_room_name("Room 12")
            .with_profile_arn("arn:aws:a4b:us-east-1:111122223333:profile/abc");

        let mut imperative = CreateRoomRequest::new();
        imperative.room_name = Some("Room 12".to_string());
        imperative.profile_arn = Some("arn:aws:a4b:us-east-1:111122223333:profile/abc".to_string());

        assert_eq!(fluent, imperative);

        let without_profile = CreateRoomRequest::new().with_room_name("Room 12");
        assert_ne!(fluent, without_profile);
    }

    #[test]
    fn test_search_rooms_request_filters_accumulate() {
        let request = SearchRoomsRequest::new()
            .with_filter(Filter::new("RoomName").with_value("Room 12"))
            .with_filter(Filter::new("ProfileName").with_value("default"));
        assert_eq!(request.filters.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_response_renders_braces() {
        assert_eq!(DeleteRoomResponse::default().to_string(), "{}");
    }
}
