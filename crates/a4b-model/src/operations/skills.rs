//! Skill and skill group operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, SkillGroup, SkillSummary, SkillsStoreSkill, Tag};
use crate::enums::{EnablementType, SkillTypeFilter};
use crate::fmt::WireBody;

/// Request to create a skill group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSkillGroupRequest {
    /// Name for the skill group (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_name: Option<String>,
    /// Description for the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Tags for the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateSkillGroupRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skill group name.
    #[must_use]
    pub fn with_skill_group_name(mut self, name: impl Into<String>) -> Self {
        self.skill_group_name = Some(name.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

impl fmt::Display for CreateSkillGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroupName", &self.skill_group_name)?;
        w.field("Description", &self.description)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.list("Tags", &self.tags)?;
        w.end()
    }
}

/// Response of the create-skill-group operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSkillGroupResponse {
    /// ARN of the created skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_arn: Option<String>,
}

impl fmt::Display for CreateSkillGroupResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroupArn", &self.skill_group_arn)?;
        w.end()
    }
}

/// Request to fetch a skill group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSkillGroupRequest {
    /// ARN of the skill group; absent means the caller's default group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_arn: Option<String>,
}

impl GetSkillGroupRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skill group to fetch.
    #[must_use]
    pub fn with_skill_group_arn(mut self, skill_group_arn: impl Into<String>) -> Self {
        self.skill_group_arn = Some(skill_group_arn.into());
        self
    }
}

impl fmt::Display for GetSkillGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroupArn", &self.skill_group_arn)?;
        w.end()
    }
}

/// Response of the get-skill-group operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSkillGroupResponse {
    /// The requested skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group: Option<SkillGroup>,
}

impl fmt::Display for GetSkillGroupResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroup", &self.skill_group)?;
        w.end()
    }
}

/// Request to list enabled skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSkillsRequest {
    /// Restrict to skills in this group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_arn: Option<String>,
    /// Restrict by enablement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enablement_type: Option<EnablementType>,
    /// Restrict by visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<SkillTypeFilter>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListSkillsRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to skills in this group.
    #[must_use]
    pub fn with_skill_group_arn(mut self, skill_group_arn: impl Into<String>) -> Self {
        self.skill_group_arn = Some(skill_group_arn.into());
        self
    }

    /// Restrict by enablement.
    #[must_use]
    pub const fn with_enablement_type(mut self, enablement_type: EnablementType) -> Self {
        self.enablement_type = Some(enablement_type);
        self
    }

    /// Restrict by visibility.
    #[must_use]
    pub const fn with_skill_type(mut self, skill_type: SkillTypeFilter) -> Self {
        self.skill_type = Some(skill_type);
        self
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl fmt::Display for ListSkillsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroupArn", &self.skill_group_arn)?;
        w.field("EnablementType", &self.enablement_type)?;
        w.field("SkillType", &self.skill_type)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the list-skills operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSkillsResponse {
    /// The requested page of skills
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_summaries: Option<Vec<SkillSummary>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListSkillsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("SkillSummaries", &self.skill_summaries)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Request to attach a skill group to a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateSkillGroupWithRoomRequest {
    /// ARN of the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_arn: Option<String>,
    /// ARN of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
}

impl AssociateSkillGroupWithRoomRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skill group.
    #[must_use]
    pub fn with_skill_group_arn(mut self, skill_group_arn: impl Into<String>) -> Self {
        self.skill_group_arn = Some(skill_group_arn.into());
        self
    }

    /// Set the room.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }
}

impl fmt::Display for AssociateSkillGroupWithRoomRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroupArn", &self.skill_group_arn)?;
        w.field("RoomArn", &self.room_arn)?;
        w.end()
    }
}

/// Response of the associate-skill-group-with-room operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociateSkillGroupWithRoomResponse {}

impl fmt::Display for AssociateSkillGroupWithRoomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

/// Request to add a skill to a skill group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateSkillWithSkillGroupRequest {
    /// ARN of the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_arn: Option<String>,
    /// Identifier of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
}

impl AssociateSkillWithSkillGroupRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skill group.
    #[must_use]
    pub fn with_skill_group_arn(mut self, skill_group_arn: impl Into<String>) -> Self {
        self.skill_group_arn = Some(skill_group_arn.into());
        self
    }

    /// Set the skill.
    #[must_use]
    pub fn with_skill_id(mut self, skill_id: impl Into<String>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }
}

impl fmt::Display for AssociateSkillWithSkillGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroupArn", &self.skill_group_arn)?;
        w.field("SkillId", &self.skill_id)?;
        w.end()
    }
}

/// Response of the associate-skill-with-skill-group operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociateSkillWithSkillGroupResponse {}

impl fmt::Display for AssociateSkillWithSkillGroupResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

/// Request to list skills store categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSkillsStoreCategoriesRequest {
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListSkillsStoreCategoriesRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl fmt::Display for ListSkillsStoreCategoriesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the list-skills-store-categories operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSkillsStoreCategoriesResponse {
    /// The requested page of categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_list: Option<Vec<Category>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListSkillsStoreCategoriesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("CategoryList", &self.category_list)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Request to list skills store skills in a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSkillsStoreSkillsByCategoryRequest {
    /// Identifier of the category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListSkillsStoreSkillsByCategoryRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category.
    #[must_use]
    pub const fn with_category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl fmt::Display for ListSkillsStoreSkillsByCategoryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("CategoryId", &self.category_id)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the list-skills-store-skills-by-category operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSkillsStoreSkillsByCategoryResponse {
    /// The requested page of store skills
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_store_skills: Option<Vec<SkillsStoreSkill>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListSkillsStoreSkillsByCategoryResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("SkillsStoreSkills", &self.skills_store_skills)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}
