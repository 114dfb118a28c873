//! Skill and skill group model shapes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{EnablementType, SkillType};
use crate::error::{ModelError, ModelResult};
use crate::fmt::WireBody;

/// Summary of a skill enabled for an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillSummary {
    /// Identifier of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
    /// Name of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_name: Option<String>,
    /// Whether the skill supports account linking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_linking: Option<bool>,
    /// Whether the skill is enabled or pending linking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enablement_type: Option<EnablementType>,
    /// Visibility of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<SkillType>,
}

impl fmt::Display for SkillSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillId", &self.skill_id)?;
        w.field("SkillName", &self.skill_name)?;
        w.field("SupportsLinking", &self.supports_linking)?;
        w.field("EnablementType", &self.enablement_type)?;
        w.field("SkillType", &self.skill_type)?;
        w.end()
    }
}

/// A skill group, as returned by the get operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillGroup {
    /// ARN of the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_arn: Option<String>,
    /// Name of the skill group (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_name: Option<String>,
    /// Description of the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for SkillGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroupArn", &self.skill_group_arn)?;
        w.field("SkillGroupName", &self.skill_group_name)?;
        w.field("Description", &self.description)?;
        w.end()
    }
}

/// A skill group, as returned by the search operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillGroupData {
    /// ARN of the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_arn: Option<String>,
    /// Name of the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_name: Option<String>,
    /// Description of the skill group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for SkillGroupData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillGroupArn", &self.skill_group_arn)?;
        w.field("SkillGroupName", &self.skill_group_name)?;
        w.field("Description", &self.description)?;
        w.end()
    }
}

/// A skill available in the skills store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillsStoreSkill {
    /// Identifier of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,
    /// Name of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_name: Option<String>,
    /// Short description shown in listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// URL of the skill's icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Example phrases that invoke the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_utterances: Option<Vec<String>>,
    /// Detailed information about the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_details: Option<SkillDetails>,
    /// Whether the skill supports account linking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_linking: Option<bool>,
}

impl fmt::Display for SkillsStoreSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("SkillId", &self.skill_id)?;
        w.field("SkillName", &self.skill_name)?;
        w.field("ShortDescription", &self.short_description)?;
        w.field("IconUrl", &self.icon_url)?;
        w.list("SampleUtterances", &self.sample_utterances)?;
        w.field("SkillDetails", &self.skill_details)?;
        w.field("SupportsLinking", &self.supports_linking)?;
        w.end()
    }
}

/// Detailed information about a skills store skill.
///
/// `reviews` is the one mapping-valued field in the model: entries are
/// review titles keyed to review bodies, and the checked
/// [`add_reviews_entry`](Self::add_reviews_entry) insertion rejects
/// duplicate keys rather than overwriting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillDetails {
    /// Full product description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    /// Phrase used to invoke the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_phrase: Option<String>,
    /// Release date of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// URL of the end-user license agreement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_user_license_agreement: Option<String>,
    /// Generic keywords of the skill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_keywords: Option<Vec<String>>,
    /// Bullet-point description lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,
    /// What changed in the current version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_in_this_version_bullet_points: Option<Vec<String>>,
    /// Skill store types the skill is listed under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_types: Option<Vec<String>>,
    /// Reviews of the skill, title to body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<BTreeMap<String, String>>,
    /// Information about the skill's developer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_info: Option<DeveloperInfo>,
}

impl SkillDetails {
    /// Insert one review, allocating the backing map on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateMapKey`] if `key` is already present;
    /// the existing entry is left unchanged.
    pub fn add_reviews_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ModelResult<()> {
        let key = key.into();
        let reviews = self.reviews.get_or_insert_with(BTreeMap::new);
        if reviews.contains_key(&key) {
            return Err(ModelError::DuplicateMapKey {
                field: "Reviews",
                key,
            });
        }
        reviews.insert(key, value.into());
        Ok(())
    }

    /// Discard all review entries.
    pub fn clear_reviews_entries(&mut self) {
        self.reviews = None;
    }
}

impl fmt::Display for SkillDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ProductDescription", &self.product_description)?;
        w.field("InvocationPhrase", &self.invocation_phrase)?;
        w.field("ReleaseDate", &self.release_date)?;
        w.field("EndUserLicenseAgreement", &self.end_user_license_agreement)?;
        w.list("GenericKeywords", &self.generic_keywords)?;
        w.list("BulletPoints", &self.bullet_points)?;
        w.list(
            "NewInThisVersionBulletPoints",
            &self.new_in_this_version_bullet_points,
        )?;
        w.list("SkillTypes", &self.skill_types)?;
        w.map("Reviews", &self.reviews)?;
        w.field("DeveloperInfo", &self.developer_info)?;
        w.end()
    }
}

/// Information about a skill's developer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeveloperInfo {
    /// Name of the developer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_name: Option<String>,
    /// URL of the developer's privacy policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy: Option<String>,
    /// Contact email of the developer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Website of the developer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl fmt::Display for DeveloperInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("DeveloperName", &self.developer_name)?;
        w.field("PrivacyPolicy", &self.privacy_policy)?;
        w.field("Email", &self.email)?;
        w.field("Url", &self.url)?;
        w.end()
    }
}

/// A skills store category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    /// Identifier of the category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Name of the category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("CategoryId", &self.category_id)?;
        w.field("CategoryName", &self.category_name)?;
        w.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_reviews_entry_rejects_duplicate_key() {
        let mut details = SkillDetails::default();
        details.add_reviews_entry("Great skill", "Works well").unwrap();

        let err = details
            .add_reviews_entry("Great skill", "Different body")
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateMapKey {
                field: "Reviews",
                key: "Great skill".to_string(),
            }
        );
        // The rejected insert must not touch the existing entry.
        assert_eq!(
            details.reviews.as_ref().unwrap()["Great skill"],
            "Works well"
        );
    }

    #[test]
    fn test_clear_reviews_entries_allows_reinsert() {
        let mut details = SkillDetails::default();
        details.add_reviews_entry("Title", "v1").unwrap();
        details.clear_reviews_entries();
        assert!(details.reviews.is_none());
        details.add_reviews_entry("Title", "v2").unwrap();
        assert_eq!(details.reviews.as_ref().unwrap()["Title"], "v2");
    }

    #[test]
    fn test_reviews_render_in_key_order() {
        let mut details = SkillDetails::default();
        details.add_reviews_entry("b", "2").unwrap();
        details.add_reviews_entry("a", "1").unwrap();
        assert_eq!(details.to_string(), "{Reviews: {a=1, b=2}}");
    }
}
