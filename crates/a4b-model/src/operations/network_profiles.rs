//! Network profile operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Filter, NetworkProfile, NetworkProfileData, Sort};
use crate::enums::{NetworkEapMethod, NetworkSecurityType};
use crate::fmt::WireBody;

/// Request to create a network profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNetworkProfileRequest {
    /// Name for the network profile (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_name: Option<String>,
    /// Description for the network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// SSID of the Wi-Fi network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    /// Security protocol of the network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_type: Option<NetworkSecurityType>,
    /// EAP method for enterprise networks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eap_method: Option<NetworkEapMethod>,
    /// Current network password (PSK networks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    /// Next network password, for rotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_password: Option<String>,
    /// ARN of the private certificate authority (enterprise networks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authority_arn: Option<String>,
    /// Root certificates the devices trust (PEM, up to 5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_anchors: Option<Vec<String>>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl CreateNetworkProfileRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the network profile name.
    #[must_use]
    pub fn with_network_profile_name(mut self, name: impl Into<String>) -> Self {
        self.network_profile_name = Some(name.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the SSID.
    #[must_use]
    pub fn with_ssid(mut self, ssid: impl Into<String>) -> Self {
        self.ssid = Some(ssid.into());
        self
    }

    /// Set the security protocol.
    #[must_use]
    pub const fn with_security_type(mut self, security_type: NetworkSecurityType) -> Self {
        self.security_type = Some(security_type);
        self
    }

    /// Set the EAP method.
    #[must_use]
    pub const fn with_eap_method(mut self, eap_method: NetworkEapMethod) -> Self {
        self.eap_method = Some(eap_method);
        self
    }

    /// Set the current password.
    #[must_use]
    pub fn with_current_password(mut self, password: impl Into<String>) -> Self {
        self.current_password = Some(password.into());
        self
    }

    /// Set the next password.
    #[must_use]
    pub fn with_next_password(mut self, password: impl Into<String>) -> Self {
        self.next_password = Some(password.into());
        self
    }

    /// Set the certificate authority.
    #[must_use]
    pub fn with_certificate_authority_arn(mut self, arn: impl Into<String>) -> Self {
        self.certificate_authority_arn = Some(arn.into());
        self
    }

    /// Append one trust anchor, allocating the backing list on first use.
    #[must_use]
    pub fn with_trust_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.trust_anchors
            .get_or_insert_with(Vec::new)
            .push(anchor.into());
        self
    }

    /// Set the idempotency token.
    #[must_use]
    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }
}

impl fmt::Display for CreateNetworkProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NetworkProfileName", &self.network_profile_name)?;
        w.field("Description", &self.description)?;
        w.field("Ssid", &self.ssid)?;
        w.field("SecurityType", &self.security_type)?;
        w.field("EapMethod", &self.eap_method)?;
        w.field("CurrentPassword", &self.current_password)?;
        w.field("NextPassword", &self.next_password)?;
        w.field("CertificateAuthorityArn", &self.certificate_authority_arn)?;
        w.list("TrustAnchors", &self.trust_anchors)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.end()
    }
}

/// Response of the create-network-profile operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNetworkProfileResponse {
    /// ARN of the created network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_arn: Option<String>,
}

impl fmt::Display for CreateNetworkProfileResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NetworkProfileArn", &self.network_profile_arn)?;
        w.end()
    }
}

/// Request to fetch a network profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetNetworkProfileRequest {
    /// ARN of the network profile to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_arn: Option<String>,
}

impl GetNetworkProfileRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the network profile to fetch.
    #[must_use]
    pub fn with_network_profile_arn(mut self, arn: impl Into<String>) -> Self {
        self.network_profile_arn = Some(arn.into());
        self
    }
}

impl fmt::Display for GetNetworkProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NetworkProfileArn", &self.network_profile_arn)?;
        w.end()
    }
}

/// Response of the get-network-profile operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetNetworkProfileResponse {
    /// The requested network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile: Option<NetworkProfile>,
}

impl fmt::Display for GetNetworkProfileResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NetworkProfile", &self.network_profile)?;
        w.end()
    }
}

/// Request to search network profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchNetworkProfilesRequest {
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Filter criteria (supported keys: `NetworkProfileName`, `Ssid`,
    /// `SecurityType`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Sort criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<Vec<Sort>>,
}

impl SearchNetworkProfilesRequest {
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
}

impl fmt::Display for SearchNetworkProfilesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.list("Filters", &self.filters)?;
        w.list("SortCriteria", &self.sort_criteria)?;
        w.end()
    }
}

/// Response of the search-network-profiles operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchNetworkProfilesResponse {
    /// Network profiles matching the criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profiles: Option<Vec<NetworkProfileData>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
}

impl fmt::Display for SearchNetworkProfilesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("NetworkProfiles", &self.network_profiles)?;
        w.field("NextToken", &self.next_token)?;
        w.field("TotalCount", &self.total_count)?;
        w.end()
    }
}
