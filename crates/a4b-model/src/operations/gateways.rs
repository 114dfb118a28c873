//! Gateway operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Gateway, GatewayGroup, GatewayGroupSummary, GatewaySummary};
use crate::fmt::WireBody;

/// Request to create a gateway group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGatewayGroupRequest {
    /// Name for the gateway group (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description for the gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl CreateGatewayGroupRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gateway group name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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
}

impl fmt::Display for CreateGatewayGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Name", &self.name)?;
        w.field("Description", &self.description)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.end()
    }
}

/// Response of the create-gateway-group operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGatewayGroupResponse {
    /// ARN of the created gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_group_arn: Option<String>,
}

impl fmt::Display for CreateGatewayGroupResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("GatewayGroupArn", &self.gateway_group_arn)?;
        w.end()
    }
}

/// Request to fetch a gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGatewayRequest {
    /// ARN of the gateway to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}

impl GetGatewayRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gateway to fetch.
    #[must_use]
    pub fn with_gateway_arn(mut self, gateway_arn: impl Into<String>) -> Self {
        self.gateway_arn = Some(gateway_arn.into());
        self
    }
}

impl fmt::Display for GetGatewayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("GatewayArn", &self.gateway_arn)?;
        w.end()
    }
}

/// Response of the get-gateway operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGatewayResponse {
    /// The requested gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,
}

impl fmt::Display for GetGatewayResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Gateway", &self.gateway)?;
        w.end()
    }
}

/// Request to fetch a gateway group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGatewayGroupRequest {
    /// ARN of the gateway group to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_group_arn: Option<String>,
}

impl GetGatewayGroupRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gateway group to fetch.
    #[must_use]
    pub fn with_gateway_group_arn(mut self, gateway_group_arn: impl Into<String>) -> Self {
        self.gateway_group_arn = Some(gateway_group_arn.into());
        self
    }
}

impl fmt::Display for GetGatewayGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("GatewayGroupArn", &self.gateway_group_arn)?;
        w.end()
    }
}

/// Response of the get-gateway-group operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGatewayGroupResponse {
    /// The requested gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_group: Option<GatewayGroup>,
}

impl fmt::Display for GetGatewayGroupResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("GatewayGroup", &self.gateway_group)?;
        w.end()
    }
}

/// Request to list gateways, optionally within one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGatewaysRequest {
    /// Restrict to gateways in this group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_group_arn: Option<String>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListGatewaysRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to gateways in this group.
    #[must_use]
    pub fn with_gateway_group_arn(mut self, gateway_group_arn: impl Into<String>) -> Self {
        self.gateway_group_arn = Some(gateway_group_arn.into());
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

impl fmt::Display for ListGatewaysRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("GatewayGroupArn", &self.gateway_group_arn)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the list-gateways operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGatewaysResponse {
    /// The requested page of gateways
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateways: Option<Vec<GatewaySummary>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListGatewaysResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("Gateways", &self.gateways)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Request to list gateway groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGatewayGroupsRequest {
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListGatewayGroupsRequest {
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

impl fmt::Display for ListGatewayGroupsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the list-gateway-groups operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGatewayGroupsResponse {
    /// The requested page of gateway groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_groups: Option<Vec<GatewayGroupSummary>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListGatewayGroupsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("GatewayGroups", &self.gateway_groups)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}
