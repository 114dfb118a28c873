//! Network profile model shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{NetworkEapMethod, NetworkSecurityType};
use crate::fmt::WireBody;

/// A network profile, as returned by the get operation.
///
/// Passwords are write-only on the service side; they appear here because
/// the get operation echoes whether they are set, not their values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkProfile {
    /// ARN of the network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_arn: Option<String>,
    /// Name of the network profile (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_name: Option<String>,
    /// Description of the network profile
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
    /// Current network password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    /// Next network password, for rotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_password: Option<String>,
    /// ARN of the private certificate authority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authority_arn: Option<String>,
    /// Root certificates the devices trust (PEM)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_anchors: Option<Vec<String>>,
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NetworkProfileArn", &self.network_profile_arn)?;
        w.field("NetworkProfileName", &self.network_profile_name)?;
        w.field("Description", &self.description)?;
        w.field("Ssid", &self.ssid)?;
        w.field("SecurityType", &self.security_type)?;
        w.field("EapMethod", &self.eap_method)?;
        w.field("CurrentPassword", &self.current_password)?;
        w.field("NextPassword", &self.next_password)?;
        w.field("CertificateAuthorityArn", &self.certificate_authority_arn)?;
        w.list("TrustAnchors", &self.trust_anchors)?;
        w.end()
    }
}

/// A network profile, as returned by the search operation.
///
/// Passwords and trust anchors are never included in search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkProfileData {
    /// ARN of the network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_arn: Option<String>,
    /// Name of the network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_name: Option<String>,
    /// Description of the network profile
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
    /// ARN of the private certificate authority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authority_arn: Option<String>,
}

impl fmt::Display for NetworkProfileData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NetworkProfileArn", &self.network_profile_arn)?;
        w.field("NetworkProfileName", &self.network_profile_name)?;
        w.field("Description", &self.description)?;
        w.field("Ssid", &self.ssid)?;
        w.field("SecurityType", &self.security_type)?;
        w.field("EapMethod", &self.eap_method)?;
        w.field("CertificateAuthorityArn", &self.certificate_authority_arn)?;
        w.end()
    }
}
