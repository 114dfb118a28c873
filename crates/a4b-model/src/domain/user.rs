//! User model shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::EnrollmentStatus;
use crate::fmt::WireBody;

/// A user, as returned by the search operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserData {
    /// ARN of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_arn: Option<String>,
    /// First name of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Enrollment state of the user's invitation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_status: Option<EnrollmentStatus>,
    /// Identifier of the enrollment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_id: Option<String>,
}

impl fmt::Display for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("UserArn", &self.user_arn)?;
        w.field("FirstName", &self.first_name)?;
        w.field("LastName", &self.last_name)?;
        w.field("Email", &self.email)?;
        w.field("EnrollmentStatus", &self.enrollment_status)?;
        w.field("EnrollmentId", &self.enrollment_id)?;
        w.end()
    }
}
