//! Business report model shapes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{
    BusinessReportFailureCode, BusinessReportFormat, BusinessReportInterval, BusinessReportStatus,
};
use crate::fmt::WireBody;

/// One generated usage report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessReport {
    /// Generation state of the report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BusinessReportStatus>,
    /// Why generation failed, when it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<BusinessReportFailureCode>,
    /// Where the report was delivered
    #[serde(rename = "S3Location", skip_serializing_if = "Option::is_none")]
    pub s3_location: Option<BusinessReportS3Location>,
    /// When the report was delivered, as epoch seconds on the wire
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub delivery_time: Option<DateTime<Utc>>,
    /// Pre-signed download URL for the report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl fmt::Display for BusinessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Status", &self.status)?;
        w.field("FailureCode", &self.failure_code)?;
        w.field("S3Location", &self.s3_location)?;
        w.field("DeliveryTime", &self.delivery_time)?;
        w.field("DownloadUrl", &self.download_url)?;
        w.end()
    }
}

/// Time window a report covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessReportContentRange {
    /// Covered interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<BusinessReportInterval>,
}

impl BusinessReportContentRange {
    /// Create a content range for the given interval.
    #[must_use]
    pub const fn new(interval: BusinessReportInterval) -> Self {
        Self {
            interval: Some(interval),
        }
    }
}

impl fmt::Display for BusinessReportContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Interval", &self.interval)?;
        w.end()
    }
}

/// Recurrence of a report schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessReportRecurrence {
    /// Date the recurrence starts (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl BusinessReportRecurrence {
    /// Create a recurrence starting at the given date.
    #[must_use]
    pub fn new(start_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
        }
    }
}

impl fmt::Display for BusinessReportRecurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("StartDate", &self.start_date)?;
        w.end()
    }
}

/// S3 location a report was delivered to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessReportS3Location {
    /// Key of the delivered object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Bucket the report was delivered to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
}

impl fmt::Display for BusinessReportS3Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Path", &self.path)?;
        w.field("BucketName", &self.bucket_name)?;
        w.end()
    }
}

/// A recurring report schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessReportSchedule {
    /// ARN of the schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_arn: Option<String>,
    /// Name of the schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_name: Option<String>,
    /// Bucket reports are delivered to
    #[serde(rename = "S3BucketName", skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    /// Key prefix of delivered reports
    #[serde(rename = "S3KeyPrefix", skip_serializing_if = "Option::is_none")]
    pub s3_key_prefix: Option<String>,
    /// Output format of the reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<BusinessReportFormat>,
    /// Time window each report covers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_range: Option<BusinessReportContentRange>,
    /// How often reports are generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<BusinessReportRecurrence>,
    /// The most recently generated report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_business_report: Option<BusinessReport>,
}

impl fmt::Display for BusinessReportSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ScheduleArn", &self.schedule_arn)?;
        w.field("ScheduleName", &self.schedule_name)?;
        w.field("S3BucketName", &self.s3_bucket_name)?;
        w.field("S3KeyPrefix", &self.s3_key_prefix)?;
        w.field("Format", &self.format)?;
        w.field("ContentRange", &self.content_range)?;
        w.field("Recurrence", &self.recurrence)?;
        w.field("LastBusinessReport", &self.last_business_report)?;
        w.end()
    }
}
