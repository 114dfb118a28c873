//! Business report schedule operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    BusinessReportContentRange, BusinessReportRecurrence, BusinessReportSchedule, Tag,
};
use crate::enums::BusinessReportFormat;
use crate::fmt::WireBody;

/// Request to create a recurring report schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBusinessReportScheduleRequest {
    /// Name for the schedule (0-64 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_name: Option<String>,
    /// Bucket to deliver reports to
    #[serde(rename = "S3BucketName", skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    /// Key prefix for delivered reports
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
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Tags for the schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateBusinessReportScheduleRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schedule name.
    #[must_use]
    pub fn with_schedule_name(mut self, schedule_name: impl Into<String>) -> Self {
        self.schedule_name = Some(schedule_name.into());
        self
    }

    /// Set the delivery bucket.
    #[must_use]
    pub fn with_s3_bucket_name(mut self, s3_bucket_name: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(s3_bucket_name.into());
        self
    }

    /// Set the delivery key prefix.
    #[must_use]
    pub fn with_s3_key_prefix(mut self, s3_key_prefix: impl Into<String>) -> Self {
        self.s3_key_prefix = Some(s3_key_prefix.into());
        self
    }

    /// Set the report format.
    #[must_use]
    pub const fn with_format(mut self, format: BusinessReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the covered time window.
    #[must_use]
    pub fn with_content_range(mut self, content_range: BusinessReportContentRange) -> Self {
        self.content_range = Some(content_range);
        self
    }

    /// Set the recurrence.
    #[must_use]
    pub fn with_recurrence(mut self, recurrence: BusinessReportRecurrence) -> Self {
        self.recurrence = Some(recurrence);
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

impl fmt::Display for CreateBusinessReportScheduleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ScheduleName", &self.schedule_name)?;
        w.field("S3BucketName", &self.s3_bucket_name)?;
        w.field("S3KeyPrefix", &self.s3_key_prefix)?;
        w.field("Format", &self.format)?;
        w.field("ContentRange", &self.content_range)?;
        w.field("Recurrence", &self.recurrence)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.list("Tags", &self.tags)?;
        w.end()
    }
}

/// Response of the create-business-report-schedule operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBusinessReportScheduleResponse {
    /// ARN of the created schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_arn: Option<String>,
}

impl fmt::Display for CreateBusinessReportScheduleResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ScheduleArn", &self.schedule_arn)?;
        w.end()
    }
}

/// Request to list report schedules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBusinessReportSchedulesRequest {
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListBusinessReportSchedulesRequest {
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

impl fmt::Display for ListBusinessReportSchedulesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the list-business-report-schedules operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBusinessReportSchedulesResponse {
    /// The requested page of schedules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_report_schedules: Option<Vec<BusinessReportSchedule>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListBusinessReportSchedulesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("BusinessReportSchedules", &self.business_report_schedules)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Request to delete a report schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBusinessReportScheduleRequest {
    /// ARN of the schedule to delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_arn: Option<String>,
}

impl DeleteBusinessReportScheduleRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schedule to delete.
    #[must_use]
    pub fn with_schedule_arn(mut self, schedule_arn: impl Into<String>) -> Self {
        self.schedule_arn = Some(schedule_arn.into());
        self
    }
}

impl fmt::Display for DeleteBusinessReportScheduleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ScheduleArn", &self.schedule_arn)?;
        w.end()
    }
}

/// Response of the delete-business-report-schedule operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteBusinessReportScheduleResponse {}

impl fmt::Display for DeleteBusinessReportScheduleResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::BusinessReportInterval;

    #[test]
    fn test_create_schedule_request_serializes_s3_wire_names() {
        let request = CreateBusinessReportScheduleRequest::new()
            .with_schedule_name("weekly-usage")
            .with_s3_bucket_name("acme-reports")
            .with_s3_key_prefix("a4b/")
            .with_format(BusinessReportFormat::CsvZip)
            .with_content_range(BusinessReportContentRange::new(
                BusinessReportInterval::OneWeek,
            ));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["S3BucketName"], "acme-reports");
        assert_eq!(json["S3KeyPrefix"], "a4b/");
        assert_eq!(json["Format"], "CSV_ZIP");
        assert_eq!(json["ContentRange"]["Interval"], "ONE_WEEK");
    }
}
