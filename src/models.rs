use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::leave_request::{LeaveRequest, LeaveStatus};

/// A pending request from a manager's direct report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 4,
    "employee": "Sarah Chen",
    "userId": 2,
    "type": "Annual Leave",
    "dates": "Dec 23-27, 2025",
    "startDate": "2025-12-23",
    "endDate": "2025-12-27",
    "days": 5,
    "status": "Pending",
    "reason": "Year-end holiday"
}))]
pub struct TeamRequest {
    pub id: u64,
    /// display name of the request owner
    pub employee: String,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub dates: String,
    #[schema(format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(format = "date", value_type = String)]
    pub end_date: NaiveDate,
    pub days: i32,
    pub status: LeaveStatus,
    pub reason: String,
}

impl TeamRequest {
    pub fn from_request(request: LeaveRequest, employee: String) -> Self {
        Self {
            id: request.id,
            employee,
            user_id: request.user_id,
            leave_type: request.leave_type,
            dates: request.dates,
            start_date: request.start_date,
            end_date: request.end_date,
            days: request.days,
            status: request.status,
            reason: request.reason,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "totalRequests": 3,
    "pending": 1,
    "approved": 2,
    "rejected": 0,
    "totalDaysTaken": 4
}))]
pub struct LeaveStatistics {
    pub total_requests: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// sum of days over approved requests
    pub total_days_taken: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    #[schema(example = "assistant")]
    pub role: String,
    pub content: String,
    #[schema(format = "date-time", value_type = String)]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(format = "date-time", value_type = String)]
    pub timestamp: DateTime<Utc>,
}
