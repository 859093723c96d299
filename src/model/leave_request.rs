use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, ToSchema,
)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 1,
    "userId": 1,
    "type": "Annual Leave",
    "dates": "Dec 20-22, 2025",
    "startDate": "2025-12-20",
    "endDate": "2025-12-22",
    "days": 3,
    "status": "Pending",
    "reason": "Family vacation",
    "createdAt": "2025-12-10T10:00:00Z"
}))]
pub struct LeaveRequest {
    pub id: u64,
    pub user_id: u64,
    /// free text, e.g. "Annual Leave"
    #[serde(rename = "type")]
    pub leave_type: String,
    /// human readable range, e.g. "Dec 20-22, 2025"
    pub dates: String,
    #[schema(example = "2025-12-20", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2025-12-22", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    pub days: i32,
    pub status: LeaveStatus,
    pub reason: String,
    #[schema(example = "2025-12-10T10:00:00Z", format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// A validated submission waiting for the store to assign an id.
#[derive(Debug, Clone)]
pub struct NewLeaveRequest {
    pub user_id: u64,
    pub leave_type: String,
    pub dates: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl NewLeaveRequest {
    pub fn into_request(self, id: u64) -> LeaveRequest {
        LeaveRequest {
            id,
            user_id: self.user_id,
            leave_type: self.leave_type,
            dates: self.dates,
            start_date: self.start_date,
            end_date: self.end_date,
            days: self.days,
            status: LeaveStatus::Pending,
            reason: self.reason,
            created_at: self.created_at,
        }
    }
}
