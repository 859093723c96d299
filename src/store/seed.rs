//! Demo directory and ledger loaded at startup.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::model::{
    leave_balance::LeaveBalance,
    leave_request::{LeaveRequest, LeaveStatus},
    role::Role,
    user::User,
};
use crate::utils::date_range::format_date_range;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}

fn timestamp(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let naive = day.and_hms_opt(hour, minute, 0).expect("seed time is valid");
    Utc.from_utc_datetime(&naive)
}

fn user(id: u64, name: &str, email: &str, role: Role, manager_id: Option<u64>) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        manager_id,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(1, "John Doe", "john.doe@uob.com", Role::Employee, Some(3)),
        user(2, "Sarah Chen", "sarah.chen@uob.com", Role::Employee, Some(3)),
        user(3, "Michael Tan", "michael.tan@uob.com", Role::Manager, None),
        user(4, "Alice Wong", "alice.wong@uob.com", Role::Employee, Some(3)),
    ]
}

pub fn balances() -> HashMap<u64, LeaveBalance> {
    HashMap::from([
        (1, LeaveBalance::new(14, 12, 3)),
        (2, LeaveBalance::new(10, 14, 3)),
        (3, LeaveBalance::new(18, 10, 3)),
        (4, LeaveBalance::new(12, 15, 3)),
    ])
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: u64,
    user_id: u64,
    leave_type: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: i32,
    status: LeaveStatus,
    reason: &str,
    created_at: DateTime<Utc>,
) -> LeaveRequest {
    LeaveRequest {
        id,
        user_id,
        leave_type: leave_type.to_string(),
        dates: format_date_range(start_date, end_date),
        start_date,
        end_date,
        days,
        status,
        reason: reason.to_string(),
        created_at,
    }
}

pub fn requests() -> Vec<LeaveRequest> {
    vec![
        request(
            1,
            1,
            "Annual Leave",
            date(2025, 12, 20),
            date(2025, 12, 22),
            3,
            LeaveStatus::Pending,
            "Family vacation",
            timestamp(date(2025, 12, 10), 10, 0),
        ),
        request(
            2,
            1,
            "Medical Leave",
            date(2025, 12, 10),
            date(2025, 12, 10),
            1,
            LeaveStatus::Approved,
            "Medical checkup",
            timestamp(date(2025, 12, 5), 9, 0),
        ),
        request(
            3,
            1,
            "Annual Leave",
            date(2025, 11, 15),
            date(2025, 11, 17),
            3,
            LeaveStatus::Approved,
            "Personal matters",
            timestamp(date(2025, 11, 1), 14, 0),
        ),
        request(
            4,
            2,
            "Annual Leave",
            date(2025, 12, 23),
            date(2025, 12, 27),
            5,
            LeaveStatus::Pending,
            "Year-end holiday",
            timestamp(date(2025, 12, 12), 11, 0),
        ),
        request(
            5,
            4,
            "Medical Leave",
            date(2025, 12, 18),
            date(2025, 12, 18),
            1,
            LeaveStatus::Pending,
            "Doctor appointment",
            timestamp(date(2025, 12, 14), 8, 30),
        ),
    ]
}
