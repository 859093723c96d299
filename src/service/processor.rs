use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use super::LeaveService;
use crate::error::LeaveError;
use crate::model::{
    leave_balance::LeaveCategory,
    leave_request::{LeaveRequest, LeaveStatus, NewLeaveRequest},
};
use crate::utils::date_range::format_date_range;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSubmission {
    #[schema(example = 1)]
    pub user_id: u64,
    /// free text; matched against annual / medical / compassionate
    #[serde(rename = "type")]
    #[schema(example = "Annual Leave")]
    pub leave_type: String,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-07", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = 3)]
    pub days: i32,
    #[serde(default)]
    #[schema(example = "Family trip")]
    pub reason: String,
}

impl LeaveService {
    /// Records a new Pending request after checking it against the
    /// requester's remaining balance. Balances are not touched here.
    #[instrument(
        name = "leave_submit",
        skip(self, submission),
        fields(user_id = submission.user_id, leave_type = %submission.leave_type, days = submission.days)
    )]
    pub fn submit(&self, submission: LeaveSubmission) -> Result<LeaveRequest, LeaveError> {
        if submission.start_date > submission.end_date {
            return Err(LeaveError::validation("startDate cannot be after endDate"));
        }
        if submission.days <= 0 {
            return Err(LeaveError::validation("days must be greater than zero"));
        }

        let balance = self
            .store
            .find_balance(submission.user_id)?
            .ok_or(LeaveError::BalanceNotFound)?;

        // Unrecognised types are accepted without a balance check.
        for category in LeaveCategory::matching(&submission.leave_type) {
            if balance.remaining(category) < submission.days {
                info!(%category, remaining = balance.remaining(category), "Insufficient balance");
                return Err(LeaveError::InsufficientBalance(category));
            }
        }

        let draft = NewLeaveRequest {
            user_id: submission.user_id,
            dates: format_date_range(submission.start_date, submission.end_date),
            leave_type: submission.leave_type,
            start_date: submission.start_date,
            end_date: submission.end_date,
            days: submission.days,
            reason: submission.reason,
            created_at: Utc::now(),
        };

        let created = self.store.insert_request(draft)?;
        info!(request_id = created.id, "Leave request submitted");
        Ok(created)
    }

    /// Applies a manager's decision. Approval deducts `days` from the first
    /// matching category; rejection never restores anything.
    ///
    /// Already-decided requests are not guarded against: approving twice
    /// deducts twice.
    #[instrument(name = "leave_decide", skip(self))]
    pub fn decide(
        &self,
        request_id: u64,
        status: LeaveStatus,
        manager_id: u64,
    ) -> Result<LeaveRequest, LeaveError> {
        let request = self
            .store
            .find_request(request_id)?
            .ok_or(LeaveError::RequestNotFound)?;

        let is_manager = self
            .store
            .find_user(manager_id)?
            .is_some_and(|u| u.role.is_manager());
        if !is_manager {
            info!("Decision rejected: not a manager");
            return Err(LeaveError::Unauthorized);
        }

        if status == LeaveStatus::Pending {
            return Err(LeaveError::validation("status must be Approved or Rejected"));
        }

        if request.status != LeaveStatus::Pending {
            warn!(previous = %request.status, "Request already decided, applying again");
        }

        if status == LeaveStatus::Approved {
            match LeaveCategory::classify(&request.leave_type) {
                Some(category) => {
                    let balance =
                        self.store
                            .deduct_balance(request.user_id, category, request.days)?;
                    info!(%category, remaining = balance.remaining(category), "Balance deducted");
                }
                None => info!(leave_type = %request.leave_type, "No matching category, nothing deducted"),
            }
        }

        self.store.update_status(request_id, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::leave_balance::LeaveBalance;
    use crate::service::seeded_service;
    use crate::store::{InMemoryStore, seed};
    use std::collections::HashMap;
    use std::sync::Arc;

    const MANAGER: u64 = 3;

    fn submission(user_id: u64, leave_type: &str, days: i32) -> LeaveSubmission {
        LeaveSubmission {
            user_id,
            leave_type: leave_type.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
            days,
            reason: "Trip".to_string(),
        }
    }

    #[test]
    fn submit_creates_pending_request_without_touching_balance() {
        let service = seeded_service();
        let created = service.submit(submission(1, "Annual Leave", 3)).unwrap();

        assert_eq!(created.status, LeaveStatus::Pending);
        assert_eq!(created.id, 6);
        assert_eq!(created.dates, "Feb 2-4, 2026");
        assert_eq!(service.balance(1).unwrap().annual, 14);
    }

    #[test]
    fn approving_deducts_the_matching_category() {
        let service = seeded_service();
        let created = service.submit(submission(1, "Annual Leave", 3)).unwrap();

        let decided = service.decide(created.id, LeaveStatus::Approved, MANAGER).unwrap();

        assert_eq!(decided.status, LeaveStatus::Approved);
        assert_eq!(service.balance(1).unwrap(), LeaveBalance::new(11, 12, 3));
    }

    #[test]
    fn rejecting_leaves_balance_alone() {
        let service = seeded_service();
        let decided = service.decide(5, LeaveStatus::Rejected, MANAGER).unwrap();

        assert_eq!(decided.status, LeaveStatus::Rejected);
        assert_eq!(service.balance(4).unwrap(), LeaveBalance::new(12, 15, 3));
    }

    #[test]
    fn rejecting_after_approval_does_not_restore_balance() {
        let service = seeded_service();
        service.decide(1, LeaveStatus::Approved, MANAGER).unwrap();
        assert_eq!(service.balance(1).unwrap().annual, 11);

        let decided = service.decide(1, LeaveStatus::Rejected, MANAGER).unwrap();

        assert_eq!(decided.status, LeaveStatus::Rejected);
        assert_eq!(service.balance(1).unwrap(), LeaveBalance::new(11, 12, 3));
    }

    #[test]
    fn insufficient_balance_is_rejected_and_ledger_unchanged() {
        let service = seeded_service();
        let before = service.requests_for_user(2).unwrap().len();

        let err = service.submit(submission(2, "annual", 11)).unwrap_err();

        assert!(matches!(err, LeaveError::InsufficientBalance(LeaveCategory::Annual)));
        assert_eq!(err.to_string(), "Insufficient annual leave balance");
        assert_eq!(service.requests_for_user(2).unwrap().len(), before);
        assert_eq!(service.balance(2).unwrap().annual, 10);
    }

    #[test]
    fn short_balance_rejects_and_keeps_counter() {
        let store = InMemoryStore::new(
            seed::users(),
            HashMap::from([(1, LeaveBalance::new(2, 12, 3))]),
            Vec::new(),
        );
        let service = LeaveService::new(Arc::new(store));

        let err = service.submit(submission(1, "Annual Leave", 3)).unwrap_err();

        assert!(matches!(err, LeaveError::InsufficientBalance(LeaveCategory::Annual)));
        assert_eq!(service.balance(1).unwrap().annual, 2);
        assert!(service.requests_for_user(1).unwrap().is_empty());
    }

    #[test]
    fn exact_remaining_balance_is_allowed() {
        let service = seeded_service();
        assert!(service.submit(submission(1, "Compassionate Leave", 3)).is_ok());
    }

    #[test]
    fn every_mentioned_category_is_checked_on_submit() {
        let service = seeded_service();
        // John has 14 annual but only 12 medical.
        let err = service
            .submit(submission(1, "Annual or Medical", 13))
            .unwrap_err();
        assert!(matches!(err, LeaveError::InsufficientBalance(LeaveCategory::Medical)));
    }

    #[test]
    fn unknown_leave_type_skips_balance_check_and_deduction() {
        let service = seeded_service();
        let created = service.submit(submission(1, "Unpaid Leave", 40)).unwrap();

        service.decide(created.id, LeaveStatus::Approved, MANAGER).unwrap();

        assert_eq!(service.balance(1).unwrap(), LeaveBalance::new(14, 12, 3));
    }

    #[test]
    fn submit_validates_dates_and_days() {
        let service = seeded_service();

        let mut backwards = submission(1, "Annual Leave", 1);
        std::mem::swap(&mut backwards.start_date, &mut backwards.end_date);
        assert!(matches!(service.submit(backwards), Err(LeaveError::Validation(_))));

        assert!(matches!(
            service.submit(submission(1, "Annual Leave", 0)),
            Err(LeaveError::Validation(_))
        ));
    }

    #[test]
    fn submit_for_unknown_user_has_no_balance() {
        let service = seeded_service();
        assert!(matches!(
            service.submit(submission(42, "Annual Leave", 1)),
            Err(LeaveError::BalanceNotFound)
        ));
    }

    #[test]
    fn decide_unknown_request_is_not_found() {
        let service = seeded_service();
        assert!(matches!(
            service.decide(99, LeaveStatus::Approved, MANAGER),
            Err(LeaveError::RequestNotFound)
        ));
    }

    #[test]
    fn decide_by_non_manager_is_unauthorized() {
        let service = seeded_service();
        assert!(matches!(
            service.decide(1, LeaveStatus::Approved, 2),
            Err(LeaveError::Unauthorized)
        ));
        assert!(matches!(
            service.decide(1, LeaveStatus::Approved, 77),
            Err(LeaveError::Unauthorized)
        ));
        assert_eq!(service.balance(1).unwrap().annual, 14);
    }

    #[test]
    fn decide_back_to_pending_is_invalid() {
        let service = seeded_service();
        assert!(matches!(
            service.decide(1, LeaveStatus::Pending, MANAGER),
            Err(LeaveError::Validation(_))
        ));
    }

    // Known defect: there is no idempotency guard, so a second approval
    // deducts again.
    #[test]
    fn re_approving_deducts_twice() {
        let service = seeded_service();
        service.decide(1, LeaveStatus::Approved, MANAGER).unwrap();
        service.decide(1, LeaveStatus::Approved, MANAGER).unwrap();

        assert_eq!(service.balance(1).unwrap().annual, 8);
    }

    #[test]
    fn repeated_approvals_can_drive_balance_negative() {
        let service = seeded_service();
        // Sarah: 10 annual, request 4 is 5 days.
        for _ in 0..3 {
            service.decide(4, LeaveStatus::Approved, MANAGER).unwrap();
        }
        assert_eq!(service.balance(2).unwrap().annual, -5);
    }
}
