use std::cmp::Reverse;

use tracing::debug;

use super::LeaveService;
use crate::error::LeaveError;
use crate::model::{
    leave_balance::LeaveBalance,
    leave_request::{LeaveRequest, LeaveStatus},
    user::User,
};
use crate::models::{LeaveStatistics, TeamRequest};

impl LeaveService {
    pub fn user(&self, user_id: u64) -> Result<User, LeaveError> {
        self.store.find_user(user_id)?.ok_or(LeaveError::UserNotFound)
    }

    pub fn balance(&self, user_id: u64) -> Result<LeaveBalance, LeaveError> {
        self.store
            .find_balance(user_id)?
            .ok_or(LeaveError::BalanceNotFound)
    }

    /// All of a user's requests, newest first.
    pub fn requests_for_user(&self, user_id: u64) -> Result<Vec<LeaveRequest>, LeaveError> {
        let mut requests = self.store.requests_by_owner(user_id)?;
        requests.sort_by_key(|r| Reverse(r.created_at));
        Ok(requests)
    }

    /// Pending requests of the manager's direct reports, tagged with the
    /// owner's name.
    pub fn team_requests(&self, manager_id: u64) -> Result<Vec<TeamRequest>, LeaveError> {
        let team = self.store.direct_reports(manager_id)?;
        debug!(manager_id, team_size = team.len(), "Collecting team requests");

        let mut pending = Vec::new();
        for member in &team {
            pending.extend(
                self.store
                    .requests_by_owner(member.id)?
                    .into_iter()
                    .filter(|r| r.status == LeaveStatus::Pending),
            );
        }
        pending.sort_by_key(|r| r.id);

        Ok(pending
            .into_iter()
            .map(|r| {
                let employee = team
                    .iter()
                    .find(|u| u.id == r.user_id)
                    .map_or_else(|| "Unknown".to_string(), |u| u.name.clone());
                TeamRequest::from_request(r, employee)
            })
            .collect())
    }

    pub fn statistics(&self, user_id: u64) -> Result<LeaveStatistics, LeaveError> {
        let requests = self.store.requests_by_owner(user_id)?;
        let count = |status: LeaveStatus| requests.iter().filter(|r| r.status == status).count();

        Ok(LeaveStatistics {
            total_requests: requests.len(),
            pending: count(LeaveStatus::Pending),
            approved: count(LeaveStatus::Approved),
            rejected: count(LeaveStatus::Rejected),
            total_days_taken: requests
                .iter()
                .filter(|r| r.status == LeaveStatus::Approved)
                .map(|r| i64::from(r.days))
                .sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::seeded_service;

    #[test]
    fn unknown_user_and_balance_are_not_found() {
        let service = seeded_service();
        assert!(matches!(service.user(9), Err(LeaveError::UserNotFound)));
        assert!(matches!(service.balance(9), Err(LeaveError::BalanceNotFound)));
        assert_eq!(service.user(3).unwrap().name, "Michael Tan");
    }

    #[test]
    fn requests_are_newest_first() {
        let service = seeded_service();
        let ids: Vec<u64> = service
            .requests_for_user(1)
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(service.requests_for_user(99).unwrap().is_empty());
    }

    #[test]
    fn team_view_lists_only_pending_reports() {
        let service = seeded_service();
        let team = service.team_requests(3).unwrap();

        let summary: Vec<(u64, &str)> =
            team.iter().map(|t| (t.id, t.employee.as_str())).collect();
        assert_eq!(
            summary,
            vec![(1, "John Doe"), (4, "Sarah Chen"), (5, "Alice Wong")]
        );
        assert!(team.iter().all(|t| t.status == LeaveStatus::Pending));
    }

    #[test]
    fn team_view_drops_decided_requests() {
        let service = seeded_service();
        service.decide(4, LeaveStatus::Rejected, 3).unwrap();

        let ids: Vec<u64> = service.team_requests(3).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn team_view_for_non_manager_is_empty() {
        let service = seeded_service();
        assert!(service.team_requests(1).unwrap().is_empty());
        assert!(service.team_requests(50).unwrap().is_empty());
    }

    #[test]
    fn statistics_count_by_status() {
        let service = seeded_service();
        let stats = service.statistics(1).unwrap();
        assert_eq!(
            stats,
            LeaveStatistics {
                total_requests: 3,
                pending: 1,
                approved: 2,
                rejected: 0,
                total_days_taken: 4,
            }
        );
        assert_eq!(service.statistics(99).unwrap(), LeaveStatistics::default());
    }
}
