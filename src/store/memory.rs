use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{LeaveStore, seed};
use crate::error::LeaveError;
use crate::model::{
    leave_balance::{LeaveBalance, LeaveCategory},
    leave_request::{LeaveRequest, LeaveStatus, NewLeaveRequest},
    user::User,
};

#[derive(Debug, Default)]
struct Ledger {
    users: Vec<User>,
    balances: HashMap<u64, LeaveBalance>,
    requests: Vec<LeaveRequest>,
    next_request_id: u64,
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug)]
pub struct InMemoryStore {
    ledger: RwLock<Ledger>,
}

impl InMemoryStore {
    pub fn new(
        users: Vec<User>,
        balances: HashMap<u64, LeaveBalance>,
        requests: Vec<LeaveRequest>,
    ) -> Self {
        let next_request_id = requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            ledger: RwLock::new(Ledger {
                users,
                balances,
                requests,
                next_request_id,
            }),
        }
    }

    /// Store preloaded with the demo directory, balances and requests.
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::balances(), seed::requests())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Ledger>, LeaveError> {
        self.ledger
            .read()
            .map_err(|e| LeaveError::Internal(format!("ledger lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Ledger>, LeaveError> {
        self.ledger
            .write()
            .map_err(|e| LeaveError::Internal(format!("ledger lock poisoned: {e}")))
    }
}

impl LeaveStore for InMemoryStore {
    fn find_user(&self, user_id: u64) -> Result<Option<User>, LeaveError> {
        Ok(self.read()?.users.iter().find(|u| u.id == user_id).cloned())
    }

    fn direct_reports(&self, manager_id: u64) -> Result<Vec<User>, LeaveError> {
        Ok(self
            .read()?
            .users
            .iter()
            .filter(|u| u.reports_to(manager_id))
            .cloned()
            .collect())
    }

    fn find_balance(&self, user_id: u64) -> Result<Option<LeaveBalance>, LeaveError> {
        Ok(self.read()?.balances.get(&user_id).copied())
    }

    fn deduct_balance(
        &self,
        user_id: u64,
        category: LeaveCategory,
        days: i32,
    ) -> Result<LeaveBalance, LeaveError> {
        let mut ledger = self.write()?;
        let balance = ledger
            .balances
            .get_mut(&user_id)
            .ok_or(LeaveError::BalanceNotFound)?;
        balance.deduct(category, days);
        Ok(*balance)
    }

    fn insert_request(&self, draft: NewLeaveRequest) -> Result<LeaveRequest, LeaveError> {
        let mut ledger = self.write()?;
        let id = ledger.next_request_id;
        ledger.next_request_id += 1;

        let request = draft.into_request(id);
        ledger.requests.push(request.clone());
        Ok(request)
    }

    fn find_request(&self, request_id: u64) -> Result<Option<LeaveRequest>, LeaveError> {
        Ok(self
            .read()?
            .requests
            .iter()
            .find(|r| r.id == request_id)
            .cloned())
    }

    fn requests_by_owner(&self, user_id: u64) -> Result<Vec<LeaveRequest>, LeaveError> {
        Ok(self
            .read()?
            .requests
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    fn update_status(
        &self,
        request_id: u64,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, LeaveError> {
        let mut ledger = self.write()?;
        let request = ledger
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or(LeaveError::RequestNotFound)?;
        request.status = status;
        Ok(request.clone())
    }
}
