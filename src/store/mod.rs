//! Storage seam for the leave ledger.
//!
//! Handlers and services only see [`LeaveStore`]; the running server and every
//! test get their own [`InMemoryStore`] so state never leaks between cases.

mod memory;
pub mod seed;

pub use memory::InMemoryStore;

use crate::error::LeaveError;
use crate::model::{
    leave_balance::{LeaveBalance, LeaveCategory},
    leave_request::{LeaveRequest, LeaveStatus, NewLeaveRequest},
    user::User,
};

pub trait LeaveStore: Send + Sync {
    fn find_user(&self, user_id: u64) -> Result<Option<User>, LeaveError>;

    /// Users whose manager is `manager_id`.
    fn direct_reports(&self, manager_id: u64) -> Result<Vec<User>, LeaveError>;

    fn find_balance(&self, user_id: u64) -> Result<Option<LeaveBalance>, LeaveError>;

    /// Subtracts `days` from one counter and returns the updated balance.
    /// No floor is applied.
    fn deduct_balance(
        &self,
        user_id: u64,
        category: LeaveCategory,
        days: i32,
    ) -> Result<LeaveBalance, LeaveError>;

    /// Assigns the next request id and appends the request as Pending.
    fn insert_request(&self, draft: NewLeaveRequest) -> Result<LeaveRequest, LeaveError>;

    fn find_request(&self, request_id: u64) -> Result<Option<LeaveRequest>, LeaveError>;

    /// Requests owned by `user_id`, in insertion order.
    fn requests_by_owner(&self, user_id: u64) -> Result<Vec<LeaveRequest>, LeaveError>;

    fn update_status(
        &self,
        request_id: u64,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, LeaveError>;
}
