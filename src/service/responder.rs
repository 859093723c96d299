//! Scripted assistant: keyword lookup over a fixed set of replies.

use chrono::Utc;
use tracing::debug;

use super::LeaveService;
use crate::error::LeaveError;
use crate::model::{leave_balance::LeaveBalance, leave_request::LeaveStatus};
use crate::models::ChatReply;

const APPLY_HELP: &str = "I can help you submit a leave request. Please provide:\n\
1. Type of leave (Annual, Medical, or Compassionate)\n\
2. Start date\n\
3. End date\n\
4. Reason for leave";

const GENERIC_HELP: &str = "I'm here to help you with leave requests, checking balances, \
viewing your leave history, and answering questions about leave policies. \
What would you like to know?";

/// Live data a reply may quote.
#[derive(Debug, Clone, Copy)]
pub struct AssistantContext {
    pub balance: LeaveBalance,
    pub pending_requests: usize,
}

/// Picks the first template whose keywords occur in `message`.
pub fn canned_reply(message: &str, ctx: &AssistantContext) -> String {
    let message = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| message.contains(w));
    let balance = &ctx.balance;

    if mentions(&["balance"]) {
        format!(
            "Your current leave balance is:\n- Annual Leave: {} days\n- Medical Leave: {} days\n- Compassionate Leave: {} days",
            balance.annual, balance.medical, balance.compassionate
        )
    } else if mentions(&["request", "apply"]) {
        APPLY_HELP.to_string()
    } else if mentions(&["annual"]) {
        format!(
            "You have {} days of annual leave remaining. When would you like to take your leave?",
            balance.annual
        )
    } else if mentions(&["medical"]) {
        format!(
            "You have {} days of medical leave remaining. Please note that medical certificates may be required for leaves longer than 1 day.",
            balance.medical
        )
    } else if mentions(&["status", "pending"]) {
        format!(
            "You have {} pending leave request(s). Would you like me to show you the details?",
            ctx.pending_requests
        )
    } else {
        GENERIC_HELP.to_string()
    }
}

impl LeaveService {
    /// Answers a chat message for `user_id`. Both fields are required and
    /// a zero user id counts as missing.
    pub fn chat(&self, message: Option<&str>, user_id: Option<u64>) -> Result<ChatReply, LeaveError> {
        let (message, user_id) = match (message, user_id) {
            (Some(m), Some(id)) if !m.is_empty() && id != 0 => (m, id),
            _ => return Err(LeaveError::validation("Message and userId are required")),
        };

        let ctx = AssistantContext {
            balance: self.balance(user_id)?,
            pending_requests: self
                .store
                .requests_by_owner(user_id)?
                .iter()
                .filter(|r| r.status == LeaveStatus::Pending)
                .count(),
        };
        debug!(user_id, "Answering chat message");

        Ok(ChatReply {
            role: "assistant".to_string(),
            content: canned_reply(message, &ctx),
            timestamp: Utc::now(),
        })
    }
}
