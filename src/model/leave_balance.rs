use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use utoipa::ToSchema;

/// The three tracked entitlements. Order matters: it is the precedence used
/// when a free-text leave type mentions more than one category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LeaveCategory {
    Annual,
    Medical,
    Compassionate,
}

impl LeaveCategory {
    /// Every category whose name occurs in `leave_type`, case-insensitively.
    pub fn matching(leave_type: &str) -> Vec<LeaveCategory> {
        let lowered = leave_type.to_lowercase();
        LeaveCategory::iter()
            .filter(|c| lowered.contains(&c.to_string()))
            .collect()
    }

    /// First category in precedence order that `leave_type` mentions.
    pub fn classify(leave_type: &str) -> Option<LeaveCategory> {
        Self::matching(leave_type).into_iter().next()
    }
}

/// Remaining days per category. Signed: repeated approvals are not
/// re-validated and can push a counter below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "annual": 14, "medical": 12, "compassionate": 3 }))]
pub struct LeaveBalance {
    pub annual: i32,
    pub medical: i32,
    pub compassionate: i32,
}

impl LeaveBalance {
    pub fn new(annual: i32, medical: i32, compassionate: i32) -> Self {
        Self {
            annual,
            medical,
            compassionate,
        }
    }

    pub fn remaining(&self, category: LeaveCategory) -> i32 {
        match category {
            LeaveCategory::Annual => self.annual,
            LeaveCategory::Medical => self.medical,
            LeaveCategory::Compassionate => self.compassionate,
        }
    }

    pub fn deduct(&mut self, category: LeaveCategory, days: i32) {
        let counter = match category {
            LeaveCategory::Annual => &mut self.annual,
            LeaveCategory::Medical => &mut self.medical,
            LeaveCategory::Compassionate => &mut self.compassionate,
        };
        *counter -= days;
    }
}
