use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::role::Role;

/// A directory entry. Seeded at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 1,
    "name": "John Doe",
    "email": "john.doe@uob.com",
    "role": "employee",
    "managerId": 3
}))]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<u64>,
}

impl User {
    pub fn reports_to(&self, manager_id: u64) -> bool {
        self.manager_id == Some(manager_id)
    }
}
