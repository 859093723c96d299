use crate::api::assistant::ChatRequest;
use crate::api::leave_request::LeaveDecision;
use crate::model::leave_balance::LeaveBalance;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::role::Role;
use crate::model::user::User;
use crate::models::{ChatReply, HealthStatus, LeaveStatistics, TeamRequest};
use crate::service::processor::LeaveSubmission;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Desk API",
        version = "0.1.0",
        description = r#"
## Leave Management

Employees check balances and request leave; managers approve or reject
their direct reports' pending requests.

### Key Features
- **Directory & balances**: annual, medical and compassionate leave per user
- **Leave requests**: submit, list newest first, approve/reject
- **Team view**: pending requests of a manager's direct reports
- **Assistant**: canned answers about balances and pending requests

All data lives in memory and is reset on restart.
"#,
    ),
    paths(
        crate::health,

        crate::api::user::get_user,
        crate::api::user::get_leave_balance,
        crate::api::user::get_statistics,

        crate::api::leave_request::list_leave_requests,
        crate::api::leave_request::create_leave_request,
        crate::api::leave_request::decide_leave_request,
        crate::api::leave_request::list_team_requests,

        crate::api::assistant::chat
    ),
    components(
        schemas(
            User,
            Role,
            LeaveBalance,
            LeaveRequest,
            LeaveStatus,
            LeaveSubmission,
            LeaveDecision,
            TeamRequest,
            LeaveStatistics,
            ChatRequest,
            ChatReply,
            HealthStatus
        )
    ),
    tags(
        (name = "User", description = "Directory, balance and statistics APIs"),
        (name = "Leave", description = "Leave request lifecycle APIs"),
        (name = "Assistant", description = "Canned leave assistant"),
        (name = "Health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;
