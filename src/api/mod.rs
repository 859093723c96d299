pub mod assistant;
pub mod leave_request;
pub mod user;
