use crate::{
    api::{assistant, leave_request, user},
    config::Config,
    error::LeaveError,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, web};
use anyhow::{Context, Result};

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_rate_limit(requests_per_min: u32) -> Result<RateLimit> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("rate limit must allow at least one request per minute")
}

/// Decode failures answer with the same `{"error": ...}` body as domain errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected JSON payload");
        LeaveError::validation(err.to_string()).into()
    })
}

/// Ids that do not parse answer 404 with the JSON error body.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected path parameter");
        LeaveError::InvalidPath(err.to_string()).into()
    })
}

pub fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .app_data(json_config())
        .app_data(path_config())
        // /user/{id}
        .service(web::resource("/user/{user_id}").route(web::get().to(user::get_user)))
        // /leave-balance/{id}
        .service(
            web::resource("/leave-balance/{user_id}")
                .route(web::get().to(user::get_leave_balance)),
        )
        // /leave-requests
        .service(
            web::resource("/leave-requests")
                .route(web::post().to(leave_request::create_leave_request)),
        )
        // /leave-requests/{id}: user id on GET, request id on PATCH
        .service(
            web::resource("/leave-requests/{id}")
                .route(web::get().to(leave_request::list_leave_requests))
                .route(web::patch().to(leave_request::decide_leave_request)),
        )
        // /team-requests/{manager_id}
        .service(
            web::resource("/team-requests/{manager_id}")
                .route(web::get().to(leave_request::list_team_requests)),
        )
        .service(web::resource("/ai-chat").route(web::post().to(assistant::chat)))
        .service(
            web::resource("/statistics/{user_id}").route(web::get().to(user::get_statistics)),
        )
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, rate_limit: &RateLimit) {
    cfg.service(api_scope(&config.api_prefix).wrap(Governor::new(rate_limit)));
}
