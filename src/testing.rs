//! Fixtures shared by the HTTP tests.

/// Initialises the full route table over a freshly seeded store. The rate
/// limiter is left out: test requests carry no peer address.
macro_rules! init_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($crate::service::seeded_service()))
                .service($crate::health)
                .service($crate::routes::api_scope("/api")),
        )
        .await
    };
}

pub(crate) use init_app;
