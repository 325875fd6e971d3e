pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Config;
pub use db::{create_pool, DbPool, PoolSettings};
pub use state::AppState;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migrations", applied.len());
    Ok(())
}

/// Registers shared state, routes and API docs on an actix app.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state.order_queries)
            .app_data(state.order_mutations)
            .app_data(state.users)
            .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
            .service(
                web::scope("/orders")
                    .service(
                        web::resource("")
                            .route(web::get().to(handlers::orders::list_orders))
                            .default_service(web::to(handlers::method_not_allowed)),
                    )
                    .service(
                        web::resource("/pending")
                            .route(web::get().to(handlers::orders::list_pending_orders))
                            .default_service(web::to(handlers::method_not_allowed)),
                    )
                    .service(
                        web::resource("/user/{id}")
                            .route(web::get().to(handlers::orders::list_user_orders))
                            .default_service(web::to(handlers::method_not_allowed)),
                    )
                    .service(
                        web::resource("/{id}/items")
                            .route(web::get().to(handlers::orders::list_order_items))
                            .default_service(web::to(handlers::method_not_allowed)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::patch().to(handlers::orders::update_order_status))
                            .route(web::delete().to(handlers::orders::delete_order))
                            .default_service(web::to(handlers::method_not_allowed)),
                    ),
            )
            .service(
                web::scope("/users")
                    .service(
                        web::resource("")
                            .route(web::get().to(handlers::users::list_users))
                            .default_service(web::to(handlers::method_not_allowed)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::delete().to(handlers::users::delete_user))
                            .default_service(web::to(handlers::method_not_allowed)),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
            )
            .default_service(web::to(handlers::route_not_found));
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure(state.clone()))
    })
    .bind((host.to_string(), port))?
    .run())
}
