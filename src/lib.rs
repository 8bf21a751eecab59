#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod normalize;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod pricing;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

/// Registers the directory API and SEO endpoints on an Actix service config.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(Cors::permissive())
            .service(routes::api::list_companies)
            .service(routes::api::show_company)
            .service(routes::api::list_consultants)
            .service(routes::api::show_consultant)
            .service(routes::api::list_consultant_case_studies)
            .service(routes::api::show_case_study),
    )
    .service(routes::seo::robots)
    .service(routes::seo::sitemap);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool = establish_connection_pool(&server_config.database_url, server_config.pool_size)
        .map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving the directory on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
