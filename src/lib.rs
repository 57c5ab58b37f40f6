#[cfg(feature = "data")]
pub mod cache;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use std::path::Path;

    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::cache::PetTypeCache;
    use crate::db::{establish_connection_pool, run_migrations};
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes;

    /// Access log line written for every completed request.
    pub const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %Dms"#;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let applied = run_migrations(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to migrate database: {e}")))?;
        log::info!("Database ready, {applied} migration(s) applied");

        let repo = DieselRepository::new(pool);
        let pet_types_cache = web::Data::new(PetTypeCache::with_system_clock(
            server_config.pet_types_cache_ttl(),
        ));

        let static_dir = server_config
            .static_dir
            .clone()
            .filter(|dir| Path::new(dir).is_dir());
        if static_dir.is_none() {
            log::info!("No static frontend directory found, serving the API only");
        }

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            let app = App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::new(ACCESS_LOG_FORMAT))
                .service(web::scope("/api").configure(routes::configure))
                .app_data(web::Data::new(repo.clone()))
                .app_data(pet_types_cache.clone());

            match &static_dir {
                Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
                None => app,
            }
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
