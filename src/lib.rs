//! Paginated, parameterized search queries and the pages that display them.
//!
//! [`query::QueryBuilder`] assembles a data query and a count query from
//! clause fragments and named parameters, [`services::search::search`] runs
//! both through a [`repository::SearchExecutor`], and [`pagination`] turns the
//! outcome into page links. The `server` feature adds an Actix-web
//! application serving a contacts search page on top of these pieces.

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod schema;
pub mod services;

#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::api::api_v1_contacts;
    use crate::routes::contacts::{
        create_contact, remove_contact, save_contact, show_contact, show_contacts,
    };

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(web::scope("/api").service(api_v1_contacts))
                .service(show_contacts)
                .service(create_contact)
                .service(show_contact)
                .service(save_contact)
                .service(remove_contact)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
