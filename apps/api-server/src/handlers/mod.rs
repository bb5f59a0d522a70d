//! HTTP handlers and route configuration.

mod articles;
mod authors;
mod health;

use actix_web::{HttpRequest, web};

use crate::middleware::error::{json_config, query_config};

/// Configure all application routes.
///
/// Mutating routes rely on `BearerAuth` wrapping the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/authors")
                        .service(
                            web::resource("")
                                .route(web::get().to(authors::list))
                                .route(web::post().to(authors::create)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(authors::get))
                                .route(web::put().to(authors::update))
                                .route(web::delete().to(authors::delete)),
                        ),
                )
                .service(
                    web::scope("/articles")
                        .service(
                            web::resource("")
                                .route(web::get().to(articles::list))
                                .route(web::post().to(articles::create)),
                        )
                        // Registered before "/{id}" so it is not read as an id.
                        .service(
                            web::resource("/category")
                                .route(web::get().to(articles::by_category)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(articles::get))
                                .route(web::put().to(articles::update))
                                .route(web::delete().to(articles::delete)),
                        ),
                ),
        );
}

/// Absolute URL of `path` on the host the request was addressed to.
fn location(req: &HttpRequest, path: &str) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), path)
}
