//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                // Registered before `/{id}` so "new" is never taken as a slug.
                .service(
                    web::resource("/new")
                        .route(web::get().to(posts::new_form))
                        .route(web::post().to(posts::create)),
                )
                .route("/{id}", web::get().to(posts::show))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(posts::edit_form))
                        .route(web::post().to(posts::update)),
                )
                .route("/{id}/delete", web::post().to(posts::delete)),
        );
}
