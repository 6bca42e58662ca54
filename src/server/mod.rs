// src/server/mod.rs
// =============================================================================
// HTTP surface of the service.
//
// One route, mounted under the service base path. Everything below the base
// path reaches the handler, which rejects what doesn't validate; paths outside
// it get actix's default 404.
// =============================================================================

mod handler;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;

use crate::config::Config;
use crate::service::SERVICE_BASE_PATH;

use handler::{redirect_to_base_path, service_handler};

/// Registers the service route, plus a redirect for the base path without
/// its trailing slash
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(SERVICE_BASE_PATH.trim_end_matches('/')).to(redirect_to_base_path),
    )
    .service(
        web::resource(format!("{}{{tail:.*}}", SERVICE_BASE_PATH)).to(service_handler),
    );
}

/// Serves until the process is stopped
pub async fn serve(config: Config, bind: &str, port: u16) -> std::io::Result<()> {
    let data = web::Data::new(config);

    info!("Listening on {}:{}{}", bind, port, SERVICE_BASE_PATH);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind((bind, port))?
    .run()
    .await
}
