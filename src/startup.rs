use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::web::Data;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::routes;
use crate::routes::contact::{RelayResult, FAILURE_MESSAGE};
use crate::webhook_client::WebhookClient;

pub fn run(
    listener: TcpListener,
    webhook_client: Option<WebhookClient>,
) -> Result<Server, std::io::Error> {
    let webhook_client = Data::new(webhook_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(routes::health_check::health_check))
            .route("/api/contact", web::post().to(routes::contact::contact))
            .app_data(json_config())
            .app_data(webhook_client.clone())
    })
        .listen(listener)?
        .run();
    Ok(server)
}

/// Malformed request bodies get the same soft-failure `{ok, message}`
/// contract as every other relay outcome instead of a plain-text 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::Ok()
            .json(RelayResult::failure(FAILURE_MESSAGE.to_string()));
        InternalError::from_response(err, response).into()
    })
}
