use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use sqlx::PgPool;

use tracing_actix_web::TracingLogger;

use crate::controller::{brands, records, subscribers};
use crate::domain::PageLimits;
use crate::error::{json_error_handler, query_error_handler};

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Run the application on a specified TCP listener
pub fn run(listener: TcpListener, pool: PgPool, limits: PageLimits) -> anyhow::Result<Server> {
    // Wrap application data
    let pool = web::Data::new(pool);
    let limits = web::Data::new(limits);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .app_data(limits.clone())
            // Malformed input surfaces as a JSON validation error
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(health_check)
            .service(records::scope())
            .service(brands::scope())
            .service(subscribers::scope())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
