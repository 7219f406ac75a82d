use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use sqlx::PgPool;

use crate::error::RestResult;
use crate::repo::RecordRepo;

/// Full history of one brand across active and archived records.
///
/// The slug arrives percent-decoded and is matched exactly against the stored
/// brand. Unknown brands yield an empty history, not an error.
#[tracing::instrument(name = "Fetch brand history", skip(pool))]
#[get("/{slug}")]
async fn history(pool: web::Data<PgPool>, path: web::Path<String>) -> RestResult<impl Responder> {
    let history = RecordRepo::brand_history(pool.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(history))
}

/// Brand API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/brand").service(history)
}
