use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use sqlx::PgPool;

use crate::domain::{PageLimits, RecordParams};
use crate::error::RestResult;
use crate::repo::RecordRepo;

/// List one page of active or archived disclosure records.
///
/// `GET /records?search=&archive=<bool>&category=<code>&page=<int>&limit=<int>`
#[tracing::instrument(name = "List disclosure records", skip(pool, limits))]
#[get("")]
async fn list(
    pool: web::Data<PgPool>,
    limits: web::Data<PageLimits>,
    params: web::Query<RecordParams>,
) -> RestResult<impl Responder> {
    let query = params.into_inner().normalize(limits.get_ref());

    let page = RecordRepo::list(pool.get_ref(), &query).await?;

    tracing::debug!(
        total = page.pagination.total,
        returned = page.data.len(),
        "Listed records"
    );

    Ok(HttpResponse::Ok().json(page))
}

/// Record API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/records").service(list)
}
