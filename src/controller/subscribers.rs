use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use serde::{Deserialize, Serialize};

use sqlx::PgPool;

use crate::error::{RestError, RestResult};
use crate::model::{NewSubscriber, Subscriber, SubscriberCount};
use crate::repo::SubscriberRepo;

/// JSON body of a subscription request
#[derive(Debug, Deserialize)]
pub struct SubscribeBody {
    email: Option<String>,
}

impl TryFrom<SubscribeBody> for NewSubscriber {
    type Error = RestError;

    fn try_from(body: SubscribeBody) -> RestResult<Self> {
        let email = body
            .email
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(RestError::Validation)?;

        Ok(Self { email })
    }
}

#[derive(Debug, Serialize)]
struct Subscribed {
    success: bool,
    data: Subscriber,
}

#[tracing::instrument(name = "Count subscribers", skip(pool))]
#[get("")]
async fn count(pool: web::Data<PgPool>) -> RestResult<impl Responder> {
    let count = SubscriberRepo::count(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(SubscriberCount { count }))
}

/// Subscribe an email address.
/// Invalid input is rejected before the store is touched, duplicates come back as 409.
#[tracing::instrument(name = "Subscribe", skip(pool, body))]
#[post("")]
async fn subscribe(
    pool: web::Data<PgPool>,
    body: web::Json<SubscribeBody>,
) -> RestResult<impl Responder> {
    let new_subscriber: NewSubscriber = body.into_inner().try_into()?;

    let subscriber = SubscriberRepo::insert(pool.get_ref(), &new_subscriber).await?;

    tracing::info!(subscriber.id = %subscriber.id, "New subscriber");

    Ok(HttpResponse::Ok().json(Subscribed {
        success: true,
        data: subscriber,
    }))
}

/// Subscriber API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/subscribers").service(count).service(subscribe)
}
