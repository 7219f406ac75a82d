use sqlx::PgExecutor;

use crate::model::{NewSubscriber, Subscriber};

/// Repository for the subscribers table
pub struct SubscriberRepo;

impl SubscriberRepo {
    /// Insert a new subscriber.
    ///
    /// The unique index on `email` rejects duplicates, the resulting
    /// `sqlx::Error::Database` carries SQLSTATE `23505`.
    #[tracing::instrument(name = "Insert subscriber", skip(executor))]
    pub async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        new_subscriber: &NewSubscriber,
    ) -> sqlx::Result<Subscriber> {
        sqlx::query_as::<_, Subscriber>(
            "insert into subscribers(email) values ($1) returning id, email, created_at",
        )
        .bind(new_subscriber.email.as_ref())
        .fetch_one(executor)
        .await
    }

    #[tracing::instrument(name = "Count subscribers", skip(executor))]
    pub async fn count<'con>(executor: impl PgExecutor<'con>) -> sqlx::Result<i64> {
        let (count,) = sqlx::query_as::<_, (i64,)>("select count(*) from subscribers")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
