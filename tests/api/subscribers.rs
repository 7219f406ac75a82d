use reqwest::StatusCode;

use serde_json::Value;

use sqlx::PgPool;

use crate::helpers::{SubscribeBody, TestApp};

fn body(email: Option<&str>) -> SubscribeBody {
    SubscribeBody {
        email: email.map(Into::into),
    }
}

#[sqlx::test]
async fn subscribe_returns_the_stored_subscriber(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .subscribe(&body(Some("  Reader@Example.COM ")))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let json: Value = res.json().await.expect("Failed to decode body");
    assert_eq!(true, json["success"]);
    assert_eq!("reader@example.com", json["data"]["email"]);
    assert!(json["data"]["id"].is_string());
    assert!(json["data"]["created_at"].is_string());

    let (email,): (String,) = sqlx::query_as("select email from subscribers")
        .fetch_one(&pool)
        .await
        .expect("Failed to fetch inserted row");
    assert_eq!("reader@example.com", email);

    Ok(())
}

#[sqlx::test]
async fn duplicate_subscription_is_a_conflict(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let before = app.current_subscriber_count().await;

    let first = app
        .subscribe(&body(Some("reader@example.com")))
        .await
        .expect("Failed to execute request");
    let second = app
        .subscribe(&body(Some("READER@example.com ")))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, first.status());
    assert_eq!(StatusCode::CONFLICT, second.status());
    let json: Value = second.json().await.expect("Failed to decode body");
    assert!(json["error"].is_string());

    assert_eq!(before + 1, app.current_subscriber_count().await);

    Ok(())
}

#[sqlx::test]
async fn invalid_input_is_rejected_without_side_effects(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let test_cases = vec![
        ("missing email", body(None)),
        ("empty email", body(Some(""))),
        ("blank email", body(Some("   "))),
        ("email without @", body(Some("not-an-email"))),
    ];

    for (desc, payload) in test_cases {
        let res = app
            .subscribe(&payload)
            .await
            .expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "API did not reject payload with {}",
            desc
        );
        let json: Value = res.json().await.expect("Failed to decode body");
        assert!(json["error"].is_string(), "No error message for {}", desc);
    }

    assert_eq!(0, app.current_subscriber_count().await);

    Ok(())
}

#[sqlx::test]
async fn malformed_json_is_a_bad_request(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .request(reqwest::Method::POST, "subscribers")
        .header("Content-Type", "application/json")
        .body("{\"email\": ")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    Ok(())
}

#[sqlx::test]
async fn count_reflects_subscriptions(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    assert_eq!(0, app.current_subscriber_count().await);

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        app.subscribe(&body(Some(email)))
            .await
            .expect("Failed to execute request");
    }

    assert_eq!(3, app.current_subscriber_count().await);

    Ok(())
}

#[sqlx::test]
async fn store_failure_is_a_server_error_with_message(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    sqlx::query("drop table subscribers").execute(&pool).await?;

    let res = app
        .subscriber_count()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    let body: Value = res.json().await.expect("Failed to decode error body");
    assert!(body["error"].as_str().unwrap().contains("subscribers"));

    Ok(())
}
