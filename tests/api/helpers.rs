use std::net::TcpListener;

use chrono::{DateTime, NaiveDate, Utc};

use reqwest::{Client, Method, Response};

use serde::Serialize;

use sqlx::PgPool;

use foodwatch::app;
use foodwatch::domain::{Category, PageLimits};
use foodwatch::telemetry;

lazy_static::lazy_static! {
    static ref TRACING: () = {
        // Set `TEST_LOG` to see application logs while testing
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = telemetry::create_subscriber("debug", std::io::stdout);
            telemetry::set_subscriber(subscriber).expect("Failed to set up test telemetry");
        } else {
            let subscriber = telemetry::create_subscriber("debug", std::io::sink);
            telemetry::set_subscriber(subscriber).expect("Failed to set up test telemetry");
        }
    };
}

#[derive(Debug, Serialize)]
pub struct SubscribeBody {
    pub email: Option<String>,
}

pub struct TestApp {
    addr: String,

    pub client: Client,
}

impl TestApp {
    pub async fn spawn(pool: &PgPool) -> Self {
        lazy_static::initialize(&TRACING);

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let limits = PageLimits::default();

        let server =
            app::run(listener, pool.clone(), limits).expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        let client = Client::new();

        Self { addr, client }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health_check").send().await
    }

    pub async fn records<Q: Serialize + ?Sized>(&self, query: &Q) -> reqwest::Result<Response> {
        self.request(Method::GET, "records").query(query).send().await
    }

    /// `slug` goes into the path as given, callers encode it
    pub async fn brand(&self, slug: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("brand/{}", slug))
            .send()
            .await
    }

    pub async fn subscriber_count(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "subscribers").send().await
    }

    pub async fn subscribe(&self, body: &SubscribeBody) -> reqwest::Result<Response> {
        self.request(Method::POST, "subscribers")
            .json(body)
            .send()
            .await
    }

    /// Fetch the subscriber count, failing the test on any error
    pub async fn current_subscriber_count(&self) -> i64 {
        let body: serde_json::Value = self
            .subscriber_count()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to decode count");
        body["count"].as_i64().expect("Count missing from body")
    }
}

/// A disclosure record as the ingestion job would write it
#[derive(Debug, Clone)]
pub struct TestRecord {
    pub company_name: String,
    pub brand: Option<String>,
    pub product_name: String,
    pub city: Option<String>,
    pub category: Category,
    pub is_active: bool,
    pub announcement_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Default for TestRecord {
    fn default() -> Self {
        Self {
            company_name: "Örnek Gıda Ltd.".into(),
            brand: Some("Örnek".into()),
            product_name: "Tereyağı".into(),
            city: Some("Konya".into()),
            category: Category::Taklit1,
            is_active: true,
            announcement_date: Some(date("2024-01-01")),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }
}

impl TestRecord {
    pub async fn insert(&self, pool: &PgPool) {
        let removed_at = (!self.is_active).then_some(self.created_at);

        sqlx::query(
            "insert into foods(announcement_date, company_name, brand, product_name, violation, \
             batch_number, district, city, product_group, category, is_active, created_at, removed_at) \
             values ($1, $2, $3, $4, 'Taklit ürün', 'LOT-1', 'Merkez', $5, 'Süt ürünleri', $6, $7, $8, $9)",
        )
        .bind(self.announcement_date)
        .bind(&self.company_name)
        .bind(&self.brand)
        .bind(&self.product_name)
        .bind(&self.city)
        .bind(self.category.as_str())
        .bind(self.is_active)
        .bind(self.created_at)
        .bind(removed_at)
        .execute(pool)
        .await
        .expect("Failed to insert test record");
    }
}

pub fn date(value: &str) -> NaiveDate {
    value.parse().expect("Failed to parse test date")
}
