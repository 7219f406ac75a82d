use std::net::TcpListener;

use anyhow::Context;

use foodwatch::app;
use foodwatch::settings::Settings;
use foodwatch::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber("info", std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load()?;

    let pool = settings.database.connect_lazy();
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!(addr = ?listener.local_addr()?, "Listening");

    app::run(listener, pool, settings.listing)?
        .await
        .context("Failed to run app")
}
