use planetary_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    planetary_api::app::init_tracing();

    let config = AppConfig::from_env();
    planetary_api::serve(config).await
}
