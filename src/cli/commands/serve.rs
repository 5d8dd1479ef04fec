use crate::config::AppConfig;

pub async fn handle(port: Option<u16>) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(port) = port {
        config.server.port = port;
    }
    crate::serve(config).await
}
