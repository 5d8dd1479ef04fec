use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{manager, schema};

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create the users and planets tables")]
    Create,

    #[command(about = "Drop the users and planets tables")]
    Drop,

    #[command(about = "Insert the sample planets and the test user")]
    Seed,
}

pub async fn handle(cmd: DbCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let pool = manager::connect(&config.database).await?;

    let result = match cmd {
        DbCommands::Create => {
            schema::create(&pool).await?;
            output_success(&output_format, "Database created", Some(json!({ "url": config.database.url })))
        }
        DbCommands::Drop => {
            schema::drop(&pool).await?;
            output_success(&output_format, "Database dropped", Some(json!({ "url": config.database.url })))
        }
        DbCommands::Seed => {
            schema::create(&pool).await?;
            let report = schema::seed(&pool).await?;
            output_success(
                &output_format,
                &format!("Database seeded ({} planets, {} users)", report.planets, report.users),
                Some(json!({ "planets": report.planets, "users": report.users })),
            )
        }
    };

    manager::close(&pool).await;
    result
}
