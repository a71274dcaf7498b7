use tracing::info;

use crate::api::{self, AppState};
use crate::cli::args::{Cli, Commands};
use crate::config::ServiceConfig;
use crate::database::{schema, Database};
use crate::error::Result;
use crate::query_engine::QueryEngine;

pub async fn run(cli: Cli) -> Result<()> {
    let config = ServiceConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind, database } => {
            let config = config.with_overrides(bind, database);
            config.check()?;
            let addr = config.socket_addr()?;

            info!("Database: {}", config.database.path.display());
            let database = Database::from_config(&config.database);
            database.verify_schema()?;

            api::serve(AppState::new(database), addr).await?;
        }

        Commands::Info { database } => {
            let config = config.with_overrides(None, database);
            config.check()?;

            println!("Analyzing database: {}", config.database.path.display());

            let database = Database::from_config(&config.database);
            let summary = database
                .with_connection(|conn| {
                    schema::verify(conn)?;
                    QueryEngine::new().dataset_summary(conn)
                })
                .await?;

            println!("\n{}", summary.detailed_summary());
        }
    }

    Ok(())
}
