use clap::Parser;

use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Address to serve on
    #[clap(long, default_value = "0.0.0.0:8080")]
    addr: String,
    /// Database path, falls back to the DB_PATH env var
    #[clap(long)]
    db_path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load .env before tracing so a LOG_LEVEL set there takes effect
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let path = match cli.db_path {
        Some(path) => path,
        None => dotenv::var("DB_PATH").expect("DB_PATH must be set"),
    };
    let pool = db::establish_connection(&path).await?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    run_server(pool, &cli.addr).await?;
    Ok(())
}
