use color_eyre::eyre::Result;
use doccal_api::config::ApiConfig;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    doccal_api::start_server(config).await?;

    Ok(())
}
