use anyhow::Context;
use lambda_runtime::{Error, service_fn};
use recipebot::RecipeBot;
use recipebot::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    recipebot::setup_logging();

    let config = AppConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;

    // Clients are built once per cold start and shared by every invocation.
    let bot = RecipeBot::from_config(&config).await;
    let bot = &bot;

    lambda_runtime::run(service_fn(move |event| async move {
        recipebot::api::handler(bot, event).await
    }))
    .await
}
