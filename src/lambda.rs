#[cfg(feature = "lambda")]
use categorize_item::adapters::gateway::{handle_event, GatewayEvent, GatewayResponse};
#[cfg(feature = "lambda")]
use categorize_item::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use categorize_item::{Categorizer, CategorizerConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
async fn function_handler(
    categorizer: Arc<Categorizer>,
    event: LambdaEvent<GatewayEvent>,
) -> Result<GatewayResponse, Error> {
    Ok(handle_event(&categorizer, &event.payload).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時建立一次，之後每個請求共用
    let config = CategorizerConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let categorizer = Arc::new(
        Categorizer::from_config(&config)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?,
    );
    tracing::info!("Starting categorize-item Lambda function");

    run(service_fn(move |event: LambdaEvent<GatewayEvent>| {
        let categorizer = Arc::clone(&categorizer);
        async move { function_handler(categorizer, event).await }
    }))
    .await
}
