use categorize_item::utils::{logger, validation::Validate};
use categorize_item::{Categorizer, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting categorize-item CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let request = cli.request();
    if let Err(e) = request.validate() {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入並驗證配置
    let config = match cli.categorizer_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let categorizer = Categorizer::from_config(&config)?;
    let result = categorizer.categorize(&request).await?;

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
