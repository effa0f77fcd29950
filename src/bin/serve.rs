use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use categorize_item::adapters::http::{handle, HttpResponse};
use categorize_item::config::cli::load_settings;
use categorize_item::config::port_from_env;
use categorize_item::utils::{logger, validation::Validate};
use categorize_item::Categorizer;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "serve")]
#[command(about = "Local HTTP server for the categorize-item endpoint")]
struct Args {
    /// Port to listen on (defaults to PORT or 3000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let (config, file_port) = load_settings(args.config.as_deref())?;
    config.validate()?;

    let port = args.port.or(file_port).unwrap_or_else(port_from_env);

    let categorizer = Arc::new(Categorizer::from_config(&config)?);
    let app = Router::new()
        .route("/", any(categorize))
        .with_state(categorizer);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 listening on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

async fn categorize(
    State(categorizer): State<Arc<Categorizer>>,
    method: Method,
    body: Bytes,
) -> Response {
    let body = std::str::from_utf8(&body).ok();
    into_axum(handle(&categorizer, method.as_str(), body).await)
}

fn into_axum(response: HttpResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut out = (status, response.body).into_response();
    for (name, value) in response.headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            out.headers_mut().insert(name, value);
        }
    }
    out
}
