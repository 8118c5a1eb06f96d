use currency_text::cli::{self, Command};
use currency_text::config::AppConfig;
use currency_text::converter::CurrencyTextConverter;
use currency_text::error::{AppError, Result};
use currency_text::logging::{self, LogConfig};
use currency_text::server::{create_router, AppState};
use currency_text::services::amount_text::AmountTextService;
use currency_text::text_processing::amount_parsing::parse_amount;
use std::env;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match cli::parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Help => {
            cli::print_help();
            Ok(())
        }
        Command::Version => {
            cli::print_version();
            Ok(())
        }
        Command::Serve { port } => run_server(port).await,
        Command::Convert { amounts } => run_cli(&amounts),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Print the words for each amount; report every failure, then fail once
fn run_cli(amounts: &[String]) -> Result<()> {
    let log_config = LogConfig::from_env();
    logging::init_cli_logging(&log_config);

    let config = AppConfig::from_env()?;
    let converter = CurrencyTextConverter::new(config.magnitude_ceiling);

    let mut first_error = None;
    for input in amounts {
        let converted = parse_amount(input)
            .and_then(|amount| converter.convert(amount).map_err(AppError::from));
        match converted {
            Ok(text) => println!("{}", text),
            Err(e) => {
                tracing::debug!(input = %input, "Conversion failed");
                eprintln!("{}: {}", input, e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

async fn run_server(port_override: Option<u16>) -> Result<()> {
    let log_config = LogConfig::from_env();
    let _log_guards = logging::init_logging(&log_config)?;
    logging::log_platform_info();

    let mut config = AppConfig::from_env()?;
    if let Some(port) = port_override {
        config.port = port;
    }

    let converter = CurrencyTextConverter::new(config.magnitude_ceiling);
    let service = AmountTextService::new(converter, config.max_amount);

    tracing::info!(
        magnitude_ceiling = %config.magnitude_ceiling,
        max_amount = %config.max_amount,
        request_timeout_secs = config.request_timeout.as_secs(),
        "Converter configured"
    );

    let state = AppState {
        service: Arc::new(service),
        request_timeout: config.request_timeout,
        slow_request_threshold_ms: log_config.slow_request_threshold_ms,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("  POST   /convert   - Convert an amount to words");
    tracing::info!("  GET    /convert   - Convert ?amount=... to words");
    tracing::info!("  GET    /health    - Health check");

    let app = create_router(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
