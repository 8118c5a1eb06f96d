//! CLI argument parsing and help text
use crate::config::constants::DEFAULT_PORT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Serve { port: Option<u16> },
    Convert { amounts: Vec<String> },
}

/// Turn the process arguments (without the program name) into a command
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(Command::Help);
    }
    if args.iter().any(|a| a == "-v" || a == "--version") {
        return Ok(Command::Version);
    }

    let mut server_mode = false;
    let mut port = None;
    let mut amounts = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--server" => server_mode = true,
            "--port" => {
                let value = iter.next().ok_or("--port requires a value")?;
                port = Some(
                    value
                        .parse::<u16>()
                        .map_err(|_| format!("invalid port '{}'", value))?,
                );
            }
            // Negative amounts are positional, not flags
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'", other));
            }
            other => amounts.push(other.to_string()),
        }
    }

    if server_mode {
        if !amounts.is_empty() {
            return Err("amounts cannot be combined with --server".to_string());
        }
        return Ok(Command::Serve { port });
    }

    if amounts.is_empty() {
        return Ok(Command::Help);
    }

    Ok(Command::Convert { amounts })
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("currency_text v{}", version);
    println!("Spell out dollar amounts in words");
    println!();
    println!("USAGE:");
    println!("    currency_text [OPTIONS] [AMOUNT...]");
    println!();
    println!("OPTIONS:");
    println!("    --server              Start HTTP server mode");
    println!("    --port <PORT>         Server port (default: {})", DEFAULT_PORT);
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert amounts on the command line");
    println!("    currency_text 1112.00 '$1,012' 0.01");
    println!();
    println!("    # Start server on custom port");
    println!("    currency_text --server --port 8080");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    POST   /convert      - Convert {{\"amount\": ...}} to words");
    println!("    GET    /convert      - Convert ?amount=... to words");
    println!("    GET    /health       - Health check");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PORT                             - Server port (default: {})", DEFAULT_PORT);
    println!("    CURRENCY_TEXT_MAGNITUDE          - Converter ceiling: billion or trillion (default: trillion)");
    println!("    CURRENCY_TEXT_MAX_AMOUNT         - Largest amount the server accepts (default: 10000)");
    println!("    REQUEST_TIMEOUT_SECONDS          - Request timeout in seconds (default: 30)");
    println!("    CURRENCY_TEXT_LOG_DIR            - Directory for access/application logs");
    println!("    RUST_LOG                         - Log level (error/warn/info/debug/trace)");
    println!();
    println!("Settings can also be placed in a .env file in the working directory.");
}

pub fn print_version() {
    println!("currency_text v{}", env!("CARGO_PKG_VERSION"));
}
