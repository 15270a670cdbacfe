mod cli;
mod config;
mod error;
mod models;
mod rate_limit;
mod server;
mod services;
mod speech;
mod transcribe;

use config::constants::DEFAULT_PORT;
use rate_limit::{PerClientRateLimiter, RateLimitConfig};
use server::{create_router, AppState};
use services::Debouncer;
use speech::{speaker_from_env, SpeechSink, Voice};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use transcribe::convert_amount;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    // Initialize tracing for logging with environment variable support
    // Default log level is INFO for taka_server, WARN for dependencies
    // Override with RUST_LOG env var: RUST_LOG=debug for verbose output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("taka_server=info")),
        )
        .with_target(false) // Hide module path for cleaner output
        .compact() // Use compact formatting
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        cli::print_help();
        return Ok(());
    }

    if args.contains(&"--version".to_string()) || args.contains(&"-v".to_string()) {
        cli::print_version();
        return Ok(());
    }

    let server_mode = args.contains(&"--server".to_string());
    let interactive_mode = args.contains(&"--interactive".to_string());
    let port = args
        .iter()
        .position(|arg| arg == "--port")
        .and_then(|pos| args.get(pos + 1))
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let speaker = speaker_from_env();

    if server_mode {
        println!("Taka Server v{}", env!("CARGO_PKG_VERSION"));
        println!("Starting currency-to-speech HTTP server on port {}...", port);

        let rate_limiter = load_rate_limiter();
        let request_timeout = load_request_timeout();

        let addr = format!("0.0.0.0:{}", port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        println!("\nServer listening on http://{}", addr);
        println!("\nAvailable endpoints:");
        println!("  POST   /convert      - Convert an amount to English words");
        println!("  GET    /voices       - List available voices");
        println!("  GET    /health       - Health check");
        println!("\nRate Limiting:");
        if let Some(ref limiter) = rate_limiter {
            let config = limiter.config();
            println!("  Status: ENABLED (per client)");
            println!("  Rate: {} requests/second", config.per_second);
            println!("  Burst size: {} requests", config.burst_size);
            println!("  Configure: RATE_LIMIT_PER_SECOND, RATE_LIMIT_BURST_SIZE");
        } else {
            println!("  Status: DISABLED");
            println!("  Set RATE_LIMIT_MODE=auto to enable protection");
        }
        println!("\nRequest Timeout:");
        println!("  Timeout: {} seconds", request_timeout.as_secs());
        println!("  Configure: REQUEST_TIMEOUT_SECONDS (default: 60)");

        let state = AppState {
            speaker,
            rate_limiter,
            request_timeout,
        };

        let app = create_router(state);

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
    } else if interactive_mode {
        run_interactive(speaker).await?;
    } else {
        // One-shot mode: convert the argument and print the words
        let positionals = positional_args(&args[1..]);
        let amount = if positionals.is_empty() {
            "1234567".to_string()
        } else {
            positionals.join(" ")
        };

        let conversion = convert_amount(&amount)?;
        println!("{}", conversion.words);

        if args.contains(&"--speak".to_string()) {
            speaker.speak(&conversion.words, Voice::preferred()).await?;
            speaker.finish().await;
        }
    }

    Ok(())
}

/// Read amounts from stdin, debounce them, and speak the latest one.
///
/// Mirrors a type-as-you-go input field: each line resets the window, and
/// a new utterance cancels the one still playing.
async fn run_interactive(speaker: Arc<dyn SpeechSink>) -> error::Result<()> {
    let debouncer = Debouncer::from_env();
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    println!("Interactive mode: type an amount and press enter (ctrl-d to exit)");

    while let Some(line) = lines.next_line().await? {
        let speaker = speaker.clone();
        debouncer
            .submit(async move {
                match convert_amount(&line) {
                    Ok(conversion) => {
                        println!("{}", conversion.words);
                        if let Err(e) = speaker.speak(&conversion.words, Voice::preferred()).await {
                            tracing::warn!("Speech failed: {}", e);
                        }
                    }
                    Err(e) => eprintln!("error: {}", e),
                }
            })
            .await;
    }

    debouncer.flush().await;
    speaker.finish().await;
    Ok(())
}

/// Arguments that are not flags and not flag values
fn positional_args(args: &[String]) -> Vec<String> {
    let mut positionals = Vec::new();
    let mut skip_next = false;

    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--port" {
            skip_next = true;
            continue;
        }
        if arg.starts_with('-') && arg.len() > 1 && !arg.chars().skip(1).all(|c| c.is_ascii_digit())
        {
            continue;
        }
        positionals.push(arg.clone());
    }

    positionals
}

/// Load rate limit configuration from environment variables
fn load_rate_limiter() -> Option<PerClientRateLimiter> {
    let mode = env::var("RATE_LIMIT_MODE")
        .unwrap_or_else(|_| "auto".to_string())
        .to_lowercase();

    if mode == "disabled" {
        return None;
    }

    let per_second = env::var("RATE_LIMIT_PER_SECOND")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|v| *v > 0)
        .unwrap_or(10);

    let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|v| *v > 0)
        .unwrap_or(20);

    Some(PerClientRateLimiter::new(RateLimitConfig {
        per_second,
        burst_size,
    }))
}

/// Load request timeout configuration from environment variable
fn load_request_timeout() -> Duration {
    let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60); // Default to 60 seconds

    Duration::from_secs(timeout_seconds)
}
