/// CLI argument parsing and help text

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Taka Server v{}", version);
    println!("Currency-to-speech HTTP server: amounts in, English words out");
    println!();
    println!("USAGE:");
    println!("    taka_server [OPTIONS] [AMOUNT]");
    println!();
    println!("OPTIONS:");
    println!("    --server              Start HTTP server mode");
    println!("    --port <PORT>         Server port (default: 3000)");
    println!("    --interactive         Read amounts from stdin (debounced, spoken)");
    println!("    --speak               Vocalize the one-shot result");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Start HTTP server on default port 3000");
    println!("    taka_server --server");
    println!();
    println!("    # Start server on custom port");
    println!("    taka_server --server --port 8080");
    println!();
    println!("    # One-shot: convert an amount to words");
    println!("    taka_server \"$1,234,567\"");
    println!();
    println!("    # Interactive mode: type amounts, hear the latest one");
    println!("    taka_server --interactive");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    POST   /convert      - Convert an amount to English words");
    println!("    GET    /voices       - List available voices");
    println!("    GET    /health       - Health check");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    SPEECH_COMMAND               - External synthesizer command (e.g. espeak-ng)");
    println!("    PREFERRED_VOICE              - Default voice id (default: bf_heather)");
    println!("    DEBOUNCE_MS                  - Interactive-mode debounce window (default: 500)");
    println!("    RATE_LIMIT_MODE              - Rate limit mode (auto/disabled)");
    println!("    RATE_LIMIT_PER_SECOND        - Requests per second per client (default: 10)");
    println!("    RATE_LIMIT_BURST_SIZE        - Burst size per client (default: 20)");
    println!("    REQUEST_TIMEOUT_SECONDS      - Request timeout in seconds (default: 60)");
    println!("    RUST_LOG                     - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can be configured via .env file in the working directory");
}

pub fn print_version() {
    println!("Taka Server v{}", env!("CARGO_PKG_VERSION"));
}
