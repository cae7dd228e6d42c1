use std::time::Duration;

use clap::Parser;
use trivia_quiz::{api, names, quiz::SessionStore, services::QuizService, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Base URL of the Open Trivia Database API.
    #[arg(long, env, default_value = names::DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Seconds before a trivia API request is abandoned.
    #[arg(long, env, default_value_t = 10)]
    request_timeout_secs: u64,

    /// Mark cookies `Secure` (serve over HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,trivia_quiz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let client = api::Client::new(
        &args.api_base_url,
        Duration::from_secs(args.request_timeout_secs),
    )?;
    let quiz = QuizService::new(client, SessionStore::new());
    let app = trivia_quiz::router(AppState::new(quiz, args.secure_cookies));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, app).await?;

    Ok(())
}
