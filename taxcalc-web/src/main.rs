use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taxcalc_core::TaxSchedule;
use taxcalc_web::routes::create_router;
use taxcalc_web::state::AppState;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Progressive income tax calculator web app.
///
/// Serves a form that takes two income sources, sums them, and renders the
/// tax owed under the built-in schedule.
#[derive(Debug, Parser)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep server output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let state = AppState::new(TaxSchedule::simplified());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cli.port)).await?;
    info!("tax calculator listening on http://localhost:{}", cli.port);
    axum::serve(listener, app).await?;

    Ok(())
}
