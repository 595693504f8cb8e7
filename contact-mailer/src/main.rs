use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contact_mailer::config::MailConfig;
use contact_mailer::mailer::SmtpMailer;
use contact_mailer::routes::create_router;
use contact_mailer::state::AppState;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Portfolio site with a contact form that emails submissions onward.
///
/// Serves the static site and accepts submissions on `POST /send-message`,
/// forwarding each one by SMTP to the configured recipient.
#[derive(Debug, Parser)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Directory holding the static portfolio site.
    #[arg(long, default_value = "public")]
    assets_dir: String,

    /// SMTP relay host.
    #[arg(long, env = "SMTP_HOST", default_value = "smtp.gmail.com")]
    smtp_host: String,

    /// Account used to authenticate, also the `From` address.
    #[arg(long, env = "EMAIL_USER")]
    email_user: String,

    /// Password (or app password) for the account.
    #[arg(long, env = "EMAIL_PASSWORD")]
    email_password: String,

    /// Recipient for submissions. Defaults to the sending account.
    #[arg(long, env = "RECIPIENT_EMAIL")]
    recipient: Option<String>,
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

    let config = MailConfig::new(
        cli.smtp_host,
        cli.email_user,
        cli.email_password,
        cli.recipient,
    );
    let mailer = SmtpMailer::new(&config)?;
    mailer.probe().await;

    let state = AppState::new(Arc::new(mailer));
    let app = create_router(state, &cli.assets_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cli.port)).await?;
    info!("portfolio server listening on http://localhost:{}", cli.port);
    axum::serve(listener, app).await?;

    Ok(())
}
