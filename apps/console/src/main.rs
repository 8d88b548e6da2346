use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sentiscope_api::{AppState, ModelState};
use sentiscope_console::client::ApiClient;
use sentiscope_console::i18n::Lang;
use sentiscope_console::repl::Repl;
use sentiscope_console::session::Session;

/// How long the startup probe waits for the endpoint to answer its health
/// route before handing over to the per-request connection-failure flow.
const READY_DEADLINE: Duration = Duration::from_secs(15);

#[derive(Parser, Debug)]
#[command(name = "sentiscope", about = "Interactive sentiment analysis console")]
struct Args {
    /// Attach to an already-running endpoint instead of hosting one in-process.
    #[arg(long)]
    endpoint: Option<String>,

    /// Display language: fr, en, es or ar.
    #[arg(long, default_value = "en")]
    lang: Lang,

    /// Port for the embedded endpoint.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the prompt stays clean.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = match &args.endpoint {
        Some(url) => ApiClient::new(url.clone())?,
        None => start_embedded_endpoint(args.port).await?,
    };

    // Explicit readiness signal instead of a fixed startup sleep. An
    // unreachable endpoint is reported, not fatal: the analyze action's
    // connection-failure message is the documented recovery path.
    match client.wait_ready(READY_DEADLINE).await {
        Some(health) if health.is_degraded() => {
            warn!("endpoint ready but the model is unavailable; fallback results will be served")
        }
        Some(_) => info!("endpoint ready at {}", client.base_url()),
        None => warn!(
            "endpoint at {} is not reachable yet; analyze actions will report the connection failure until it is",
            client.base_url()
        ),
    }

    let mut repl = Repl::new(client, Session::new(args.lang))?;
    repl.run().await
}

/// Hosts the classification endpoint as a supervised background task and
/// returns a client pointed at it. The model is loaded before the listener
/// starts accepting traffic: load-once, serve-many.
async fn start_embedded_endpoint(port: u16) -> Result<ApiClient> {
    let config = sentiscope_api::Config::from_env()?;

    let model_id = config.model_id.clone();
    info!("loading model '{model_id}'");
    let model = tokio::task::spawn_blocking(move || ModelState::load(&model_id)).await?;
    let state = AppState::new(model);

    let addr: SocketAddr = format!("{}:{}", config.host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = sentiscope_api::serve(listener, state).await {
            error!("embedded endpoint exited: {e:#}");
        }
    });

    ApiClient::new(format!("http://{local}"))
}
