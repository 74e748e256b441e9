#![warn(clippy::pedantic)]

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttics::{router, AppState};
use ttics_core::{args::ConfigArgs, HttpUpstream};

#[derive(Parser)]
#[command(version, about)]
struct Args {
	/// Address to listen on
	#[arg(long, env = "TTICS_LISTEN", default_value = "127.0.0.1:5000")]
	listen: SocketAddr,
	#[command(flatten)]
	config: ConfigArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
	dotenv::dotenv().ok();

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "ttics=debug,ttics_core=debug,tower_http=debug".into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	let args = Args::parse();
	let config = args.config.config();
	let upstream = HttpUpstream::new(&config).context("failed to build HTTP client")?;

	tracing::info!(root = %config.root_path, host = %config.public_host, "starting ttics");

	let app = router(AppState::new(config, upstream)).layer(TraceLayer::new_for_http());

	let listener = tokio::net::TcpListener::bind(args.listen)
		.await
		.with_context(|| format!("failed to bind {}", args.listen))?;

	tracing::info!("listening on http://{}", args.listen);

	axum::serve(listener, app).await?;

	Ok(())
}
