#![warn(clippy::pedantic)]

use std::{fs::File, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ttics_core::{args::ConfigArgs, FeedKey, HttpUpstream};

#[derive(Parser)]
#[command(version, about = "HSE timetable to iCalendar")]
struct Args {
	#[command(flatten)]
	config: ConfigArgs,
	#[clap(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the feed key of a professor's profile page
	Resolve {
		#[clap(value_name = "PROFILE_URL")]
		url: String,
	},
	/// Write the current calendar for a feed key
	Calendar {
		#[clap(value_name = "FEED_KEY")]
		key: FeedKey,
		#[clap(short, long, value_hint = clap::ValueHint::FilePath)]
		output: Option<PathBuf>,
	},
}

#[tokio::main]
async fn main() -> Result<()> {
	dotenv::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
		)
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	let config = args.config.config();
	let upstream = HttpUpstream::new(&config)?;

	match args.command {
		Command::Resolve { url } => {
			let key = ttics_core::subscribe(&upstream, &url).await?;

			println!("{key}");
			println!("{}", config.feed_url(&key.to_string()));
		}
		Command::Calendar { key, output } => {
			let calendar = ttics_core::create_calendar(&upstream, &config, &key).await?;

			if let Some(output) = output {
				let mut file = File::create(&output)
					.with_context(|| format!("failed to create {}", output.display()))?;
				write!(&mut file, "{calendar}")?;
			} else {
				write!(&mut std::io::stdout(), "{calendar}")?;
			}
		}
	}

	Ok(())
}
