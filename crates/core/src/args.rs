//! Command-line and environment settings shared by the binaries.

use std::time::Duration;

use chrono_tz::Tz;
use clap::Args;

use crate::{FeedConfig, LESSONS_ENDPOINT, MAX_WEEKS};

fn parse_timezone(s: &str) -> Result<Tz, String> {
	s.parse().map_err(|err| format!("unknown time zone {s}: {err}"))
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
	/// Host name feed URLs are published under
	#[arg(long, env = "TTICS_HOST", default_value = "math-info.hse.ru")]
	pub host: String,
	#[arg(long, env = "TTICS_SCHEME", default_value = "https")]
	pub scheme: String,
	/// Path prefix the service is mounted at
	#[arg(long, env = "TTICS_ROOT", default_value = "/ttics/")]
	pub root: String,
	#[arg(long, env = "TTICS_LESSONS_ENDPOINT", default_value = LESSONS_ENDPOINT)]
	pub lessons_endpoint: String,
	/// Weeks of lessons before and after today
	#[arg(
		long,
		env = "TTICS_WEEKS",
		default_value_t = 10,
		value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_WEEKS)),
	)]
	pub weeks: u32,
	#[arg(long, env = "TTICS_TIMEZONE", default_value = "Europe/Moscow", value_parser = parse_timezone)]
	pub timezone: Tz,
	/// Upstream request timeout in seconds
	#[arg(long, env = "TTICS_TIMEOUT", default_value_t = 10)]
	pub timeout: u64,
}

impl ConfigArgs {
	#[must_use]
	pub fn config(&self) -> FeedConfig {
		FeedConfig {
			public_host: self.host.clone(),
			public_scheme: self.scheme.clone(),
			lessons_endpoint: self.lessons_endpoint.clone(),
			weeks: self.weeks,
			timezone: self.timezone,
			timeout: Duration::from_secs(self.timeout),
			..FeedConfig::default()
		}
		.with_root_path(&self.root)
	}
}
