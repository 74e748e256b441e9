use std::time::Duration;

use chrono_tz::Tz;

pub const LESSONS_ENDPOINT: &str = "https://www.hse.ru/api/timetable/lessons";
pub const TZ: Tz = chrono_tz::Europe::Moscow;
/// Largest accepted half-width of the date window.
pub const MAX_WEEKS: u32 = 520;

/// Everything the feed pipeline and the web front end need to know about
/// where they run. Built once by the binaries and shared read-only.
#[derive(Debug, Clone)]
pub struct FeedConfig {
	/// Host the feed URLs are published under, e.g. `math-info.hse.ru`.
	pub public_host: String,
	pub public_scheme: String,
	/// Path prefix the service is mounted at. Always starts and ends with `/`.
	pub root_path: String,
	pub lessons_endpoint: String,
	/// Half-width of the date window around today.
	pub weeks: u32,
	pub timezone: Tz,
	pub timeout: Duration,
	pub calendar_name: String,
}

impl Default for FeedConfig {
	fn default() -> Self {
		Self {
			public_host: "math-info.hse.ru".to_string(),
			public_scheme: "https".to_string(),
			root_path: "/ttics/".to_string(),
			lessons_endpoint: LESSONS_ENDPOINT.to_string(),
			weeks: 10,
			timezone: TZ,
			timeout: Duration::from_secs(10),
			calendar_name: "HSE timetable".to_string(),
		}
	}
}

impl FeedConfig {
	/// Normalizes a user-supplied mount point to the `/prefix/` form.
	#[must_use]
	pub fn with_root_path(mut self, root: &str) -> Self {
		let trimmed = root.trim_matches('/');

		self.root_path = if trimmed.is_empty() {
			"/".to_string()
		} else {
			format!("/{trimmed}/")
		};

		self
	}

	/// Absolute URL a calendar client subscribes to.
	#[must_use]
	pub fn feed_url(&self, feed_key: &str) -> String {
		format!(
			"{}://{}{}{feed_key}/cal.ics",
			self.public_scheme, self.public_host, self.root_path
		)
	}
}
