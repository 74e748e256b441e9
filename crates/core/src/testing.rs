//! In-memory [`Upstream`] for tests.

use std::sync::Mutex;

use url::Url;

use crate::{upstream::Upstream, Result};

/// Canned responses keyed by a substring of the requested URL. Unknown URLs
/// answer with an empty body.
#[derive(Default)]
pub struct FakeUpstream {
	routes: Vec<(String, String)>,
	calls: Mutex<Vec<String>>,
}

impl FakeUpstream {
	#[must_use]
	pub fn with(mut self, needle: &str, body: &str) -> Self {
		self.routes.push((needle.to_string(), body.to_string()));
		self
	}

	/// Requested URLs, oldest first.
	#[must_use]
	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}
}

impl Upstream for FakeUpstream {
	async fn get(&self, url: Url) -> Result<String> {
		let url = url.to_string();
		let body = self
			.routes
			.iter()
			.find(|(needle, _)| url.contains(needle.as_str()))
			.map(|(_, body)| body.clone())
			.unwrap_or_default();

		self.calls.lock().unwrap().push(url);

		Ok(body)
	}
}
