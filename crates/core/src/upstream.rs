use std::future::Future;

use tracing::debug;
use url::Url;

use crate::{FeedConfig, Result};

/// Read-only access to the institution's web pages and API.
pub trait Upstream {
	/// GETs `url` and returns the body. Non-success statuses are errors.
	fn get(&self, url: Url) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpUpstream {
	client: reqwest::Client,
}

impl HttpUpstream {
	/// # Errors
	///
	/// Fails if the TLS backend cannot be initialised.
	pub fn new(config: &FeedConfig) -> Result<Self> {
		let client = reqwest::Client::builder()
			.user_agent(concat!("ttics/", env!("CARGO_PKG_VERSION")))
			.timeout(config.timeout)
			.build()?;

		Ok(Self { client })
	}
}

impl Upstream for HttpUpstream {
	async fn get(&self, url: Url) -> Result<String> {
		debug!(%url, "fetching");

		let response = self.client.get(url).send().await?.error_for_status()?;

		Ok(response.text().await?)
	}
}
