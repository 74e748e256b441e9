//! Subscription form and calendar endpoints.

use std::sync::Arc;

use axum::{
	extract::{Path, State},
	http::header,
	response::{Html, IntoResponse, Response},
	routing::get,
	Form, Router,
};
use serde::Deserialize;
use tracing::info;
use ttics_core::{FeedConfig, FeedKey, Upstream};

use crate::{
	error::AppResult,
	page::{self, FormView},
	qr,
};

pub struct AppState<U> {
	pub config: Arc<FeedConfig>,
	pub upstream: Arc<U>,
}

impl<U> AppState<U> {
	pub fn new(config: FeedConfig, upstream: U) -> Self {
		Self {
			config: Arc::new(config),
			upstream: Arc::new(upstream),
		}
	}
}

impl<U> Clone for AppState<U> {
	fn clone(&self) -> Self {
		Self {
			config: Arc::clone(&self.config),
			upstream: Arc::clone(&self.upstream),
		}
	}
}

/// Routes mounted under the configured root path.
pub fn router<U>(state: AppState<U>) -> Router
where
	U: Upstream + Send + Sync + 'static,
{
	let root = state.config.root_path.clone();
	let mut router = Router::new()
		.route(&root, get(form_page::<U>).post(submit::<U>))
		.route(&format!("{root}{{feed_key}}/cal.ics"), get(calendar::<U>))
		.route(&format!("{root}health"), get(health));

	if root != "/" {
		router = router.route(root.trim_end_matches('/'), get(form_page::<U>).post(submit::<U>));
	}

	router.with_state(state)
}

#[derive(Deserialize)]
pub struct Submission {
	#[serde(default)]
	pub url: String,
}

/// GET / - empty form
async fn form_page<U>(State(state): State<AppState<U>>) -> Html<String> {
	Html(page::form(&state.config.root_path, &FormView::default()).into_string())
}

/// POST / - resolve a profile URL into a feed URL and QR code
async fn submit<U>(State(state): State<AppState<U>>, Form(submission): Form<Submission>) -> AppResult<Html<String>>
where
	U: Upstream + Send + Sync,
{
	let profile_url = submission.url.trim();
	let action = &state.config.root_path;

	let key = match ttics_core::subscribe(state.upstream.as_ref(), profile_url).await {
		Ok(key) => key,
		Err(err) if err.is_user_facing() => {
			let message = err.to_string();
			let view = FormView {
				url: &submission.url,
				error: Some(&message),
				..FormView::default()
			};

			return Ok(Html(page::form(action, &view).into_string()));
		}
		Err(err) => return Err(err.into()),
	};

	let feed_url = state.config.feed_url(&key.to_string());
	let image = qr::svg(&feed_url)?;

	info!(%key, "created subscription");

	let view = FormView {
		url: &submission.url,
		feed_url: Some(&feed_url),
		qr: Some(&image),
		error: None,
	};

	Ok(Html(page::form(action, &view).into_string()))
}

/// GET /{feed_key}/cal.ics - current calendar for the encoded identifiers
async fn calendar<U>(State(state): State<AppState<U>>, Path(feed_key): Path<String>) -> AppResult<Response>
where
	U: Upstream + Send + Sync,
{
	let key: FeedKey = feed_key.parse()?;
	let document = ttics_core::create_calendar(state.upstream.as_ref(), &state.config, &key).await?;

	info!(%key, events = document.entries.len(), "serving calendar");

	Ok((
		[
			(header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
			(header::CONTENT_DISPOSITION, "attachment; filename=calendar.ics"),
		],
		document.to_string(),
	)
		.into_response())
}

async fn health() -> &'static str {
	"ok"
}
