//! Finds the schedule identifiers behind a professor's profile page.
//!
//! HSE exposes no API for this. The timetable sub-page of a profile pushes
//! the identifiers into a client-side array from inline scripts
//! (`idx.push('123');`), so they are scraped from there.

use std::sync::LazyLock;

use regex::Regex;
use select::{document::Document, predicate::Name};
use tracing::{info, warn};
use url::Url;

use crate::{upstream::Upstream, Error, Result, SectionId};

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^http(s?)://(www\.)?hse\.ru/(org/persons/\d+|staff/\w+)").unwrap()
});

static IDX_PUSH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"idx\.push\('([0-9]+)'\);").unwrap());

/// Timetable sub-page of a profile. Anything after the person part of the
/// path (query, fragment, other tabs) is dropped.
///
/// # Errors
///
/// [`Error::InvalidProfileUrl`] if `profile_url` isn't an HSE person page.
pub fn timetable_url(profile_url: &str) -> Result<String> {
	let prefix = PROFILE_URL
		.find(profile_url)
		.ok_or_else(|| Error::InvalidProfileUrl(profile_url.to_string()))?;

	Ok(format!("{}/timetable", prefix.as_str()))
}

/// Every identifier pushed by the page's scripts, in document order.
#[must_use]
pub fn extract_identifiers(html: &str) -> Vec<SectionId> {
	let document = Document::from(html);

	document
		.find(Name("script"))
		.flat_map(|script| {
			let text = script.text();

			IDX_PUSH
				.captures_iter(&text)
				.filter_map(|captures| captures[1].parse().ok())
				.collect::<Vec<_>>()
		})
		.collect()
}

/// Resolves a profile URL into its schedule identifiers. Never returns an
/// empty list.
///
/// # Errors
///
/// [`Error::InvalidProfileUrl`] before any request is made,
/// [`Error::IdentifierNotFound`] if the page carries no identifiers, or the
/// transport error of the page fetch.
pub async fn resolve<U: Upstream>(upstream: &U, profile_url: &str) -> Result<Vec<SectionId>> {
	let timetable = timetable_url(profile_url)?;
	let page = upstream.get(Url::parse(&timetable)?).await?;
	let ids = extract_identifiers(&page);

	if ids.is_empty() {
		warn!(url = %timetable, "no identifiers on timetable page");
		return Err(Error::IdentifierNotFound(timetable));
	}

	info!(url = %timetable, count = ids.len(), "resolved identifiers");

	Ok(ids)
}
