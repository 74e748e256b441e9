use tracing::{debug, info};
use url::Url;

use crate::{lesson::RawTimetable, upstream::Upstream, DateWindow, FeedConfig, Result, SectionId};

/// Lessons API query for one identifier.
///
/// # Errors
///
/// Fails only if `endpoint` isn't a valid URL.
pub fn lessons_url(endpoint: &str, id: &SectionId, window: &DateWindow) -> Result<Url> {
	Ok(Url::parse_with_params(
		endpoint,
		[
			("fromdate", window.from_param().as_str()),
			("todate", window.to_param().as_str()),
			("lectureroid", id.as_str()),
			("receiverType", "1"),
		],
	)?)
}

/// Downloads one timetable per identifier, in order, one request at a time.
/// The first failure aborts the whole fetch.
///
/// # Errors
///
/// Transport errors and undecodable bodies.
pub async fn fetch<U: Upstream>(
	upstream: &U,
	endpoint: &str,
	ids: &[SectionId],
	window: &DateWindow,
) -> Result<Vec<RawTimetable>> {
	let mut timetables = Vec::with_capacity(ids.len());

	for id in ids {
		let body = upstream.get(lessons_url(endpoint, id, window)?).await?;
		let timetable: RawTimetable = serde_json::from_str(&body)?;

		debug!(%id, lessons = timetable.lessons.len(), "fetched timetable");
		timetables.push(timetable);
	}

	Ok(timetables)
}

/// [`fetch`] for the window around today.
///
/// # Errors
///
/// See [`fetch`].
pub async fn current_timetables<U: Upstream>(
	upstream: &U,
	config: &FeedConfig,
	ids: &[SectionId],
) -> Result<Vec<RawTimetable>> {
	let window = DateWindow::current(config.timezone, config.weeks)?;

	info!(from = %window.from, to = %window.to, ids = ids.len(), "fetching timetables");

	fetch(upstream, &config.lessons_endpoint, ids, &window).await
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;
	use crate::{testing::FakeUpstream, Error, LESSONS_ENDPOINT};

	fn window() -> DateWindow {
		DateWindow::around(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(), 10).unwrap()
	}

	fn id(raw: &str) -> SectionId {
		raw.parse().unwrap()
	}

	fn body(discipline: &str) -> String {
		format!(
			r#"{{"Lessons":[{{"date":"2024.09.02","beginLesson":"09:10","endLesson":"10:30","discipline":"{discipline}","building":"A"}}]}}"#
		)
	}

	#[test]
	fn builds_query() {
		let url = lessons_url(LESSONS_ENDPOINT, &id("123"), &window()).unwrap();

		assert_eq!(
			url.as_str(),
			"https://www.hse.ru/api/timetable/lessons?fromdate=2024.06.24&todate=2024.11.11&lectureroid=123&receiverType=1"
		);
	}

	#[tokio::test]
	async fn one_request_per_identifier_in_order() {
		let upstream = FakeUpstream::default()
			.with("lectureroid=456", &body("Topology"))
			.with("lectureroid=123", &body("Algebra"));

		let timetables = fetch(&upstream, LESSONS_ENDPOINT, &[id("123"), id("456")], &window())
			.await
			.unwrap();

		assert_eq!(timetables.len(), 2);
		assert_eq!(timetables[0].lessons[0].discipline, "Algebra");
		assert_eq!(timetables[1].lessons[0].discipline, "Topology");

		let calls = upstream.calls();

		assert_eq!(calls.len(), 2);
		assert!(calls[0].contains("lectureroid=123"));
		assert!(calls[1].contains("lectureroid=456"));
	}

	#[tokio::test]
	async fn bad_body_aborts_everything() {
		let upstream = FakeUpstream::default()
			.with("lectureroid=1&", "<html>maintenance</html>")
			.with("lectureroid=2&", &body("Algebra"));

		let err = fetch(&upstream, LESSONS_ENDPOINT, &[id("1"), id("2")], &window())
			.await
			.unwrap_err();

		assert!(matches!(err, Error::Json(_)));
		assert_eq!(upstream.calls().len(), 1);
	}

	#[tokio::test]
	async fn current_window_uses_config() {
		let upstream = FakeUpstream::default().with("lectureroid=5", r#"{"Lessons":[]}"#);
		let config = FeedConfig {
			lessons_endpoint: "http://127.0.0.1:9/lessons".to_string(),
			..FeedConfig::default()
		};

		let timetables = current_timetables(&upstream, &config, &[id("5")]).await.unwrap();

		assert!(timetables[0].lessons.is_empty());
		assert!(upstream.calls()[0].starts_with("http://127.0.0.1:9/lessons?fromdate="));
	}

	#[tokio::test]
	async fn oversized_window_fails_without_requests() {
		let upstream = FakeUpstream::default();
		let config = FeedConfig {
			weeks: u32::MAX,
			..FeedConfig::default()
		};

		let err = current_timetables(&upstream, &config, &[id("5")]).await.unwrap_err();

		assert!(matches!(err, Error::DateWindowOutOfRange(u32::MAX)));
		assert!(upstream.calls().is_empty());
	}
}
