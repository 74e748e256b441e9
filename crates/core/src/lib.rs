#![warn(clippy::pedantic)]

//! Turns an HSE professor's timetable into an iCalendar document.
//!
//! [`resolver`] scrapes the schedule identifiers off the profile's timetable
//! page once, [`fetcher`] pulls the lessons for each identifier and
//! [`render`] flattens them into a calendar.

#[cfg(feature = "cli")]
pub mod args;
pub mod config;
pub mod error;
pub mod feed_key;
pub mod fetcher;
pub mod lesson;
pub mod render;
pub mod resolver;
pub mod upstream;
pub mod window;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{FeedConfig, LESSONS_ENDPOINT, MAX_WEEKS, TZ};
pub use error::{Error, Result};
pub use feed_key::{FeedKey, SectionId};
pub use lesson::{LessonRecord, RawTimetable};
pub use render::{CalendarDocument, CalendarEntry};
pub use upstream::{HttpUpstream, Upstream};
pub use window::DateWindow;

/// Resolves a profile URL straight to its feed key.
///
/// # Errors
///
/// See [`resolver::resolve`].
pub async fn subscribe<U: Upstream>(upstream: &U, profile_url: &str) -> Result<FeedKey> {
	let ids = resolver::resolve(upstream, profile_url).await?;

	FeedKey::new(ids)
}

/// Fetches and renders the current calendar for a feed key.
///
/// # Errors
///
/// Any fetch failure or malformed lesson aborts the whole document.
pub async fn create_calendar<U: Upstream>(
	upstream: &U,
	config: &FeedConfig,
	key: &FeedKey,
) -> Result<CalendarDocument> {
	let timetables = fetcher::current_timetables(upstream, config, key.ids()).await?;

	render::render(&config.calendar_name, &timetables)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::FakeUpstream;

	const PAGE: &str = "<script>idx.push('123');</script><div></div><script>idx.push('456');</script>";

	fn lessons(discipline: &str, auditorium: &str) -> String {
		format!(
			r#"{{"Lessons":[{{"date":"2024.09.02","beginLesson":"09:10","endLesson":"10:30","discipline":"{discipline}","building":"A","auditorium":"{auditorium}"}}]}}"#
		)
	}

	#[tokio::test]
	async fn staff_page_to_calendar() {
		let upstream = FakeUpstream::default()
			.with("https://www.hse.ru/staff/jdoe/timetable", PAGE)
			.with("lectureroid=123", &lessons("Algebra", "101"))
			.with("lectureroid=456", &lessons("Topology", "102"));

		let key = subscribe(&upstream, "https://www.hse.ru/staff/jdoe").await.unwrap();

		assert_eq!(key.to_string(), "123_456");

		let key: FeedKey = "123_456".parse().unwrap();
		let doc = create_calendar(&upstream, &FeedConfig::default(), &key).await.unwrap();

		assert_eq!(upstream.calls().len(), 3);
		assert_eq!(doc.name, "HSE timetable");
		assert_eq!(
			doc.entries.iter().map(|e| (e.title.as_str(), e.location.as_str())).collect::<Vec<_>>(),
			[("Algebra", "A, 101"), ("Topology", "A, 102")]
		);
	}

	#[tokio::test]
	async fn malformed_lesson_yields_no_document() {
		let upstream = FakeUpstream::default().with(
			"lectureroid=9",
			r#"{"Lessons":[{"date":"02.09.2024","beginLesson":"09:10","endLesson":"10:30","discipline":"X","building":"A"}]}"#,
		);

		let key: FeedKey = "9".parse().unwrap();
		let err = create_calendar(&upstream, &FeedConfig::default(), &key).await.unwrap_err();

		assert!(matches!(err, Error::MalformedLessonRecord { .. }));
	}
}
