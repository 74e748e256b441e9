use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const LESSON_TIME_FORMAT: &str = "%Y.%m.%d %H:%M";

/// Body of one lessons API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawTimetable {
	#[serde(rename = "Lessons", default)]
	pub lessons: Vec<LessonRecord>,
}

/// One class session as the lessons API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
	/// `YYYY.MM.DD`
	pub date: String,
	/// `HH:MM`
	pub begin_lesson: String,
	pub end_lesson: String,
	pub discipline: String,
	pub building: String,
	#[serde(default)]
	pub auditorium: Option<String>,
	#[serde(default)]
	pub kind_of_work: Option<String>,
	#[serde(default)]
	pub lecturer: Option<String>,
}

fn parse_time(date: &str, time: &str) -> Result<NaiveDateTime> {
	let value = format!("{date} {time}");

	NaiveDateTime::parse_from_str(&value, LESSON_TIME_FORMAT)
		.map_err(|source| Error::MalformedLessonRecord { value, source })
}

impl LessonRecord {
	/// # Errors
	///
	/// [`Error::MalformedLessonRecord`] if `date` and `beginLesson` don't form
	/// a valid timestamp.
	pub fn starts(&self) -> Result<NaiveDateTime> {
		parse_time(&self.date, &self.begin_lesson)
	}

	/// # Errors
	///
	/// [`Error::MalformedLessonRecord`] if `date` and `endLesson` don't form
	/// a valid timestamp.
	pub fn ends(&self) -> Result<NaiveDateTime> {
		parse_time(&self.date, &self.end_lesson)
	}

	/// Building and room. The separator is kept even without a room.
	#[must_use]
	pub fn location(&self) -> String {
		format!("{}, {}", self.building, self.auditorium.as_deref().unwrap_or_default())
	}

	#[must_use]
	pub fn description(&self) -> Option<String> {
		let lines = [self.kind_of_work.as_deref(), self.lecturer.as_deref()]
			.into_iter()
			.flatten()
			.filter(|s| !s.is_empty())
			.collect::<Vec<_>>();

		(!lines.is_empty()).then(|| lines.join("\n"))
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;

	fn lesson(date: &str, begin: &str, end: &str) -> LessonRecord {
		LessonRecord {
			date: date.to_string(),
			begin_lesson: begin.to_string(),
			end_lesson: end.to_string(),
			discipline: "Algebra".to_string(),
			building: "A".to_string(),
			auditorium: None,
			kind_of_work: None,
			lecturer: None,
		}
	}

	#[test]
	fn decodes_api_body() {
		let body = r#"{
			"Lessons": [{
				"date": "2024.09.02",
				"beginLesson": "09:10",
				"endLesson": "10:30",
				"discipline": "Calculus",
				"building": "Pokrovsky bd., 11",
				"auditorium": "R205",
				"kindOfWork": "Lecture",
				"stream": "ignored"
			}],
			"Count": 1
		}"#;

		let timetable: RawTimetable = serde_json::from_str(body).unwrap();
		let lesson = &timetable.lessons[0];

		assert_eq!(timetable.lessons.len(), 1);
		assert_eq!(lesson.begin_lesson, "09:10");
		assert_eq!(lesson.auditorium.as_deref(), Some("R205"));
		assert_eq!(lesson.kind_of_work.as_deref(), Some("Lecture"));
		assert_eq!(lesson.lecturer, None);
	}

	#[test]
	fn missing_lessons_array_is_empty() {
		let timetable: RawTimetable = serde_json::from_str("{}").unwrap();

		assert!(timetable.lessons.is_empty());
	}

	#[test]
	fn parses_lesson_times() {
		let lesson = lesson("2024.09.02", "09:10", "10:30");
		let day = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();

		assert_eq!(lesson.starts().unwrap(), day.and_hms_opt(9, 10, 0).unwrap());
		assert_eq!(lesson.ends().unwrap(), day.and_hms_opt(10, 30, 0).unwrap());
	}

	#[test]
	fn rejects_bad_times() {
		for (date, time) in [("2024-09-02", "09:10"), ("2024.13.02", "09:10"), ("2024.09.02", "25:00"), ("", "")] {
			let err = lesson(date, time, time).starts().unwrap_err();

			assert!(matches!(err, Error::MalformedLessonRecord { .. }), "{date} {time}");
		}
	}

	#[test]
	fn location_keeps_separator() {
		let mut lesson = lesson("2024.09.02", "09:10", "10:30");

		assert_eq!(lesson.location(), "A, ");

		lesson.auditorium = Some("101".to_string());

		assert_eq!(lesson.location(), "A, 101");
	}

	#[test]
	fn description_from_optional_fields() {
		let mut lesson = lesson("2024.09.02", "09:10", "10:30");

		assert_eq!(lesson.description(), None);

		lesson.kind_of_work = Some("Seminar".to_string());
		lesson.lecturer = Some("J. Doe".to_string());

		assert_eq!(lesson.description().as_deref(), Some("Seminar\nJ. Doe"));
	}
}
