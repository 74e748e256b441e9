use std::fmt;

use chrono::NaiveDateTime;
use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike};

use crate::{lesson::RawTimetable, LessonRecord, Result};

/// One calendar event, before it is turned into iCalendar text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
	/// Floating local time, as published by the timetable.
	pub start: NaiveDateTime,
	pub end: NaiveDateTime,
	pub title: String,
	pub location: String,
	pub description: Option<String>,
}

impl CalendarEntry {
	/// # Errors
	///
	/// [`crate::Error::MalformedLessonRecord`] on unparsable times.
	pub fn from_lesson(lesson: &LessonRecord) -> Result<Self> {
		Ok(Self {
			start: lesson.starts()?,
			end: lesson.ends()?,
			title: lesson.discipline.clone(),
			location: lesson.location(),
			description: lesson.description(),
		})
	}

	fn to_event(&self) -> Event {
		let mut event = Event::new();

		event
			.starts(CalendarDateTime::Floating(self.start))
			.ends(CalendarDateTime::Floating(self.end))
			.summary(&self.title)
			.location(&self.location);

		if let Some(description) = &self.description {
			event.description(description);
		}

		event.done()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDocument {
	pub name: String,
	pub entries: Vec<CalendarEntry>,
}

impl CalendarDocument {
	#[must_use]
	pub fn to_calendar(&self) -> Calendar {
		let mut calendar = Calendar::new();

		calendar.name(&self.name);

		for entry in &self.entries {
			calendar.push(entry.to_event());
		}

		calendar.done()
	}
}

impl fmt::Display for CalendarDocument {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.to_calendar())
	}
}

/// Flattens the timetables into one calendar: timetables in fetch order,
/// lessons in API order. Nothing is sorted or deduplicated, and a single bad
/// lesson fails the whole document.
///
/// # Errors
///
/// [`crate::Error::MalformedLessonRecord`] on the first unparsable lesson.
pub fn render(name: &str, timetables: &[RawTimetable]) -> Result<CalendarDocument> {
	let entries = timetables
		.iter()
		.flat_map(|timetable| &timetable.lessons)
		.map(CalendarEntry::from_lesson)
		.collect::<Result<Vec<_>>>()?;

	Ok(CalendarDocument {
		name: name.to_string(),
		entries,
	})
}
