use chrono::{Days, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::{Error, Result};

const API_DATE_FORMAT: &str = "%Y.%m.%d";

/// Inclusive range of days the lessons API is queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
	pub from: NaiveDate,
	pub to: NaiveDate,
}

impl DateWindow {
	/// `weeks` on either side of `today`.
	///
	/// # Errors
	///
	/// [`Error::DateWindowOutOfRange`] if either end falls outside the
	/// representable calendar.
	pub fn around(today: NaiveDate, weeks: u32) -> Result<Self> {
		let span = Days::new(u64::from(weeks) * 7);

		match (today.checked_sub_days(span), today.checked_add_days(span)) {
			(Some(from), Some(to)) => Ok(Self { from, to }),
			_ => Err(Error::DateWindowOutOfRange(weeks)),
		}
	}

	/// Window around the current day as seen in `tz`.
	///
	/// # Errors
	///
	/// See [`DateWindow::around`].
	pub fn current(tz: Tz, weeks: u32) -> Result<Self> {
		Self::around(Utc::now().with_timezone(&tz).date_naive(), weeks)
	}

	#[must_use]
	pub fn from_param(&self) -> String {
		self.from.format(API_DATE_FORMAT).to_string()
	}

	#[must_use]
	pub fn to_param(&self) -> String {
		self.to.format(API_DATE_FORMAT).to_string()
	}
}
