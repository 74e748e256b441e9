use std::{fmt, str::FromStr};

use crate::{Error, Result};

const DELIMITER: char = '_';

/// Schedule identifier ("idx") the lessons API is keyed by. Always a
/// non-empty run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SectionId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for SectionId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
			return Err(Error::InvalidFeedKey(s.to_string()));
		}

		Ok(Self(s.to_string()))
	}
}

/// Self-describing subscription address: the identifiers joined by `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedKey(Vec<SectionId>);

impl FeedKey {
	/// # Errors
	///
	/// [`Error::InvalidFeedKey`] if `ids` is empty.
	pub fn new(ids: Vec<SectionId>) -> Result<Self> {
		if ids.is_empty() {
			return Err(Error::InvalidFeedKey(String::new()));
		}

		Ok(Self(ids))
	}

	#[must_use]
	pub fn ids(&self) -> &[SectionId] {
		&self.0
	}

	#[must_use]
	pub fn into_ids(self) -> Vec<SectionId> {
		self.0
	}
}

impl fmt::Display for FeedKey {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, id) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, "{DELIMITER}")?;
			}

			f.write_str(id.as_str())?;
		}

		Ok(())
	}
}

impl FromStr for FeedKey {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let ids = s
			.split(DELIMITER)
			.map(|part| part.parse().map_err(|_| Error::InvalidFeedKey(s.to_string())))
			.collect::<Result<Vec<SectionId>>>()?;

		Ok(Self(ids))
	}
}
