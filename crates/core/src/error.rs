use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	#[error("{0} doesn't look like HSE professor personal page")]
	InvalidProfileUrl(String),

	#[error("idx not found on page {0}")]
	IdentifierNotFound(String),

	#[error("a window of {0} weeks around today is out of range")]
	DateWindowOutOfRange(u32),

	#[error("{0:?} is not a valid feed key")]
	InvalidFeedKey(String),

	#[error("malformed lesson time {value:?}: {source}")]
	MalformedLessonRecord {
		value: String,
		#[source]
		source: chrono::ParseError,
	},

	#[error("upstream request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("undecodable timetable: {0}")]
	Json(#[from] serde_json::Error),

	#[error("bad url: {0}")]
	Url(#[from] url::ParseError),
}

impl Error {
	/// Errors caused by what the user typed into the form, as opposed to
	/// upstream or internal failures.
	#[must_use]
	pub fn is_user_facing(&self) -> bool {
		matches!(self, Self::InvalidProfileUrl(_) | Self::IdentifierNotFound(_))
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
