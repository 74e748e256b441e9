use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
};
use ttics_core::Error;

/// Everything a handler can fail with that isn't shown back in the form.
#[derive(Debug)]
pub enum AppError {
	Feed(Error),
	Internal(anyhow::Error),
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response {
		let status = match &self {
			Self::Feed(Error::InvalidFeedKey(_)) => StatusCode::NOT_FOUND,
			Self::Feed(err) if err.is_user_facing() => StatusCode::BAD_REQUEST,
			Self::Feed(Error::Http(_) | Error::Json(_) | Error::MalformedLessonRecord { .. }) => {
				StatusCode::BAD_GATEWAY
			}
			Self::Feed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		};

		let message = match self {
			Self::Feed(err) => err.to_string(),
			Self::Internal(err) => format!("{err:#}"),
		};

		if status.is_server_error() {
			tracing::error!(%status, "{message}");
		} else {
			tracing::debug!(%status, "{message}");
		}

		(status, message).into_response()
	}
}

impl From<Error> for AppError {
	fn from(err: Error) -> Self {
		Self::Feed(err)
	}
}

impl From<anyhow::Error> for AppError {
	fn from(err: anyhow::Error) -> Self {
		Self::Internal(err)
	}
}

pub type AppResult<T> = Result<T, AppError>;
