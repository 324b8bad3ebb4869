use axum::http::StatusCode;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreakError {
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDateFormat { value: String },

    #[error("cannot complete {date}: it is after today ({today})")]
    FutureDate { date: NaiveDate, today: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("please enter a task title")]
    MissingTitle,

    #[error("please enter a habit name")]
    MissingName,

    #[error("unsupported habit frequency '{0}', only 'daily' is tracked")]
    UnsupportedFrequency(String),

    #[error("task {0} not found")]
    TaskNotFound(u64),

    #[error("habit {0} not found")]
    HabitNotFound(u64),

    #[error(transparent)]
    Streak(#[from] StreakError),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::TaskNotFound(_) | TrackerError::HabitNotFound(_) => {
                Self::not_found(err.to_string())
            }
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
