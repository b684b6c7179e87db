mod booking;
mod contact;
mod pages;
mod rooms;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use haven::domain::core::{Catalog, FormError, SubmissionStatus, CATALOG};

/// Shared state; the site only ever reads the fixed catalog.
#[derive(Clone, Copy)]
pub struct AppState {
    pub catalog: &'static Catalog,
}

pub fn router() -> Router {
    let state = AppState { catalog: &CATALOG };
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/rooms", get(rooms::list))
        .route("/rooms/:id", get(rooms::detail))
        .route("/booking", get(booking::options).post(booking::submit))
        .route("/contact", get(contact::info).post(contact::submit))
        .with_state(state)
}

/// Transient user-facing notice, rendered by the client as a toast.
#[derive(Clone, Debug, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
}

/// Application-level error returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Requested record does not exist.
    NotFound(String),
    /// A form submission failed validation; the form stays in `Editing`.
    Invalid(Notice),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

#[derive(Serialize)]
struct ValidationBody {
    status: SubmissionStatus,
    notice: Notice,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "not_found",
                    message,
                }),
            )
                .into_response(),
            Self::Invalid(notice) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    status: SubmissionStatus::Editing,
                    notice,
                }),
            )
                .into_response(),
        }
    }
}

impl From<FormError> for AppError {
    fn from(error: FormError) -> Self {
        let title = match error {
            FormError::MissingFields(_) => "Missing Information",
            FormError::AlreadySubmitted => "Already Submitted",
        };
        Self::Invalid(Notice {
            title,
            description: format!("{}.", error),
        })
    }
}
