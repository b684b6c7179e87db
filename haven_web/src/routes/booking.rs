use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use haven::domain::core::{
    BookingForm, BookingReference, Money, RoomId, SubmissionStatus, REFERENCE_ISSUER,
};
use haven::domain::Entity;

use super::{AppError, AppState, Notice};

#[derive(Debug, Serialize)]
pub struct BookingOptions {
    rooms: Vec<RoomOption>,
}

#[derive(Debug, Serialize)]
pub struct RoomOption {
    id: RoomId,
    label: String,
    nightly_rate: Money,
}

/// `GET /booking` — the bookable rooms shown in the room type select.
pub async fn options(State(state): State<AppState>) -> Json<BookingOptions> {
    let rooms = state
        .catalog
        .rooms()
        .iter()
        .map(|room| RoomOption {
            id: room.id(),
            label: format!("{} - {}/night", room.name(), room.price()),
            nightly_rate: room.price(),
        })
        .collect();
    Json(BookingOptions { rooms })
}

fn default_guests() -> u8 {
    1
}

#[derive(Debug, Default, Deserialize)]
pub struct BookingSubmission {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    #[serde(default = "default_guests")]
    guests: u8,
    room: Option<u64>,
    #[serde(default)]
    special_requests: String,
}

#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    status: SubmissionStatus,
    reference: BookingReference,
    notice: Notice,
    summary: BookingSummary,
}

#[derive(Debug, Serialize)]
pub struct BookingSummary {
    name: String,
    email: String,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: u8,
    room: String,
    nights: u64,
    total: String,
}

/// `POST /booking` — validates the form, flips it to `Submitted` and
/// answers with the confirmation summary. Nothing is persisted.
pub async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<BookingSubmission>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let mut form = BookingForm::new(
        submission.first_name,
        submission.last_name,
        submission.email,
        submission.phone,
        submission.check_in,
        submission.check_out,
        submission.guests,
        submission.room.map(RoomId::from),
        submission.special_requests,
    );
    let room = match form.room() {
        Some(id) => match state.catalog.get(id) {
            Some(room) => Some(room),
            None => return Err(AppError::NotFound(format!("no room with id {}", id))),
        },
        None => None,
    };
    form.submit()?;
    let quote = form.quote(room.map(|room| room.price()));
    let reference = REFERENCE_ISSUER.issue().await;
    info!(
        "booking {} submitted: {} nights in {}",
        reference,
        quote.nights(),
        room.map(|room| room.name()).unwrap_or_default()
    );
    Ok(Json(BookingConfirmation {
        status: form.status(),
        reference,
        notice: Notice {
            title: "Booking Request Submitted",
            description: "We'll contact you shortly to confirm your reservation.".to_owned(),
        },
        summary: BookingSummary {
            name: form.guest_name(),
            email: form.email().to_owned(),
            check_in: form.stay().check_in(),
            check_out: form.stay().check_out(),
            guests: form.guests(),
            room: room.map(|room| room.name().to_owned()).unwrap_or_default(),
            nights: quote.nights(),
            total: quote.total().to_string(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use haven::domain::core::CATALOG;

    use super::*;

    fn state() -> AppState {
        AppState { catalog: &CATALOG }
    }

    fn filled() -> BookingSubmission {
        BookingSubmission {
            first_name: "Michael".to_owned(),
            last_name: "Chen".to_owned(),
            email: "michael@example.com".to_owned(),
            phone: String::new(),
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 4),
            guests: 2,
            room: Some(1),
            special_requests: "High floor if possible".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_submit_answers_with_summary_and_reference() {
        let Json(confirmation) = submit(State(state()), Json(filled())).await.unwrap();
        assert_eq!(confirmation.status, SubmissionStatus::Submitted);
        assert_eq!(confirmation.summary.nights, 3);
        assert_eq!(confirmation.summary.total, "$1,350");
        assert_eq!(confirmation.summary.room, "Ocean View Suite");
    }

    #[tokio::test]
    async fn test_submit_with_empty_email_is_rejected_with_a_notice() {
        let submission = BookingSubmission {
            email: String::new(),
            ..filled()
        };
        let error = submit(State(state()), Json(submission)).await.unwrap_err();
        match error {
            AppError::Invalid(notice) => {
                assert_eq!(notice.title, "Missing Information");
                assert!(notice.description.contains("email address"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_for_unknown_room_is_not_found() {
        let submission = BookingSubmission {
            room: Some(99),
            ..filled()
        };
        let error = submit(State(state()), Json(submission)).await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_options_carry_the_nightly_rate_label() {
        let Json(options) = options(State(state())).await;
        assert_eq!(options.rooms.len(), 6);
        assert_eq!(options.rooms[0].label, "Ocean View Suite - $450/night");
    }
}
