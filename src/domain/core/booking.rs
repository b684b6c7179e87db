use std::sync::Arc;

use chrono::NaiveDate;
use derive_more::{Deref, Display, From};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use snowflake::SnowflakeIdGenerator;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};
use tracing::debug;

use crate::domain::Id;

use super::{
    FormError, MissingFields, Money, RequiredField, RoomId, Stay, StayQuote, SubmissionStatus,
};

/// Booking reference
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct BookingReference(u64);

impl Id for BookingReference {
    type Inner = u64;
}

/// Hands out booking references from a single snowflake generator.
///
/// The generator is not `Sync`, so it lives on its own task and callers
/// ask for the next reference over a channel.
pub struct ReferenceIssuer {
    _handle: Arc<JoinHandle<()>>,
    requests: mpsc::Sender<oneshot::Sender<u64>>,
}

pub static REFERENCE_ISSUER: Lazy<ReferenceIssuer> = Lazy::new(ReferenceIssuer::spawn);

impl ReferenceIssuer {
    fn spawn() -> Self {
        let mut generator = SnowflakeIdGenerator::new(1, 1);
        let (requests, mut inbox) = mpsc::channel::<oneshot::Sender<u64>>(64);
        let handle = tokio::spawn(async move {
            while let Some(reply) = inbox.recv().await {
                let reference = generator.generate() as u64;
                debug!("issued booking reference {}", reference);
                let _ = reply.send(reference);
            }
        });
        Self {
            _handle: Arc::new(handle),
            requests,
        }
    }

    pub async fn issue(&self) -> BookingReference {
        let (reply, receipt) = oneshot::channel::<u64>();
        self.requests.send(reply).await.unwrap();
        BookingReference::from(receipt.await.unwrap())
    }
}

/// Booking request form. All state is local to the page view; a submission
/// only flips the status and never leaves the process.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookingForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: u8,
    room: Option<RoomId>,
    special_requests: String,
    status: SubmissionStatus,
}

impl BookingForm {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        guests: u8,
        room: Option<RoomId>,
        special_requests: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone,
            check_in,
            check_out,
            guests,
            room,
            special_requests,
            status: SubmissionStatus::Editing,
        }
    }

    pub fn guest_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn guests(&self) -> u8 {
        self.guests
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn special_requests(&self) -> &str {
        &self.special_requests
    }

    pub fn stay(&self) -> Stay {
        Stay::new(self.check_in, self.check_out)
    }

    pub fn quote(&self, nightly_rate: Option<Money>) -> StayQuote {
        StayQuote::compute(&self.stay(), nightly_rate)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn missing_fields(&self) -> MissingFields {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push(RequiredField::FirstName);
        }
        if self.last_name.trim().is_empty() {
            missing.push(RequiredField::LastName);
        }
        if self.email.trim().is_empty() {
            missing.push(RequiredField::Email);
        }
        if self.check_in.is_none() {
            missing.push(RequiredField::CheckIn);
        }
        if self.check_out.is_none() {
            missing.push(RequiredField::CheckOut);
        }
        if self.room.is_none() {
            missing.push(RequiredField::Room);
        }
        MissingFields::new(missing)
    }

    /// Moves the form to `Submitted`; the transition fires at most once and
    /// only when every required field is filled in.
    pub fn submit(&mut self) -> Result<(), FormError> {
        self.status
            .validate_transition(&SubmissionStatus::Submitted)?;
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        self.status = SubmissionStatus::Submitted;
        Ok(())
    }
}
