use serde::{Deserialize, Serialize};

use super::{FormError, MissingFields, RequiredField, SubmissionStatus};

/// Contact form with the same submission lifecycle as the booking form.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        subject: String,
        message: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            subject,
            message,
            status: SubmissionStatus::Editing,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn missing_fields(&self) -> MissingFields {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(RequiredField::Email);
        }
        if self.subject.trim().is_empty() {
            missing.push(RequiredField::Subject);
        }
        if self.message.trim().is_empty() {
            missing.push(RequiredField::Message);
        }
        MissingFields::new(missing)
    }

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
