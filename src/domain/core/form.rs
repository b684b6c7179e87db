use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Submission lifecycle shared by the site's forms.
///
/// `Submitted` is terminal for a page view; there is no edit-after-submit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitted,
}

impl SubmissionStatus {
    pub fn validate_transition(&self, next: &SubmissionStatus) -> Result<(), FormError> {
        match (self, next) {
            (SubmissionStatus::Editing, _) => Ok(()),
            (SubmissionStatus::Submitted, _) => Err(FormError::AlreadySubmitted),
        }
    }
}

/// Required field of a form, named the way the page labels it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RequiredField {
    #[display(fmt = "first name")]
    FirstName,
    #[display(fmt = "last name")]
    LastName,
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "email address")]
    Email,
    #[display(fmt = "check-in date")]
    CheckIn,
    #[display(fmt = "check-out date")]
    CheckOut,
    #[display(fmt = "room type")]
    Room,
    #[display(fmt = "subject")]
    Subject,
    #[display(fmt = "message")]
    Message,
}

/// The set of required fields a submission left empty.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MissingFields(Vec<RequiredField>);

impl MissingFields {
    pub fn new(fields: Vec<RequiredField>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[RequiredField] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(field, f)?;
        }
        Ok(())
    }
}

/// Form error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A submission was attempted with empty required fields
    #[error("Please fill in all required fields: {0}")]
    MissingFields(MissingFields),
    /// The form was already submitted in this page view
    #[error("This form has already been submitted")]
    AlreadySubmitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_to_submitted_is_the_only_transition() {
        let editing = SubmissionStatus::Editing;
        let submitted = SubmissionStatus::Submitted;
        assert!(editing.validate_transition(&submitted).is_ok());
        assert_eq!(
            submitted.validate_transition(&editing),
            Err(FormError::AlreadySubmitted)
        );
        assert_eq!(
            submitted.validate_transition(&submitted),
            Err(FormError::AlreadySubmitted)
        );
    }

    #[test]
    fn test_missing_fields_notice_lists_page_labels() {
        let error = FormError::MissingFields(MissingFields::new(vec![
            RequiredField::Email,
            RequiredField::CheckIn,
        ]));
        assert_eq!(
            error.to_string(),
            "Please fill in all required fields: email address, check-in date"
        );
    }
}
