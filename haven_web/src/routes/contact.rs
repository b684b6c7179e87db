use axum::Json;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use haven::domain::core::{ContactForm, EmailAddress, SubmissionStatus};

use super::{AppError, Notice};

/// Fixed URL of the embedded map on the contact page.
const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3024.2219901290355!2d-74.00369368400567!3d40.71312997933185!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c25a23e28c1191%3A0x49f75d3281df052a!2s150%20Park%20Row%2C%20New%20York%2C%20NY%2010007%2C%20USA!5e0!3m2!1sen!2sus!4v1625073982878!5m2!1sen!2sus";

static EMAILS: Lazy<Vec<EmailAddress>> = Lazy::new(|| {
    vec![
        "info@azurehaven.com".parse().expect("contact email"),
        "reservations@azurehaven.com".parse().expect("contact email"),
    ]
});

#[derive(Debug, Serialize)]
pub struct ContactPage {
    address: Vec<&'static str>,
    phones: Vec<&'static str>,
    emails: Vec<EmailAddress>,
    hours: Vec<&'static str>,
    map_embed_url: &'static str,
}

/// `GET /contact`
pub async fn info() -> Json<ContactPage> {
    Json(ContactPage {
        address: vec!["123 Ocean Drive", "Seaside City, SC 12345", "United States"],
        phones: vec!["+1 (555) 123-4567", "+1 (555) 123-4568"],
        emails: EMAILS.clone(),
        hours: vec![
            "24/7 Reception",
            "Concierge: 6 AM - 11 PM",
            "Spa: 8 AM - 10 PM",
        ],
        map_embed_url: MAP_EMBED_URL,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactConfirmation {
    status: SubmissionStatus,
    notice: Notice,
}

/// `POST /contact` — same lifecycle as the booking form; no message is
/// actually sent anywhere.
pub async fn submit(
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ContactConfirmation>, AppError> {
    let mut form = ContactForm::new(
        submission.name,
        submission.email,
        submission.phone,
        submission.subject,
        submission.message,
    );
    form.submit()?;
    info!("contact message submitted: {}", form.subject());
    Ok(Json(ContactConfirmation {
        status: form.status(),
        notice: Notice {
            title: "Message Sent",
            description: "Thank you for contacting us. We'll get back to you within 24 hours."
                .to_owned(),
        },
    }))
}
