//! Contact form submissions: validation, rate limiting and an in-memory inbox

mod limiter;

pub use limiter::RateLimiter;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ContactConfig;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid");
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("{field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },

    #[error("Too many requests. Please try again later.")]
    RateLimited,

    #[error("Submission not found")]
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryType {
    #[serde(rename = "Business Partnership")]
    BusinessPartnership,
    #[serde(rename = "Executive Opportunity")]
    ExecutiveOpportunity,
    #[serde(rename = "Truffle Collaboration")]
    TruffleCollaboration,
    #[serde(rename = "Consulting Services")]
    ConsultingServices,
    #[serde(rename = "Other")]
    Other,
}

impl InquiryType {
    pub const ALL: [InquiryType; 5] = [
        InquiryType::BusinessPartnership,
        InquiryType::ExecutiveOpportunity,
        InquiryType::TruffleCollaboration,
        InquiryType::ConsultingServices,
        InquiryType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::BusinessPartnership => "Business Partnership",
            InquiryType::ExecutiveOpportunity => "Executive Opportunity",
            InquiryType::TruffleCollaboration => "Truffle Collaboration",
            InquiryType::ConsultingServices => "Consulting Services",
            InquiryType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Read,
    Responded,
}

/// A contact form as posted by a visitor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub inquiry_type: InquiryType,
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ContactError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(ContactError::Invalid {
            field,
            message: format!("must be between {} and {} characters", min, max),
        });
    }
    Ok(())
}

impl NewSubmission {
    pub fn validate(&self) -> Result<(), ContactError> {
        check_length("name", &self.name, 2, 100)?;
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ContactError::Invalid {
                field: "email",
                message: "not a valid email address".to_string(),
            });
        }
        check_length("subject", &self.subject, 5, 200)?;
        check_length("message", &self.message, 10, 2000)?;
        Ok(())
    }
}

/// A stored submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub inquiry_type: InquiryType,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Who sent a submission
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Validates, rate-limits and stores submissions for the life of the process
pub struct ContactInbox {
    limiter: RateLimiter,
    submissions: Vec<Submission>,
}

impl ContactInbox {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            limiter: RateLimiter::new(config.rate_limit_max, config.rate_limit_window()),
            submissions: Vec::new(),
        }
    }

    pub fn submit(
        &mut self,
        form: NewSubmission,
        client: ClientInfo,
    ) -> Result<Submission, ContactError> {
        self.submit_at(form, client, Instant::now())
    }

    fn submit_at(
        &mut self,
        form: NewSubmission,
        client: ClientInfo,
        now: Instant,
    ) -> Result<Submission, ContactError> {
        form.validate()?;

        let key = client.ip.clone().unwrap_or_else(|| "unknown".to_string());
        if !self.limiter.check_at(&key, now) {
            tracing::warn!("Rate limit exceeded for {}", key);
            return Err(ContactError::RateLimited);
        }

        let submission = Submission {
            id: Uuid::new_v4().to_string(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message.trim().to_string(),
            inquiry_type: form.inquiry_type,
            submitted_at: Utc::now(),
            status: SubmissionStatus::New,
            ip_address: client.ip,
            user_agent: client.user_agent,
        };

        tracing::info!("New contact submission from {}", submission.email);
        self.submissions.push(submission.clone());
        Ok(submission)
    }

    /// All submissions, newest first
    pub fn list(&self) -> Vec<Submission> {
        self.submissions.iter().rev().cloned().collect()
    }

    /// Pick up changed rate-limit settings
    pub fn reconfigure(&mut self, config: &ContactConfig) {
        self.limiter
            .reconfigure(config.rate_limit_max, config.rate_limit_window());
    }

    pub fn update_status(
        &mut self,
        id: &str,
        status: SubmissionStatus,
    ) -> Result<(), ContactError> {
        let submission = self
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ContactError::NotFound)?;
        submission.status = status;
        Ok(())
    }
}
