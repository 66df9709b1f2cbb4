//! # Assertion Functions
//!
//! One function per checked aspect of an HTTP response. Each call returns
//! exactly one named [`Outcome`] or raises exactly one
//! [`CheckError`](crate::error::CheckError) — never both, never neither.
//! Precondition violations (bad status code, zero time limit, non-object
//! schema) are errors; mismatches against the system under test are failing
//! outcomes.
//!
//! [`check_status`] additionally returns a [`RunDirective`]: when the actual
//! status is one of a fixed infrastructural-failure set and differs from the
//! expected status, further assertions are meaningless and the host runner
//! should drop its remaining queued work.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::error::CheckError;
use crate::kind;
use crate::response::Response;
use crate::util::format_duration;

/// One named pass/fail record for a single checked condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub name: String,
    pub passed: bool,
    pub detail: Option<String>,
}

impl Outcome {
    fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: None,
        }
    }

    fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: Some(detail.into()),
        }
    }
}

/// Whether the host runner should keep executing queued test items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunDirective {
    Continue,
    AbortRun,
}

/// The hundred-bucket family of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusBucket {
    /// Classify a code in [100, 599]; `None` outside that range.
    pub fn of(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(Self::Informational),
            200..=299 => Some(Self::Success),
            300..=399 => Some(Self::Redirection),
            400..=499 => Some(Self::ClientError),
            500..=599 => Some(Self::ServerError),
            _ => None,
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Informational => "Informational",
            Self::Success => "Success",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
        };
        f.write_str(label)
    }
}

/// Statuses that signal the infrastructure (not the endpoint under test) is
/// broken. 501 is deliberately absent.
const ABORT_STATUSES: [u16; 6] = [500, 502, 503, 504, 401, 403];

/// Assert the response status equals `expected`, labeling the outcome by the
/// expected code's bucket. An expected code outside [100, 599] is a `Range`
/// error. When the actual status is an unexpected infrastructural failure,
/// the returned directive is [`RunDirective::AbortRun`].
pub fn check_status(
    response: &Response,
    expected: u16,
) -> Result<(Outcome, RunDirective), CheckError> {
    let Some(bucket) = StatusBucket::of(expected) else {
        return Err(CheckError::out_of_range(
            "check_status",
            format!("status code must be in [100, 599] (got {expected})"),
        ));
    };
    let name = format!("[{bucket}] status code is {expected}");

    let actual = response.status;
    let outcome = if actual == expected {
        Outcome::pass(name)
    } else {
        Outcome::fail(name, format!("expected {expected}, got {actual}"))
    };
    let directive = if actual != expected && ABORT_STATUSES.contains(&actual) {
        RunDirective::AbortRun
    } else {
        RunDirective::Continue
    };
    Ok((outcome, directive))
}

/// Assert the Content-Type header includes `expected`.
pub fn check_content_type(response: &Response, expected: &str) -> Result<Outcome, CheckError> {
    if expected.is_empty() {
        return Err(CheckError::type_mismatch(
            "check_content_type",
            "a non-empty content type string",
        ));
    }
    let name = format!("content type includes {expected}");
    Ok(match response.header("Content-Type") {
        Some(actual) if actual.contains(expected) => Outcome::pass(name),
        Some(actual) => Outcome::fail(name, format!("got {actual}")),
        None => Outcome::fail(name, "no Content-Type header"),
    })
}

/// Assert the elapsed time is below `limit_ms`. A zero limit is a `Range`
/// error. The outcome name carries the human-readable limit.
pub fn check_time(response: &Response, limit_ms: u64) -> Result<Outcome, CheckError> {
    kind::require_positive_ms("check_time", limit_ms)?;
    let name = format!("response time is below {}", format_duration(limit_ms));
    Ok(if response.elapsed_ms < limit_ms {
        Outcome::pass(name)
    } else {
        Outcome::fail(name, format!("took {}", format_duration(response.elapsed_ms)))
    })
}

/// Validate the response body against a JSON Schema. The schema argument
/// must be object-kind and compile; a body that is not valid JSON or does
/// not conform is a failing outcome carrying the validator's message and
/// failing data path.
pub fn check_json_schema(response: &Response, schema: &Value) -> Result<Outcome, CheckError> {
    kind::require_object("check_json_schema", schema)?;
    let validator = jsonschema::validator_for(schema)
        .map_err(|_| CheckError::type_mismatch("check_json_schema", "a valid JSON Schema document"))?;

    let name = "body conforms to schema".to_string();
    let body = match response.body_json() {
        Ok(body) => body,
        Err(e) => return Ok(Outcome::fail(name, format!("body is not valid JSON: {e}"))),
    };
    Ok(match validator.validate(&body) {
        Ok(()) => Outcome::pass(name),
        Err(err) => Outcome::fail(name, format!("{err} (at `{}`)", err.instance_path)),
    })
}

/// Assert the Location header equals `expected`.
pub fn check_location(response: &Response, expected: &str) -> Result<Outcome, CheckError> {
    if expected.is_empty() {
        return Err(CheckError::type_mismatch(
            "check_location",
            "a non-empty location string",
        ));
    }
    let name = format!("location is {expected}");
    Ok(match response.header("Location") {
        Some(actual) if actual == expected => Outcome::pass(name),
        Some(actual) => Outcome::fail(name, format!("got {actual}")),
        None => Outcome::fail(name, "no Location header"),
    })
}
