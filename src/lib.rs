//! # apicheck
//!
//! Reusable response assertions for API test scripts. Wraps the checks every
//! endpoint test repeats — status code, content type, elapsed time, JSON
//! Schema conformance, Location header — into named functions, plus a
//! JSON-schema builder for the paginated HAL envelope and small data
//! generators for request payloads.
//!
//! Checks are pure: the caller injects a [`Response`] snapshot and gets back
//! named [`Outcome`]s (and, from the status check, a continue/abort
//! [`RunDirective`]). Caller misuse raises a [`CheckError`]; a misbehaving
//! system under test produces a failing outcome instead.
//!
//! ```
//! use apicheck::{CommonChecks, Response, test_common};
//! use serde_json::json;
//!
//! let response = Response::new(200, r#"{"id": 7}"#)
//!     .with_header("Content-Type", "application/json")
//!     .with_elapsed(120);
//!
//! let schema = json!({ "type": "object", "required": ["id"] });
//! let report = test_common(
//!     &response,
//!     200,
//!     &CommonChecks { content_type: Some("application/json"), schema: Some(&schema), ..Default::default() },
//! )?;
//! assert!(report.passed());
//! # Ok::<(), apicheck::CheckError>(())
//! ```

pub mod checks;
pub mod error;
pub mod generate;
pub mod kind;
pub mod patterns;
pub mod response;
pub mod schema;
pub mod suite;
pub mod util;

pub use checks::{
    Outcome, RunDirective, StatusBucket, check_content_type, check_json_schema, check_location,
    check_status, check_time,
};
pub use error::CheckError;
pub use generate::{random_number, random_string};
pub use kind::{Kind, kind_of};
pub use patterns::{guid_pattern, iso_datetime_pattern, url_pattern};
pub use response::Response;
pub use schema::hal_schema;
pub use suite::{CommonChecks, Report, test_common, test_common_and_time};
pub use util::{format_duration, index_of_object};
