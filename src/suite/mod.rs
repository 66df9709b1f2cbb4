//! # Composite Runners
//!
//! Bundles the individual checks into the two calls test scripts actually
//! make: [`test_common`] and [`test_common_and_time`]. The status check
//! always runs; the secondary checks (content type, schema, location) run
//! only when the actual status matches the expected one — when it doesn't,
//! the status outcome already tells the story and the secondary assertions
//! would only add noise.
//!
//! The caller receives a [`Report`] and is responsible for forwarding its
//! directive to the host runner; the library never touches host scheduling
//! state itself.

use serde::Serialize;
use serde_json::Value;

use crate::checks::{
    Outcome, RunDirective, check_content_type, check_json_schema, check_location, check_status,
    check_time,
};
use crate::error::CheckError;
use crate::kind;
use crate::response::Response;

/// The optional secondary checks of a common test run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonChecks<'a> {
    pub content_type: Option<&'a str>,
    pub schema: Option<&'a Value>,
    pub location: Option<&'a str>,
}

/// All outcomes of a composite run plus the continue/abort decision.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
    pub directive: RunDirective,
}

impl Report {
    /// True when every outcome in the report passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }
}

/// Run the status check, then the supplied secondary checks when the actual
/// status matches. Aborts early (skipping secondary checks) when the status
/// check flags an infrastructural failure.
pub fn test_common(
    response: &Response,
    expected_status: u16,
    extra: &CommonChecks<'_>,
) -> Result<Report, CheckError> {
    if let Some(schema) = extra.schema {
        kind::require_object("test_common", schema)?;
    }

    let (outcome, directive) = check_status(response, expected_status)?;
    let mut outcomes = vec![outcome];
    if directive == RunDirective::AbortRun {
        return Ok(Report { outcomes, directive });
    }

    if response.status == expected_status {
        if let Some(content_type) = extra.content_type {
            outcomes.push(check_content_type(response, content_type)?);
        }
        if let Some(schema) = extra.schema {
            outcomes.push(check_json_schema(response, schema)?);
        }
        if let Some(location) = extra.location {
            outcomes.push(check_location(response, location)?);
        }
    }

    Ok(Report { outcomes, directive })
}

/// [`test_common`] plus the elapsed-time check. The time limit is validated
/// up front so misuse raises before any outcome is produced.
pub fn test_common_and_time(
    response: &Response,
    expected_status: u16,
    limit_ms: u64,
    extra: &CommonChecks<'_>,
) -> Result<Report, CheckError> {
    kind::require_positive_ms("test_common_and_time", limit_ms)?;

    let mut report = test_common(response, expected_status, extra)?;
    if report.directive == RunDirective::Continue {
        report.outcomes.push(check_time(response, limit_ms)?);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok_response() -> Response {
        Response::new(200, r#"{"id": 7}"#)
            .with_header("Content-Type", "application/json")
            .with_elapsed(120)
    }

    #[test]
    fn status_only_when_no_extras_given() {
        let report = test_common(&ok_response(), 200, &CommonChecks::default()).unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.passed());
        assert_eq!(report.directive, RunDirective::Continue);
    }

    #[test]
    fn runs_all_supplied_checks_on_status_match() {
        let schema = json!({ "type": "object", "required": ["id"] });
        let response = ok_response().with_header("Location", "https://api.example.com/things/7");
        let extra = CommonChecks {
            content_type: Some("application/json"),
            schema: Some(&schema),
            location: Some("https://api.example.com/things/7"),
        };
        let report = test_common(&response, 200, &extra).unwrap();
        assert_eq!(report.outcomes.len(), 4);
        assert!(report.passed());
    }

    #[test]
    fn secondary_checks_are_gated_on_status_match() {
        let schema = json!({ "type": "object" });
        let extra = CommonChecks {
            content_type: Some("application/json"),
            schema: Some(&schema),
            ..Default::default()
        };
        // 404 instead of 200: only the status outcome is recorded
        let report = test_common(&Response::new(404, ""), 200, &extra).unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert!(!report.passed());
        assert_eq!(report.directive, RunDirective::Continue);
    }

    #[test]
    fn infrastructural_failure_aborts_and_skips_secondary_checks() {
        let extra = CommonChecks {
            content_type: Some("application/json"),
            ..Default::default()
        };
        let report = test_common(&Response::new(503, ""), 200, &extra).unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.directive, RunDirective::AbortRun);
    }

    #[test]
    fn time_check_is_appended_after_common_checks() {
        let report =
            test_common_and_time(&ok_response(), 200, 500, &CommonChecks::default()).unwrap();
        assert_eq!(report.outcomes.len(), 2);
        assert!(report.passed());
        assert_eq!(report.outcomes[1].name, "response time is below 500ms");
    }

    #[test]
    fn time_check_is_skipped_when_run_aborts() {
        let report =
            test_common_and_time(&Response::new(502, ""), 200, 500, &CommonChecks::default())
                .unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.directive, RunDirective::AbortRun);
    }

    #[test]
    fn zero_limit_raises_before_any_outcome() {
        let err = test_common_and_time(&ok_response(), 200, 0, &CommonChecks::default())
            .unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.function(), "test_common_and_time");
    }

    #[test]
    fn non_object_schema_raises_before_any_outcome() {
        let schema = json!("not a schema");
        let extra = CommonChecks {
            schema: Some(&schema),
            ..Default::default()
        };
        let err = test_common(&ok_response(), 200, &extra).unwrap_err();
        assert!(err.is_type());
        assert_eq!(err.function(), "test_common");
    }

    #[test]
    fn failing_secondary_check_still_reports_sibling_outcomes() {
        let response = ok_response().with_header("Location", "https://api.example.com/things/8");
        let extra = CommonChecks {
            content_type: Some("application/json"),
            location: Some("https://api.example.com/things/7"),
            ..Default::default()
        };
        let report = test_common(&response, 200, &extra).unwrap();
        assert_eq!(report.outcomes.len(), 3);
        assert!(report.outcomes[0].passed);
        assert!(report.outcomes[1].passed);
        assert!(!report.outcomes[2].passed);
        assert_eq!(report.directive, RunDirective::Continue);
    }
}
