/// Response validation: reject empty bodies and GraphQL error payloads.
use std::collections::HashMap;

use serde_json::error::Category;
use serde_json::value::RawValue;

use super::errors::IntrospectError;

const ERRORS_KEY: &str = "\"errors\"";

/// Top-level members of a JSON object, left unparsed.
type Members<'a> = HashMap<String, &'a RawValue>;

/// Check that `body` is a usable schema payload.
///
/// JSON bodies fail only when they carry a non-null top-level `errors` member.
/// Bodies that are not JSON at all fall back to a textual search for
/// `"errors"`.
///
/// # Errors
///
/// Returns `IntrospectError::EmptyResponse` for a blank body and
/// `IntrospectError::GraphQL` with the `"errors":...` excerpt otherwise.
pub fn validate(body: &str) -> Result<(), IntrospectError> {
    if body.trim().is_empty() {
        return Err(IntrospectError::EmptyResponse);
    }

    match serde_json::from_str::<Members<'_>>(body) {
        Ok(members) => match members.get("errors") {
            Some(errors) if errors.get() != "null" => Err(IntrospectError::GraphQL {
                errors: format!("{ERRORS_KEY}:{}", errors.get()),
            }),
            _ => Ok(()),
        },
        // Valid JSON, just not an object.
        Err(e) if e.classify() == Category::Data => Ok(()),
        Err(_) => validate_text(body),
    }
}

fn validate_text(body: &str) -> Result<(), IntrospectError> {
    let Some(start) = body.find(ERRORS_KEY) else {
        return Ok(());
    };
    let errors = errors_excerpt(&body[start + ERRORS_KEY.len()..])
        .map_or_else(|| body.trim().to_owned(), |array| format!("{ERRORS_KEY}:{array}"));
    Err(IntrospectError::GraphQL { errors })
}

/// Given the text right after `"errors"`, return the bracket-balanced `[...]`
/// that follows `:`.
fn errors_excerpt(rest: &str) -> Option<&str> {
    let rest = rest.trim_start().strip_prefix(':')?.trim_start();
    if !rest.starts_with('[') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' | '{' => depth += 1,
            ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&rest[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_payload_passes() {
        let body = r#"{"data":{"__schema":{"queryType":{"name":"Query"}}}}"#;
        assert!(validate(body).is_ok());
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(matches!(validate(""), Err(IntrospectError::EmptyResponse)));
        assert!(matches!(
            validate(" \r\n"),
            Err(IntrospectError::EmptyResponse)
        ));
    }

    #[test]
    fn test_errors_member_reported_verbatim() {
        let body = r#"{"errors":[{"message":"introspection disabled"}]}"#;
        let err = validate(body).unwrap_err();
        assert!(matches!(err, IntrospectError::GraphQL { .. }));
        assert!(
            err.to_string()
                .contains(r#"errors":[{"message":"introspection disabled"}]"#)
        );
    }

    #[test]
    fn test_errors_alongside_data_rejected() {
        let body = r#"{"data":null,"errors":[{"message":"boom","locations":[{"line":1,"column":2}]}]}"#;
        let IntrospectError::GraphQL { errors } = validate(body).unwrap_err() else {
            panic!("expected GraphQL error");
        };
        assert_eq!(
            errors,
            r#""errors":[{"message":"boom","locations":[{"line":1,"column":2}]}]"#
        );
    }

    #[test]
    fn test_null_errors_member_passes() {
        assert!(validate(r#"{"data":{"__schema":{}},"errors":null}"#).is_ok());
    }

    #[test]
    fn test_nested_errors_text_is_not_an_error() {
        let body = r#"{"data":{"__schema":{"types":[{"name":"Payload","description":"has \"errors\" field","fields":[{"name":"errors"}]}]}}}"#;
        assert!(validate(body).is_ok());
    }

    #[test]
    fn test_non_object_json_passes() {
        assert!(validate("[1,2,3]").is_ok());
        assert!(validate(r#"[{"errors":[]}]"#).is_ok());
    }

    #[test]
    fn test_non_json_without_marker_passes() {
        assert!(validate("<html>502 Bad Gateway</html>").is_ok());
    }

    #[test]
    fn test_non_json_with_marker_extracts_array() {
        let body = r#"garbage {"errors": [{"message":"a ] in text"}], "data": tru"#;
        let IntrospectError::GraphQL { errors } = validate(body).unwrap_err() else {
            panic!("expected GraphQL error");
        };
        assert_eq!(errors, r#""errors":[{"message":"a ] in text"}]"#);
    }

    #[test]
    fn test_non_json_with_bare_marker_reports_body() {
        let body = r#"upstream said "errors" happened"#;
        let IntrospectError::GraphQL { errors } = validate(body).unwrap_err() else {
            panic!("expected GraphQL error");
        };
        assert_eq!(errors, body);
    }
}
