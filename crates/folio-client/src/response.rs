use reqwest::StatusCode;
use serde_json::Value;

use crate::error::ApiError;

/// Map a raw response to its payload per the backend's envelope contract:
/// a 2xx JSON object carrying a `data` key yields that value, any other 2xx
/// JSON body is returned verbatim. Pure classification, no side effects.
pub(crate) async fn normalize(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    let body = response
        .text()
        .await
        .map_err(|err| ApiError::NetworkUnavailable(err.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::Business {
            status: status.as_u16(),
            message: extract_message(&body)
                .unwrap_or_else(|| format!("HTTP Error: {}", status.as_u16())),
        });
    }

    // DELETE endpoints answer with no content at all; that is not a
    // malformed body.
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    let value: Value =
        serde_json::from_str(&body).map_err(|err| ApiError::MalformedResponse(err.to_string()))?;
    Ok(unwrap_envelope(value))
}

pub(crate) fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            if let Some(data) = map.remove("data") {
                data
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn enveloped_body_unwraps_data() {
        let value = unwrap_envelope(json!({
            "success": true,
            "message": "ok",
            "data": {"id": "1"},
            "meta": {"total": 1}
        }));
        assert_eq!(value, json!({"id": "1"}));
    }

    #[test]
    fn raw_body_passes_through_unchanged() {
        assert_eq!(
            unwrap_envelope(json!({"id": "1", "title": "t"})),
            json!({"id": "1", "title": "t"})
        );
        assert_eq!(unwrap_envelope(json!([1, 2, 3])), json!([1, 2, 3]));
        assert_eq!(unwrap_envelope(json!("plain")), json!("plain"));
    }

    #[test]
    fn null_data_key_still_unwraps() {
        assert_eq!(
            unwrap_envelope(json!({"success": true, "data": null})),
            Value::Null
        );
    }

    #[test]
    fn message_extraction_tolerates_non_json() {
        assert_eq!(extract_message("<html>oops</html>"), None);
        assert_eq!(
            extract_message(r#"{"success":false,"message":"slot taken"}"#).as_deref(),
            Some("slot taken")
        );
        assert_eq!(extract_message(r#"{"message":42}"#), None);
    }
}
