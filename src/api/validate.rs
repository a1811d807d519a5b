use super::models::ApiResponse;
use crate::error::{Error, Result};
use serde_json::Value;

/// Fails with [`Error::Api`] when `body` carries an error payload.
///
/// The service reports failures as a top-level `error` field, either an
/// object with `message`/`code` or a bare string. Its gateway rejects bad
/// tokens with a body holding nothing but `message`; that counts too.
pub fn check_response_for_errors(body: &Value) -> Result<()> {
    let Some(object) = body.as_object() else {
        return Ok(());
    };

    match object.get("error") {
        None | Some(Value::Null) => {}
        Some(Value::String(message)) => return Err(api_error(message.clone(), None)),
        Some(Value::Object(error)) => {
            let message = match error.get("message") {
                Some(Value::String(message)) => message.clone(),
                _ => Value::Object(error.clone()).to_string(),
            };
            let code = error.get("code").and_then(Value::as_i64);
            return Err(api_error(message, code));
        }
        Some(other) => return Err(api_error(other.to_string(), None)),
    }

    if object.len() == 1 {
        if let Some(Value::String(message)) = object.get("message") {
            return Err(api_error(message.clone(), None));
        }
    }

    Ok(())
}

/// Checks a whole response and hands it back untouched when it is clean.
///
/// A non-2xx status with no recognisable error payload is still a rejection.
pub fn validate(response: ApiResponse) -> Result<ApiResponse> {
    check_response_for_errors(&response.json)?;

    if !response.is_success() {
        return Err(api_error(
            format!("HTTP {}", response.status),
            Some(i64::from(response.status)),
        ));
    }

    Ok(response)
}

fn api_error(message: String, code: Option<i64>) -> Error {
    Error::Api { message, code }
}
