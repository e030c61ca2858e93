use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

/// JSON extractor that runs the request body through `validator` before the
/// handler sees it. Rejections carry the same `{status, message}` shape as
/// every other error response.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "status": "error",
                    "message": format!("Invalid JSON: {}", rejection.body_text()),
                });
                (rejection.status(), axum::Json(payload))
            })?;

        value.validate().map_err(|validation_errors| {
            let payload = json!({
                "status": "error",
                "message": format_validation_errors(&validation_errors),
                "details": detail_map(&validation_errors),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

fn detail_map(errors: &ValidationErrors) -> Value {
    let mut map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        map.insert(field.to_string(), json!(messages));
    }

    Value::Object(map)
}
