use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Body extractor accepting either JSON or an urlencoded form, chosen by
/// `Content-Type`. Anything that is not a form is decoded as JSON, and an
/// empty body decodes as the empty object `{}`.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            return Ok(JsonOrForm(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(json_or_empty_object(&bytes))
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        Ok(JsonOrForm(value))
    }
}

fn json_or_empty_object(bytes: &[u8]) -> &[u8] {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_bodies_read_as_empty_object() {
        assert_eq!(json_or_empty_object(b""), b"{}");
        assert_eq!(json_or_empty_object(b" \n"), b"{}");
        assert_eq!(json_or_empty_object(br#"{"a":1}"#), br#"{"a":1}"#);
    }
}
