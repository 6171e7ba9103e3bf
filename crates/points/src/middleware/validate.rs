use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;
use shared::{
    domain::requests::CreatePointsRequest,
    errors::{AppErrorHttp, ServiceError},
};

/// Payload types that decode themselves from parsed JSON, reporting every
/// violated constraint at once.
pub trait DecodeJson: Sized {
    fn decode_payload(value: &Value) -> Result<Self, Vec<String>>;
}

impl DecodeJson for CreatePointsRequest {
    fn decode_payload(value: &Value) -> Result<Self, Vec<String>> {
        Self::decode(value)
    }
}

/// Extractor that splits the 400 space the way the error contract wants it:
/// a body that is not JSON at all rejects as malformed input with the parse
/// diagnostic, while well-formed JSON violating the schema rejects as a
/// validation failure listing the violations.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DecodeJson + Send,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppErrorHttp(ServiceError::MalformedInput(e.to_string())))?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppErrorHttp(ServiceError::MalformedInput(e.to_string())))?;

        let payload =
            T::decode_payload(&value).map_err(|violations| AppErrorHttp(ServiceError::Validation(violations)))?;

        Ok(Self(payload))
    }
}
