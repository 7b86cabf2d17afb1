use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Caller identity for `/messages` and `/status`, resolved from the `user`
/// request header. Kept as an extractor so a real auth scheme can replace
/// the header lookup without touching handler signatures.
#[derive(Debug)]
pub struct Caller(pub String);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get("user") else {
            return Err(StatusCode::UNPROCESSABLE_ENTITY.into_response());
        };
        let name = value
            .to_str()
            .map_err(|_| StatusCode::UNPROCESSABLE_ENTITY.into_response())?;
        Ok(Self(name.to_owned()))
    }
}
