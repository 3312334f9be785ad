use axum::extract::FromRequest;

use crate::error::Error;

/// `Json` extractor whose rejections go through [`Error`], so malformed
/// bodies get the same `{"error": ...}` 400 response as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);
