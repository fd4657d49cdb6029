//! Request extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! The stock `Json` extractor answers 415/422 with a plain-text body; these
//! wrappers turn every binding failure into a 400 `{"error": ...}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
