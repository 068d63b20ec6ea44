//! HTTP handlers

pub mod health;
pub mod pages;
pub mod api;

use crate::{AppError, AppResult};
use crate::models::Disease;

/// Map a path segment to its disease
fn resolve(slug: &str) -> AppResult<Disease> {
    Disease::from_slug(slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown prediction '{}'", slug)))
}
