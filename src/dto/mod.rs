//! Request and response shapes of the public API.

pub mod case_studies;
pub mod companies;
pub mod consultants;
pub mod seo;

use serde::Serialize;

/// Value of the first `key` in a decoded query string; later repeats are ignored.
pub(crate) fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// `{ "error": ... }` body of the companies endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{ "message": ... }` body of the consultants endpoints.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}
