use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ConsultantId, TestimonialId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: TestimonialId,
    pub consultant_id: ConsultantId,
    pub author_name: String,
    pub content: String,
    pub rating: i32,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

/// Testimonial payload; the consultant it belongs to is given at insert time.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTestimonial {
    pub author_name: String,
    pub content: String,
    pub rating: i32,
    pub is_approved: bool,
}

impl NewTestimonial {
    /// Ratings are kept within one to five stars.
    #[must_use]
    pub fn new(author_name: String, content: String, rating: i32, is_approved: bool) -> Self {
        Self {
            author_name: author_name.trim().to_string(),
            content: content.trim().to_string(),
            rating: rating.clamp(1, 5),
            is_approved,
        }
    }
}

/// Aggregate of approved testimonial ratings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal place, `0` without testimonials.
    pub average_rating: f64,
    pub testimonial_count: usize,
}

impl RatingSummary {
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let (sum, count) = ratings
            .into_iter()
            .fold((0i64, 0usize), |(sum, count), r| (sum + i64::from(r), count + 1));
        if count == 0 {
            return Self::default();
        }
        let mean = sum as f64 / count as f64;
        Self {
            average_rating: (mean * 10.0).round() / 10.0,
            testimonial_count: count,
        }
    }
}
