use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::testimonial::{NewTestimonial as DomainNewTestimonial, Testimonial as DomainTestimonial};
use crate::domain::types::{ConsultantId, TestimonialId, TypeConstraintError};
use crate::models::consultant::Consultant;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::testimonials)]
#[diesel(belongs_to(Consultant, foreign_key = consultant_id))]
/// Diesel model for [`crate::domain::testimonial::Testimonial`].
pub struct Testimonial {
    pub id: i32,
    pub consultant_id: i32,
    pub author_name: String,
    pub content: String,
    pub rating: i32,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::testimonials)]
pub struct NewTestimonial<'a> {
    pub consultant_id: i32,
    pub author_name: &'a str,
    pub content: &'a str,
    pub rating: i32,
    pub is_approved: bool,
}

impl TryFrom<Testimonial> for DomainTestimonial {
    type Error = TypeConstraintError;

    fn try_from(testimonial: Testimonial) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TestimonialId::new(testimonial.id)?,
            consultant_id: ConsultantId::new(testimonial.consultant_id)?,
            author_name: testimonial.author_name,
            content: testimonial.content,
            rating: testimonial.rating,
            is_approved: testimonial.is_approved,
            created_at: testimonial.created_at,
        })
    }
}

impl<'a> NewTestimonial<'a> {
    pub fn from_domain(consultant_id: ConsultantId, testimonial: &'a DomainNewTestimonial) -> Self {
        Self {
            consultant_id: consultant_id.get(),
            author_name: testimonial.author_name.as_str(),
            content: testimonial.content.as_str(),
            rating: testimonial.rating,
            is_approved: testimonial.is_approved,
        }
    }
}
