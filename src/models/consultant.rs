use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::consultant::{NewConsultant as DomainNewConsultant, RawConsultant};
use crate::domain::types::{ConsultantId, TypeConstraintError};
use crate::normalize::{ArrayField, encode_array_field};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::consultants)]
/// Diesel model for [`crate::domain::consultant::Consultant`].
///
/// `services` and `industries` hold JSON text and are only decoded through
/// [`RawConsultant`].
pub struct Consultant {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub short_description: Option<String>,
    pub website: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub region: String,
    pub services: Option<String>,
    pub industries: Option<String>,
    pub logo: Option<String>,
    pub hourly_rate: Option<i32>,
    pub project_rate_min: Option<i32>,
    pub project_rate_max: Option<i32>,
    pub show_rates: bool,
    pub is_approved: bool,
    pub is_featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::consultants)]
/// Insertable form of [`Consultant`].
pub struct NewConsultant<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub short_description: Option<&'a str>,
    pub website: Option<&'a str>,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub region: &'a str,
    pub services: String,
    pub industries: String,
    pub logo: Option<&'a str>,
    pub hourly_rate: Option<i32>,
    pub project_rate_min: Option<i32>,
    pub project_rate_max: Option<i32>,
    pub show_rates: bool,
    pub is_approved: bool,
    pub is_featured: bool,
}

impl TryFrom<Consultant> for RawConsultant {
    type Error = TypeConstraintError;

    fn try_from(consultant: Consultant) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ConsultantId::new(consultant.id)?,
            name: consultant.name,
            description: consultant.description,
            short_description: consultant.short_description,
            website: consultant.website,
            email: consultant.email,
            phone: consultant.phone,
            region: consultant.region,
            services: consultant.services.map(ArrayField::Raw),
            industries: consultant.industries.map(ArrayField::Raw),
            logo: consultant.logo,
            hourly_rate: consultant.hourly_rate,
            project_rate_min: consultant.project_rate_min,
            project_rate_max: consultant.project_rate_max,
            show_rates: consultant.show_rates,
            is_approved: consultant.is_approved,
            is_featured: consultant.is_featured,
            created_at: consultant.created_at,
            updated_at: consultant.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewConsultant> for NewConsultant<'a> {
    fn from(consultant: &'a DomainNewConsultant) -> Self {
        Self {
            name: consultant.name.as_str(),
            description: consultant.description.as_str(),
            short_description: consultant.short_description.as_deref(),
            website: consultant.website.as_deref(),
            email: consultant.email.as_str(),
            phone: consultant.phone.as_deref(),
            region: consultant.region.as_str(),
            services: encode_array_field(&consultant.services),
            industries: encode_array_field(&consultant.industries),
            logo: consultant.logo.as_deref(),
            hourly_rate: consultant.hourly_rate,
            project_rate_min: consultant.project_rate_min,
            project_rate_max: consultant.project_rate_max,
            show_rates: consultant.show_rates,
            is_approved: consultant.is_approved,
            is_featured: consultant.is_featured,
        }
    }
}
