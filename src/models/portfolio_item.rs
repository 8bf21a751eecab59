use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::showcase::{
    NewPortfolioItem as DomainNewPortfolioItem, PortfolioItem as DomainPortfolioItem,
};
use crate::domain::types::{ConsultantId, PortfolioItemId, TypeConstraintError};
use crate::models::consultant::Consultant;
use crate::normalize::{ArrayField, encode_array_field, parse_array_field};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::portfolio_items)]
#[diesel(belongs_to(Consultant, foreign_key = consultant_id))]
/// Diesel model for [`crate::domain::showcase::PortfolioItem`].
pub struct PortfolioItem {
    pub id: i32,
    pub consultant_id: i32,
    pub title: String,
    pub description: String,
    pub metrics: Option<String>,
    pub technologies: Option<String>,
    pub project_type: Option<String>,
    pub client_type: Option<String>,
    pub duration: Option<String>,
    pub display_order: i32,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::portfolio_items)]
pub struct NewPortfolioItem<'a> {
    pub consultant_id: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub metrics: Option<&'a str>,
    pub technologies: String,
    pub project_type: Option<&'a str>,
    pub client_type: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub display_order: i32,
    pub is_public: bool,
}

impl<'a> NewPortfolioItem<'a> {
    pub fn from_domain(consultant_id: ConsultantId, item: &'a DomainNewPortfolioItem) -> Self {
        Self {
            consultant_id: consultant_id.get(),
            title: item.title.as_str(),
            description: item.description.as_str(),
            metrics: item.metrics.as_deref(),
            technologies: encode_array_field(&item.technologies),
            project_type: item.project_type.as_deref(),
            client_type: item.client_type.as_deref(),
            duration: item.duration.as_deref(),
            display_order: item.display_order,
            is_public: item.is_public,
        }
    }
}

impl TryFrom<PortfolioItem> for DomainPortfolioItem {
    type Error = TypeConstraintError;

    fn try_from(item: PortfolioItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PortfolioItemId::new(item.id)?,
            consultant_id: ConsultantId::new(item.consultant_id)?,
            title: item.title,
            description: item.description,
            metrics: item.metrics,
            technologies: parse_array_field(item.technologies.map(ArrayField::Raw)),
            project_type: item.project_type,
            client_type: item.client_type,
            duration: item.duration,
            display_order: item.display_order,
            is_public: item.is_public,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }
}
