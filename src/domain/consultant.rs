use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::showcase::{NewCaseStudy, NewPortfolioItem};
use crate::domain::testimonial::NewTestimonial;
use crate::domain::types::{ConsultantId, ConsultantName, ContactEmail, RegionName};
use crate::normalize::{ArrayField, TagFields, parse_array_field};
use crate::pricing::RateCard;

/// Consultant profile with normalized tag lists.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Consultant {
    pub id: ConsultantId,
    pub name: String,
    pub description: String,
    pub short_description: Option<String>,
    pub website: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub region: String,
    pub services: Vec<String>,
    pub industries: Vec<String>,
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

impl Consultant {
    pub fn rate_card(&self) -> RateCard {
        RateCard {
            hourly_rate: self.hourly_rate,
            project_rate_min: self.project_rate_min,
            project_rate_max: self.project_rate_max,
            show_rates: self.show_rates,
        }
    }
}

/// Consultant as read from storage, before tag normalization.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawConsultant {
    pub id: ConsultantId,
    pub name: String,
    pub description: String,
    pub short_description: Option<String>,
    pub website: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub region: String,
    #[serde(default)]
    pub services: Option<ArrayField>,
    #[serde(default)]
    pub industries: Option<ArrayField>,
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

impl TagFields for RawConsultant {
    type Normalized = Consultant;

    fn normalize(self) -> Consultant {
        Consultant {
            id: self.id,
            name: self.name,
            description: self.description,
            short_description: self.short_description,
            website: self.website,
            email: self.email,
            phone: self.phone,
            region: self.region,
            services: parse_array_field(self.services),
            industries: parse_array_field(self.industries),
            logo: self.logo,
            hourly_rate: self.hourly_rate,
            project_rate_min: self.project_rate_min,
            project_rate_max: self.project_rate_max,
            show_rates: self.show_rates,
            is_approved: self.is_approved,
            is_featured: self.is_featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl TagFields for Consultant {
    type Normalized = Consultant;

    fn normalize(self) -> Consultant {
        self
    }
}

impl From<Consultant> for RawConsultant {
    fn from(consultant: Consultant) -> Self {
        Self {
            id: consultant.id,
            name: consultant.name,
            description: consultant.description,
            short_description: consultant.short_description,
            website: consultant.website,
            email: consultant.email,
            phone: consultant.phone,
            region: consultant.region,
            services: Some(ArrayField::Decoded(consultant.services)),
            industries: Some(ArrayField::Decoded(consultant.industries)),
            logo: consultant.logo,
            hourly_rate: consultant.hourly_rate,
            project_rate_min: consultant.project_rate_min,
            project_rate_max: consultant.project_rate_max,
            show_rates: consultant.show_rates,
            is_approved: consultant.is_approved,
            is_featured: consultant.is_featured,
            created_at: consultant.created_at,
            updated_at: consultant.updated_at,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewConsultant {
    pub name: ConsultantName,
    pub description: String,
    pub short_description: Option<String>,
    pub website: Option<String>,
    pub email: ContactEmail,
    pub phone: Option<String>,
    pub region: RegionName,
    pub services: Vec<String>,
    pub industries: Vec<String>,
    pub logo: Option<String>,
    pub hourly_rate: Option<i32>,
    pub project_rate_min: Option<i32>,
    pub project_rate_max: Option<i32>,
    pub show_rates: bool,
    pub is_approved: bool,
    pub is_featured: bool,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !cleaned.iter().any(|t| t == tag) {
            cleaned.push(tag.to_string());
        }
    }
    cleaned
}

impl NewConsultant {
    /// Builds a profile, dropping blank optional fields and duplicate tags.
    #[must_use]
    pub fn new(
        name: ConsultantName,
        email: ContactEmail,
        region: RegionName,
        description: String,
        services: Vec<String>,
        industries: Vec<String>,
    ) -> Self {
        Self {
            name,
            description: description.trim().to_string(),
            short_description: None,
            website: None,
            email,
            phone: None,
            region,
            services: clean_tags(services),
            industries: clean_tags(industries),
            logo: None,
            hourly_rate: None,
            project_rate_min: None,
            project_rate_max: None,
            show_rates: false,
            is_approved: false,
            is_featured: false,
        }
    }

    pub fn short_description(mut self, value: Option<String>) -> Self {
        self.short_description = trimmed(value);
        self
    }

    pub fn website(mut self, value: Option<String>) -> Self {
        self.website = trimmed(value);
        self
    }

    pub fn phone(mut self, value: Option<String>) -> Self {
        self.phone = trimmed(value);
        self
    }

    pub fn logo(mut self, value: Option<String>) -> Self {
        self.logo = trimmed(value);
        self
    }

    pub fn rates(mut self, rates: RateCard) -> Self {
        self.hourly_rate = rates.hourly_rate;
        self.project_rate_min = rates.project_rate_min;
        self.project_rate_max = rates.project_rate_max;
        self.show_rates = rates.show_rates;
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.is_approved = approved;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.is_featured = featured;
        self
    }
}

/// A consultant profile together with the records published under it.
///
/// Imported as a unit: the profile is matched on its e-mail address and the
/// child records replace whatever the consultant had before.
#[derive(Clone, Debug)]
pub struct ConsultantImport {
    pub profile: NewConsultant,
    pub testimonials: Vec<NewTestimonial>,
    pub case_studies: Vec<NewCaseStudy>,
    pub portfolio_items: Vec<NewPortfolioItem>,
}

impl ConsultantImport {
    pub fn new(profile: NewConsultant) -> Self {
        Self {
            profile,
            testimonials: Vec::new(),
            case_studies: Vec::new(),
            portfolio_items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize_consultant, normalize_consultants};

    fn raw(services: Option<ArrayField>, industries: Option<ArrayField>) -> RawConsultant {
        let now = chrono::DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .naive_utc();
        RawConsultant {
            id: ConsultantId::new(1).unwrap(),
            name: "TechConsult Solutions".to_string(),
            description: "Cloud migrations".to_string(),
            short_description: None,
            website: Some("https://techconsult.example".to_string()),
            email: "hello@techconsult.example".to_string(),
            phone: None,
            region: "London".to_string(),
            services,
            industries,
            logo: None,
            hourly_rate: Some(9500),
            project_rate_min: None,
            project_rate_max: None,
            show_rates: true,
            is_approved: true,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn normalizes_both_storage_shapes() {
        let record = raw(
            Some(ArrayField::from(r#"["Cloud","Security"]"#)),
            Some(ArrayField::Decoded(vec!["Finance".to_string()])),
        );
        let consultant = normalize_consultant(record.clone());

        assert_eq!(consultant.services, vec!["Cloud", "Security"]);
        assert_eq!(consultant.industries, vec!["Finance"]);
        assert_eq!(consultant.name, record.name);
        assert_eq!(consultant.hourly_rate, record.hourly_rate);
    }

    #[test]
    fn missing_or_corrupt_tags_become_empty() {
        let consultant = normalize_consultant(raw(None, Some(ArrayField::from("{oops"))));
        assert!(consultant.services.is_empty());
        assert!(consultant.industries.is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_consultant(raw(Some(ArrayField::from(r#"["AI"]"#)), None));
        let twice = normalize_consultant(RawConsultant::from(once.clone()));
        assert_eq!(once, twice);
        assert_eq!(normalize_consultant(once.clone()), once);
    }

    #[test]
    fn normalizing_many_preserves_order() {
        let mut second = raw(None, None);
        second.name = "Design Co".to_string();
        let records = vec![raw(None, None), second];

        let consultants = normalize_consultants(records);

        assert_eq!(consultants.len(), 2);
        assert_eq!(consultants[0].name, "TechConsult Solutions");
        assert_eq!(consultants[1].name, "Design Co");
    }

    #[test]
    fn new_consultant_cleans_tags() {
        let new = NewConsultant::new(
            ConsultantName::new("Jane Doe").unwrap(),
            ContactEmail::new("jane@example.com").unwrap(),
            RegionName::new("Leeds").unwrap(),
            " Advisory ".to_string(),
            vec![" AI ".into(), "AI".into(), "".into(), "Data".into()],
            vec![],
        )
        .website(Some("  ".to_string()));

        assert_eq!(new.services, vec!["AI", "Data"]);
        assert_eq!(new.description, "Advisory");
        assert_eq!(new.website, None);
    }
}
