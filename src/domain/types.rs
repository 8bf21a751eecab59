//! Strongly-typed value objects used by directory entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, trimmed
//! names, valid URLs and e-mail addresses, canonical slugs) so that once a
//! value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Value produced no slug characters.
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
}

macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CompanyId, "Unique identifier for a listed company.");
id_newtype!(ConsultantId, "Unique identifier for a consultant profile.");
id_newtype!(TestimonialId, "Unique identifier for a testimonial.");
id_newtype!(CaseStudyId, "Unique identifier for a case study.");
id_newtype!(PortfolioItemId, "Unique identifier for a portfolio item.");

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(CompanyName, "Company display name, trimmed and non-empty.");
non_empty_string_newtype!(ConsultantName, "Consultant display name, trimmed and non-empty.");
non_empty_string_newtype!(RegionName, "Region a consultant operates in.");
non_empty_string_newtype!(ItemTitle, "Title of a case study or portfolio item.");

/// Lowercases `name` and joins its alphanumeric runs with `-`.
///
/// `"Acme AI, Inc."` becomes `"acme-ai-inc"`.
pub fn to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// URL path segment identifying a company.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Derives the canonical slug of a company name.
    pub fn from_name(name: &str) -> Result<Self, TypeConstraintError> {
        let slug = to_slug(name);
        if slug.is_empty() {
            return Err(TypeConstraintError::InvalidSlug(name.to_string()));
        }
        Ok(Self(slug))
    }

    /// Accepts an already-canonical slug, e.g. from a request path.
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        let candidate = value.trim().to_lowercase();
        if candidate.is_empty() || to_slug(&candidate) != candidate {
            return Err(TypeConstraintError::InvalidSlug(value.to_string()));
        }
        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, syntactically valid URL.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WebsiteUrl(String);

impl WebsiteUrl {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = value.into().trim().to_string();
        if url.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !url.validate_url() {
            return Err(TypeConstraintError::InvalidUrl);
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Lower-cased and validated contact e-mail.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert!(CompanyId::new(1).is_ok());
        assert_eq!(ConsultantId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ConsultantId::new(-4), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        assert_eq!(CompanyName::new("  Acme ").unwrap().as_str(), "Acme");
        assert_eq!(CompanyName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn slugs_collapse_punctuation_and_whitespace() {
        assert_eq!(to_slug("Acme AI, Inc."), "acme-ai-inc");
        assert_eq!(to_slug("  --Notion--  "), "notion");
        assert_eq!(to_slug("Café & Co 2"), "caf-co-2");
        assert_eq!(to_slug("!!!"), "");
    }

    #[test]
    fn slug_parse_rejects_non_canonical_values() {
        assert_eq!(Slug::parse("Acme-AI").unwrap().as_str(), "acme-ai");
        assert!(Slug::parse("acme ai").is_err());
        assert!(Slug::parse("-acme").is_err());
        assert!(Slug::from_name("???").is_err());
    }

    #[test]
    fn urls_and_emails_are_validated() {
        assert!(WebsiteUrl::new("https://acme.io").is_ok());
        assert_eq!(WebsiteUrl::new("not a url"), Err(TypeConstraintError::InvalidUrl));
        assert_eq!(
            ContactEmail::new(" Jane@Example.COM ").unwrap().as_str(),
            "jane@example.com"
        );
        assert_eq!(ContactEmail::new("jane"), Err(TypeConstraintError::InvalidEmail));
    }
}
