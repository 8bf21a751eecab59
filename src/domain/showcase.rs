//! Case studies and portfolio items published on consultant profiles.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{CaseStudyId, ConsultantId, ItemTitle, PortfolioItemId};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: CaseStudyId,
    pub consultant_id: ConsultantId,
    pub title: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    pub technologies: Vec<String>,
    pub industry: Option<String>,
    pub client_size: Option<String>,
    pub duration: Option<String>,
    pub budget: Option<String>,
    pub attachments: Vec<String>,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub consultant_id: ConsultantId,
    pub title: String,
    pub description: String,
    pub metrics: Option<String>,
    pub technologies: Vec<String>,
    pub project_type: Option<String>,
    pub client_type: Option<String>,
    pub duration: Option<String>,
    pub display_order: i32,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Case study payload; the owning consultant is chosen at insert time.
#[derive(Clone, Debug)]
pub struct NewCaseStudy {
    pub title: ItemTitle,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    pub technologies: Vec<String>,
    pub industry: Option<String>,
    pub client_size: Option<String>,
    pub duration: Option<String>,
    pub budget: Option<String>,
    pub attachments: Vec<String>,
    pub is_public: bool,
}

impl NewCaseStudy {
    /// Public unless [`Self::public`] says otherwise.
    #[must_use]
    pub fn new(
        title: ItemTitle,
        description: String,
        challenge: String,
        solution: String,
        results: String,
        technologies: Vec<String>,
    ) -> Self {
        Self {
            title,
            description: description.trim().to_string(),
            challenge: challenge.trim().to_string(),
            solution: solution.trim().to_string(),
            results: results.trim().to_string(),
            technologies: clean_list(technologies),
            industry: None,
            client_size: None,
            duration: None,
            budget: None,
            attachments: Vec::new(),
            is_public: true,
        }
    }

    pub fn industry(mut self, value: Option<String>) -> Self {
        self.industry = trimmed(value);
        self
    }

    pub fn client_size(mut self, value: Option<String>) -> Self {
        self.client_size = trimmed(value);
        self
    }

    pub fn duration(mut self, value: Option<String>) -> Self {
        self.duration = trimmed(value);
        self
    }

    pub fn budget(mut self, value: Option<String>) -> Self {
        self.budget = trimmed(value);
        self
    }

    pub fn attachments(mut self, value: Vec<String>) -> Self {
        self.attachments = clean_list(value);
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

#[derive(Clone, Debug)]
pub struct NewPortfolioItem {
    pub title: ItemTitle,
    pub description: String,
    pub metrics: Option<String>,
    pub technologies: Vec<String>,
    pub project_type: Option<String>,
    pub client_type: Option<String>,
    pub duration: Option<String>,
    pub display_order: i32,
    pub is_public: bool,
}

impl NewPortfolioItem {
    #[must_use]
    pub fn new(title: ItemTitle, description: String, technologies: Vec<String>) -> Self {
        Self {
            title,
            description: description.trim().to_string(),
            metrics: None,
            technologies: clean_list(technologies),
            project_type: None,
            client_type: None,
            duration: None,
            display_order: 0,
            is_public: true,
        }
    }

    pub fn metrics(mut self, value: Option<String>) -> Self {
        self.metrics = trimmed(value);
        self
    }

    pub fn project_type(mut self, value: Option<String>) -> Self {
        self.project_type = trimmed(value);
        self
    }

    pub fn client_type(mut self, value: Option<String>) -> Self {
        self.client_type = trimmed(value);
        self
    }

    pub fn duration(mut self, value: Option<String>) -> Self {
        self.duration = trimmed(value);
        self
    }

    pub fn display_order(mut self, order: i32) -> Self {
        self.display_order = order;
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_case_study_is_public_and_trimmed() {
        let study = NewCaseStudy::new(
            ItemTitle::new("ERP rollout").unwrap(),
            " Replaced spreadsheets ".to_string(),
            "Manual reporting".to_string(),
            "Cloud ERP".to_string(),
            "Month-end in two days".to_string(),
            vec![" NetSuite ".to_string(), "  ".to_string()],
        )
        .industry(Some("  ".to_string()))
        .budget(Some(" £50k ".to_string()));

        assert!(study.is_public);
        assert_eq!(study.description, "Replaced spreadsheets");
        assert_eq!(study.technologies, vec!["NetSuite"]);
        assert_eq!(study.industry, None);
        assert_eq!(study.budget.as_deref(), Some("£50k"));
    }

    #[test]
    fn portfolio_item_builder_sets_order_and_visibility() {
        let item = NewPortfolioItem::new(
            ItemTitle::new("Chatbot").unwrap(),
            "Support automation".to_string(),
            vec!["NLP".to_string()],
        )
        .display_order(2)
        .public(false);

        assert_eq!(item.display_order, 2);
        assert!(!item.is_public);
    }
}
