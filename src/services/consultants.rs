//! Consultant listing and profile workflows.

use std::collections::HashMap;

use crate::domain::consultant::Consultant;
use crate::domain::showcase::{CaseStudy, PortfolioItem};
use crate::domain::testimonial::{RatingSummary, Testimonial};
use crate::domain::types::ConsultantId;
use crate::dto::consultants::{
    ConsultantDetail, ConsultantListing, ConsultantProfile, ConsultantsPage,
    ConsultantsQueryParams, PaginationMeta,
};
use crate::pagination::PageRequest;
use crate::pricing::pricing_display;
use crate::repository::{ConsultantListQuery, ConsultantReader, ShowcaseReader};
use crate::services::{ServiceError, ServiceResult, parse_path_id};

pub const DEFAULT_CONSULTANT_LIMIT: usize = 20;
pub const MAX_CONSULTANT_LIMIT: usize = 100;
/// Portfolio items shown per consultant in the listing.
pub const LISTING_PORTFOLIO_ITEMS: usize = 3;
/// Case studies shown per consultant in the listing.
pub const LISTING_CASE_STUDIES: usize = 2;

pub fn build_list_query(params: ConsultantsQueryParams) -> ConsultantListQuery {
    let pagination = PageRequest::from_raw(
        params.page.as_deref(),
        params.limit.as_deref(),
        DEFAULT_CONSULTANT_LIMIT,
        MAX_CONSULTANT_LIMIT,
    );

    let mut query = ConsultantListQuery::new(pagination);
    if let Some(search) = params.search {
        query = query.search(search);
    }
    if let Some(region) = params.region {
        query = query.region(region);
    }
    if let Some(expertise) = params.expertise {
        query = query.expertise(expertise);
    }
    if params.featured.as_deref() == Some("true") {
        query = query.featured_only();
    }
    if params.approved.as_deref() == Some("false") {
        query = query.include_unapproved();
    }
    query
}

fn ratings_by_consultant(testimonials: &[Testimonial]) -> HashMap<ConsultantId, Vec<i32>> {
    let mut ratings: HashMap<ConsultantId, Vec<i32>> = HashMap::new();
    for testimonial in testimonials {
        ratings
            .entry(testimonial.consultant_id)
            .or_default()
            .push(testimonial.rating);
    }
    ratings
}

/// Groups records by consultant, keeping at most `limit` per consultant in
/// their incoming order.
fn group_by_consultant<T>(
    records: Vec<T>,
    limit: usize,
    owner: impl Fn(&T) -> ConsultantId,
) -> HashMap<ConsultantId, Vec<T>> {
    let mut grouped: HashMap<ConsultantId, Vec<T>> = HashMap::new();
    for record in records {
        let entry = grouped.entry(owner(&record)).or_default();
        if entry.len() < limit {
            entry.push(record);
        }
    }
    grouped
}

struct Showcase {
    portfolio_items: HashMap<ConsultantId, Vec<PortfolioItem>>,
    case_studies: HashMap<ConsultantId, Vec<CaseStudy>>,
}

fn listing(
    consultant: Consultant,
    ratings: &HashMap<ConsultantId, Vec<i32>>,
    showcase: &mut Showcase,
) -> ConsultantListing {
    let rating =
        RatingSummary::from_ratings(ratings.get(&consultant.id).cloned().unwrap_or_default());
    let pricing = pricing_display(&consultant.rate_card());
    let portfolio_items = showcase
        .portfolio_items
        .remove(&consultant.id)
        .unwrap_or_default();
    let case_studies = showcase
        .case_studies
        .remove(&consultant.id)
        .unwrap_or_default();
    ConsultantListing {
        consultant,
        rating,
        pricing,
        portfolio_items,
        case_studies,
    }
}

/// Lists consultants with their rating summary, published pricing and a
/// preview of their public portfolio and case studies.
pub fn list_consultants<R>(repo: &R, params: ConsultantsQueryParams) -> ServiceResult<ConsultantsPage>
where
    R: ConsultantReader + ShowcaseReader + ?Sized,
{
    let query = build_list_query(params);
    let pagination = query.pagination;

    let (total, consultants) = repo.list_consultants(query)?;

    let ids: Vec<ConsultantId> = consultants.iter().map(|c| c.id).collect();
    let ratings = ratings_by_consultant(&repo.list_approved_testimonials(&ids)?);
    let mut showcase = Showcase {
        portfolio_items: group_by_consultant(
            repo.list_public_portfolio_items(&ids)?,
            LISTING_PORTFOLIO_ITEMS,
            |item| item.consultant_id,
        ),
        case_studies: group_by_consultant(
            repo.list_public_case_studies(&ids)?,
            LISTING_CASE_STUDIES,
            |study| study.consultant_id,
        ),
    };

    let consultants = consultants
        .into_iter()
        .map(|c| listing(c, &ratings, &mut showcase))
        .collect();

    Ok(ConsultantsPage {
        consultants,
        pagination: PaginationMeta {
            page: pagination.page,
            limit: pagination.per_page,
            total,
            total_pages: pagination.total_pages(total),
        },
    })
}

/// Loads a public consultant profile by its raw path identifier.
pub fn get_consultant<R>(repo: &R, raw_id: &str) -> ServiceResult<ConsultantDetail>
where
    R: ConsultantReader + ShowcaseReader + ?Sized,
{
    let id = parse_path_id(raw_id, ConsultantId::new)?;

    let consultant = repo
        .get_consultant_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    if !consultant.is_approved {
        return Err(ServiceError::Forbidden(
            "Consultant profile is not yet approved".to_string(),
        ));
    }

    let testimonials = repo.list_approved_testimonials(&[id])?;
    let portfolio_items = repo.list_public_portfolio_items(&[id])?;
    let case_studies = repo.list_public_case_studies(&[id])?;
    let rating = RatingSummary::from_ratings(testimonials.iter().map(|t| t.rating));
    let pricing = pricing_display(&consultant.rate_card());

    Ok(ConsultantDetail {
        consultant: ConsultantProfile {
            consultant,
            testimonials,
            portfolio_items,
            case_studies,
            rating,
            pricing,
        },
    })
}
