//! Companies listing and detail workflows.

use crate::domain::company::Company;
use crate::domain::types::Slug;
use crate::dto::companies::{CompaniesEnvelope, CompaniesQueryParams, CompanyDetail};
use crate::dto::seo::Breadcrumb;
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
use crate::repository::{CompanyListQuery, CompanyReader};
use crate::services::seo::breadcrumb_list;
use crate::services::{ServiceError, ServiceResult};

/// Resolves raw query parameters into a listing query.
///
/// Never fails: malformed paging values fall back to their defaults and
/// blank filters are dropped.
pub fn build_list_query(params: CompaniesQueryParams) -> CompanyListQuery {
    let pagination = PageRequest::from_raw(
        params.page.as_deref(),
        params.page_size.as_deref(),
        DEFAULT_PAGE_SIZE,
        MAX_PAGE_SIZE,
    );

    let mut query = CompanyListQuery::new(pagination);
    if let Some(search) = params.search {
        query = query.search(search);
    }
    if let Some(category) = params.category {
        query = query.category(category);
    }
    query
}

/// Returns one page of companies ordered by name, with the total match count.
pub fn list_companies<R>(repo: &R, params: CompaniesQueryParams) -> ServiceResult<CompaniesEnvelope>
where
    R: CompanyReader + ?Sized,
{
    let query = build_list_query(params);
    let pagination = query.pagination;

    let (total, data) = repo.list_companies(query)?;

    Ok(CompaniesEnvelope {
        data,
        total,
        page: pagination.page,
        page_size: pagination.per_page,
    })
}

fn company_breadcrumbs(company: &Company) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::link("Home", "/"),
        Breadcrumb::link("Directory", "/directory"),
        Breadcrumb::current(company.name.as_str()),
    ]
}

/// Looks a company up by its slug and attaches its breadcrumb trail.
pub fn get_company<R>(repo: &R, slug: &str, site_origin: &str) -> ServiceResult<CompanyDetail>
where
    R: CompanyReader + ?Sized,
{
    let slug = Slug::parse(slug).map_err(|_| ServiceError::NotFound)?;

    let company = repo
        .get_company_by_slug(&slug)?
        .ok_or(ServiceError::NotFound)?;

    let breadcrumbs = breadcrumb_list(site_origin, &company_breadcrumbs(&company));

    Ok(CompanyDetail {
        company,
        breadcrumbs,
    })
}
