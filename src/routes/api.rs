use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::companies::CompaniesQueryParams;
use crate::dto::consultants::ConsultantsQueryParams;
use crate::dto::{ErrorBody, MessageBody};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::no_store_json;
use crate::services::{
    ServiceError, case_studies as case_studies_service, companies as companies_service,
    consultants as consultants_service,
};

/// Decoded query string; a repeated key keeps its first value.
type QueryPairs = web::Query<Vec<(String, String)>>;

#[get("/companies")]
pub async fn list_companies(
    query: QueryPairs,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = CompaniesQueryParams::from_pairs(&query);
    match companies_service::list_companies(repo.get_ref(), params) {
        Ok(envelope) => no_store_json(StatusCode::OK, &envelope),
        Err(err) => {
            error!("Failed to list companies: {err}");
            no_store_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorBody {
                    error: err.detail(),
                },
            )
        }
    }
}

#[get("/companies/{slug}")]
pub async fn show_company(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match companies_service::get_company(repo.get_ref(), &slug, server_config.site_origin()) {
        Ok(detail) => no_store_json(StatusCode::OK, &detail),
        Err(ServiceError::NotFound) => no_store_json(
            StatusCode::NOT_FOUND,
            &ErrorBody {
                error: "Company not found".to_string(),
            },
        ),
        Err(err) => {
            error!("Failed to load company {slug}: {err}");
            no_store_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorBody {
                    error: err.detail(),
                },
            )
        }
    }
}

fn message(status: StatusCode, text: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(MessageBody {
        message: text.into(),
    })
}

#[get("/consultants")]
pub async fn list_consultants(
    query: QueryPairs,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = ConsultantsQueryParams::from_pairs(&query);
    match consultants_service::list_consultants(repo.get_ref(), params) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            error!("Failed to list consultants: {err}");
            message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[get("/consultants/{id}")]
pub async fn show_consultant(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match consultants_service::get_consultant(repo.get_ref(), &id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(ServiceError::NotFound) => message(StatusCode::NOT_FOUND, "Consultant not found"),
        Err(ServiceError::Forbidden(reason)) => message(StatusCode::FORBIDDEN, reason),
        Err(err) => {
            error!("Failed to load consultant {id}: {err}");
            message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[get("/consultants/{id}/case-studies")]
pub async fn list_consultant_case_studies(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match case_studies_service::list_consultant_case_studies(repo.get_ref(), &id) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(ServiceError::NotFound) => message(StatusCode::NOT_FOUND, "Consultant not found"),
        Err(err) => {
            error!("Failed to list case studies of consultant {id}: {err}");
            message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[get("/case-studies/{id}")]
pub async fn show_case_study(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match case_studies_service::get_case_study(repo.get_ref(), &id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(ServiceError::NotFound) => message(StatusCode::NOT_FOUND, "Case study not found"),
        Err(ServiceError::Forbidden(reason)) => message(StatusCode::FORBIDDEN, reason),
        Err(err) => {
            error!("Failed to load case study {id}: {err}");
            message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
