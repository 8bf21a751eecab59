use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, web};

use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::seo;

#[get("/robots.txt")]
pub async fn robots(server_config: web::Data<ServerConfig>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(seo::robots_txt(server_config.site_origin()))
}

#[get("/sitemap.xml")]
pub async fn sitemap(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let xml = seo::load_sitemap(
        repo.get_ref(),
        server_config.site_origin(),
        server_config.sitemap_limit,
    );
    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(xml)
}
