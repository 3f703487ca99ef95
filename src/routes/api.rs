use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::contact::ContactSearchCriteria;
use crate::forms::contacts::ContactSearchForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::contacts::load_contacts_page;

#[get("/v1/contacts")]
pub async fn api_v1_contacts(
    web::Query(form): web::Query<ContactSearchForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let clear = form.clear;
    let criteria = match ContactSearchCriteria::try_from(form) {
        Ok(criteria) => criteria,
        Err(err) => return HttpResponse::BadRequest().json(err.to_string()),
    };

    match load_contacts_page(repo.get_ref(), Some(criteria), clear, &server_config.search) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}
