//! HTTP handlers and their rendering helpers.

use actix_web::HttpResponse;
use actix_web::http::header;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod api;
pub mod contacts;

/// Renders `template` into an HTML response, logging rendering failures.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps a service failure onto the matching HTTP status.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Forbidden(message) => HttpResponse::Forbidden().body(message),
        ServiceError::Form(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
