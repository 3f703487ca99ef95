use actix_web::{HttpResponse, Responder, get, post, web};
use tera::{Context, Tera};

use crate::domain::contact::{ContactSearchCriteria, NewContact};
use crate::forms::contacts::{ContactSearchForm, SaveContactForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{redirect, render_template, service_error_response};
use crate::services::contacts::{
    ORDERABLE_COLUMNS, add_contact, delete_contact, load_contact, load_contacts_page,
    update_contact,
};

#[get("/")]
pub async fn show_contacts(
    web::Query(form): web::Query<ContactSearchForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let clear = form.clear;
    let criteria = match ContactSearchCriteria::try_from(form) {
        Ok(criteria) => criteria,
        Err(err) => {
            log::warn!("Rejected contacts search: {err}");
            return HttpResponse::BadRequest().body(err.to_string());
        }
    };

    match load_contacts_page(repo.get_ref(), Some(criteria), clear, &server_config.search) {
        Ok(page) => {
            let mut context = Context::new();
            context.insert("page", &page);
            context.insert("orderable_columns", &ORDERABLE_COLUMNS);
            render_template(&tera, "contacts/index.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/contacts/add")]
pub async fn create_contact(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SaveContactForm>,
) -> impl Responder {
    let new_contact = match NewContact::try_from(form) {
        Ok(new_contact) => new_contact,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match add_contact(repo.get_ref(), &server_config.search, new_contact) {
        Ok(()) => redirect("/"),
        Err(err) => service_error_response(err),
    }
}

#[get("/contacts/{contact_id}")]
pub async fn show_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_contact(
        repo.get_ref(),
        &server_config.search,
        contact_id.into_inner(),
    ) {
        Ok(contact) => {
            let mut context = Context::new();
            context.insert("contact", &contact);
            context.insert("permissions", &server_config.search.permissions);
            render_template(&tera, "contacts/show.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/contacts/{contact_id}/edit")]
pub async fn save_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SaveContactForm>,
) -> impl Responder {
    let contact_id = contact_id.into_inner();
    let updates = match NewContact::try_from(form) {
        Ok(updates) => updates,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match update_contact(repo.get_ref(), &server_config.search, contact_id, updates) {
        Ok(contact) => redirect(&format!("/contacts/{}", contact.id)),
        Err(err) => service_error_response(err),
    }
}

#[post("/contacts/{contact_id}/delete")]
pub async fn remove_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match delete_contact(
        repo.get_ref(),
        &server_config.search,
        contact_id.into_inner(),
    ) {
        Ok(()) => redirect("/"),
        Err(err) => service_error_response(err),
    }
}
