use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::repository::CharacterRepository;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/people").route(web::get().to(list_people)))
        .service(web::resource("/people/{people_id}").route(web::get().to(get_person)));
}

async fn list_people(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let people = CharacterRepository::new(db.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(people))
}

async fn get_person(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let person = CharacterRepository::new(db.get_ref())
        .get_by_id(path.into_inner())
        .await?
        .ok_or(AppError::NotFound("character"))?;
    Ok(HttpResponse::Ok().json(person))
}
