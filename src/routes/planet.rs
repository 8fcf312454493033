use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::repository::PlanetRepository;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/planets").route(web::get().to(list_planets)))
        .service(web::resource("/planets/{planet_id}").route(web::get().to(get_planet)));
}

async fn list_planets(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let planets = PlanetRepository::new(db.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(planets))
}

async fn get_planet(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let planet = PlanetRepository::new(db.get_ref())
        .get_by_id(path.into_inner())
        .await?
        .ok_or(AppError::NotFound("planet"))?;
    Ok(HttpResponse::Ok().json(planet))
}
