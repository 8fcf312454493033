use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::entity::{character, planet};
use crate::error::AppError;
use crate::repository::FavoriteRepository;
use crate::response::EmptyResponse;

/// POST routes take the target's id, DELETE routes take the association's id.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/users/favorites/{user_id}").route(web::get().to(list_favorites)))
        .service(
            web::resource("/favorite/planet/{id}")
                .route(web::post().to(add_planet))
                .route(web::delete().to(remove_planet)),
        )
        .service(
            web::resource("/favorite/people/{id}")
                .route(web::post().to(add_person))
                .route(web::delete().to(remove_person)),
        );
}

#[derive(Deserialize)]
struct FavoriteRequest {
    id_user: i32,
}

#[derive(Serialize)]
struct FavoritePlanetDto {
    fav_id: i32,
    #[serde(flatten)]
    planet: planet::Model,
}

#[derive(Serialize)]
struct FavoriteCharacterDto {
    fav_id: i32,
    #[serde(flatten)]
    character: character::Model,
}

async fn list_favorites(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let favorites = FavoriteRepository::new(db.get_ref())
        .list_for_user(path.into_inner())
        .await?;

    let planets: Vec<FavoritePlanetDto> = favorites
        .planets
        .into_iter()
        .map(|(fav, planet)| FavoritePlanetDto { fav_id: fav.id, planet })
        .collect();
    let characters: Vec<FavoriteCharacterDto> = favorites
        .characters
        .into_iter()
        .map(|(fav, character)| FavoriteCharacterDto {
            fav_id: fav.id,
            character,
        })
        .collect();

    Ok(HttpResponse::Ok().json(("Favorites", planets, characters)))
}

async fn add_planet(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    payload: web::Json<FavoriteRequest>,
) -> Result<HttpResponse, AppError> {
    FavoriteRepository::new(db.get_ref())
        .create_planet_favorite(payload.id_user, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(EmptyResponse {}))
}

async fn add_person(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    payload: web::Json<FavoriteRequest>,
) -> Result<HttpResponse, AppError> {
    FavoriteRepository::new(db.get_ref())
        .create_character_favorite(payload.id_user, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(EmptyResponse {}))
}

async fn remove_planet(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    FavoriteRepository::new(db.get_ref())
        .delete_planet_favorite(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(EmptyResponse {}))
}

async fn remove_person(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    FavoriteRepository::new(db.get_ref())
        .delete_character_favorite(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(EmptyResponse {}))
}
