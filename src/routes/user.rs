use actix_web::{web, HttpResponse};
use bcrypt::hash;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::repository::{NewUser, UserRepository};
use crate::response::EmptyResponse;

const BCRYPT_COST: u32 = 10;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/user").route(web::get().to(hello)))
        .service(web::resource("/users").route(web::get().to(list_users)))
        .service(web::resource("/create/user").route(web::post().to(create_user)));
}

#[derive(Deserialize)]
struct CreateUserRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
struct HelloResponse {
    msg: &'static str,
}

async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(HelloResponse {
        msg: "Hello, this is your GET /user response ",
    })
}

async fn list_users(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let users = UserRepository::new(db.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

async fn create_user(
    db: web::Data<DatabaseConnection>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let name = required(payload.name, "name")?;
    let email = required(payload.email, "email")?;
    let password = required(payload.password, "password")?;

    let password_hash =
        hash(password, BCRYPT_COST).map_err(|e| AppError::internal(e.to_string()))?;

    UserRepository::new(db.get_ref())
        .create(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    Ok(HttpResponse::Created().json(EmptyResponse {}))
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::param_error(format!("{} cannot be empty", field))),
    }
}
