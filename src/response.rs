use actix_web::{
    error::{JsonPayloadError, PathError},
    HttpRequest, HttpResponse,
};
use serde::Serialize;

use crate::error::AppError;

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub message: String,
    pub error: Option<&'a str>,
}

/// Bodiless success payload, rendered as `{}`.
#[derive(Serialize)]
pub struct EmptyResponse {}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let app_err = match err {
        JsonPayloadError::ContentType => AppError::param_error("expected an application/json body"),
        JsonPayloadError::Deserialize(e) => AppError::param_error(format!("invalid request body: {}", e)),
        _ => AppError::param_error("invalid request body"),
    };
    app_err.into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::param_error(format!("invalid path parameter: {}", err)).into()
}

pub fn response_from_error(err: &AppError) -> HttpResponse {
    use actix_web::ResponseError;

    HttpResponse::build(err.status_code()).json(ErrorBody {
        message: err.msg(),
        error: err.detail(),
    })
}
