use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};
use serde_json::json;

use super::forms::FieldError;

#[derive(Debug, Display, Error)]
pub enum UserError {
    #[display("recurso no encontrado")]
    UrlNotFound,
    #[display("formulario con valores invalidos")]
    FormInputValueError(#[error(not(source))] Vec<FieldError>),
    #[display("solicitud invalida: {_0}")]
    BadRequest(#[error(not(source))] String),
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        let details = match self {
            UserError::FormInputValueError(fields) => json!(fields),
            UserError::BadRequest(msg) => json!(msg),
            UserError::UrlNotFound => serde_json::Value::Null,
        };

        web::HttpResponse::build(self.status_code()).json(&json!({
            "error": self.to_string(),
            "details": details,
        }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::FormInputValueError(_) | UserError::BadRequest(_) => {
                http::StatusCode::BAD_REQUEST
            }
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ServerError {
    #[display("error interno del servidor")]
    InternalServerError(#[error(not(source))] String),
    #[display("{_0}")]
    ExternalServiceError(#[error(not(source))] String),
}

impl ServerError {
    fn get_error_message(&self) -> String {
        match self {
            ServerError::InternalServerError(msg) => format!("[InternalServerError] {:#?}", msg),
            ServerError::ExternalServiceError(msg) => format!("[ExternalServiceError] {:#?}", msg),
        }
    }
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{}", self.get_error_message());

        web::HttpResponse::build(self.status_code()).json(&json!({
            "error": self.to_string(),
            "details": serde_json::Value::Null,
        }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ServerError::InternalServerError(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::ExternalServiceError(_) => http::StatusCode::BAD_GATEWAY,
        }
    }
}
