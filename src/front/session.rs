//! Stub sign in. Any email is accepted, the password is never checked.

use ntex::web;
use serde::Deserialize;
use serde_json::json;

use crate::{
    front::{AppState, errors::UserError, forms},
    models::user::User,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[web::get("")]
async fn get_session(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let user = app_state.session.read().await.clone();

    Ok(web::HttpResponse::Ok().json(&json!({ "user": user })))
}

#[web::post("")]
async fn sign_in(
    app_state: web::types::State<AppState>,
    form: web::types::Json<SignInForm>,
) -> Result<impl web::Responder, web::Error> {
    let email = forms::clean_text(&form.email);
    if !email.contains('@') {
        return Err(UserError::BadRequest("email inválido".into()).into());
    }

    let user = User::from_email(&email);
    log::info!("signed in as {}", user.email);
    *app_state.session.write().await = Some(user.clone());

    Ok(web::HttpResponse::Ok().json(&json!({ "user": user })))
}

#[web::delete("")]
async fn sign_out(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    *app_state.session.write().await = None;

    Ok(web::HttpResponse::NoContent().finish())
}
