//! HTTP handlers for the contact pages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde::Deserialize;

use crate::models::{AddContactInput, EditContactInput};
use crate::server::error::AppError;
use crate::server::{views, AppState};
use crate::services::Submission;
use crate::session::SessionId;

const CONTACT_LIST: &str = "/contact";

/// Body of `DELETE /contact`.
#[derive(Debug, Deserialize)]
pub struct DeleteContactInput {
    #[serde(default)]
    pub name: String,
}

pub async fn home() -> Html<String> {
    Html(views::home())
}

pub async fn about() -> Html<String> {
    Html(views::about())
}

pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Html<String>, AppError> {
    let contacts = state.contacts.list_contacts().await?;
    let notices = state.flash.for_session(session).take();
    Ok(Html(views::contact_list(&contacts, &notices)))
}

pub async fn add_form() -> Html<String> {
    Html(views::add_form(&[], &AddContactInput::default()))
}

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(input): Form<AddContactInput>,
) -> Result<Response, AppError> {
    let flash = state.flash.for_session(session);

    match state.contacts.add_contact(input, &flash).await? {
        Submission::Accepted { .. } => Ok(Redirect::to(CONTACT_LIST).into_response()),
        Submission::Rejected { errors, input } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::add_form(&errors, &input)),
        )
            .into_response()),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state.contacts.get_contact(&name).await?;
    Ok(Html(views::edit_form(
        &[],
        &EditContactInput::from_contact(&contact),
    )))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(input): Form<EditContactInput>,
) -> Result<Response, AppError> {
    let flash = state.flash.for_session(session);

    match state.contacts.edit_contact(input, &flash).await? {
        Submission::Accepted { .. } => Ok(Redirect::to(CONTACT_LIST).into_response()),
        Submission::Rejected { errors, input } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::edit_form(&errors, &input)),
        )
            .into_response()),
    }
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(input): Form<DeleteContactInput>,
) -> Result<Redirect, AppError> {
    let flash = state.flash.for_session(session);
    state.contacts.delete_contact(input.name.trim(), &flash).await?;
    Ok(Redirect::to(CONTACT_LIST))
}

pub async fn show_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state.contacts.get_contact(&name).await?;
    Ok(Html(views::contact_detail(&contact)))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found()))
}
