use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::{error::AppError, models::ItemForm, store::ItemStore, views};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
}

/// Handle GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let items = state.store.list_all().await?;
    Ok(Html(views::item_list(&items)))
}

/// Handle GET /create
pub async fn create_form() -> Html<String> {
    Html(views::create_form())
}

/// Handle POST /create
///
/// Creates the item and redirects to the list when both fields are present
/// and non-empty; otherwise re-renders the empty form with a 200 and stores
/// nothing.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, AppError> {
    match form.filled() {
        Some((name, description)) => {
            let item = state.store.create(name, description).await?;
            tracing::info!(id = item.id, "Created item");
            Ok(redirect_to_index())
        }
        None => {
            tracing::debug!("Create submission missing required fields");
            Ok(Html(views::create_form()).into_response())
        }
    }
}

/// Handle GET /view/:id
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let item = state.store.get(id).await?;
    Ok(Html(views::item_detail(&item)))
}

/// Handle GET /edit/:id
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let item = state.store.get(id).await?;
    Ok(Html(views::edit_form(&item)))
}

/// Handle POST /edit/:id
///
/// Overwrites both fields unconditionally. Unlike create there is no
/// presence check: an absent field becomes the empty string.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ItemForm>,
) -> Result<Response, AppError> {
    let (name, description) = form.into_values();
    state.store.update(id, &name, &description).await?;
    tracing::info!(id, "Updated item");
    Ok(redirect_to_index())
}

/// Handle GET /delete/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    state.store.delete(id).await?;
    tracing::info!(id, "Deleted item");
    Ok(redirect_to_index())
}

// axum's Redirect::to answers 303; the contract for form handling here
// is a plain 302 Found back to the list.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(LOCATION, "/")]).into_response()
}
