use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    Json,
    http::Uri,
    response::Html,
    routing::get
};
use log::info;
use serde_json::json;
use tokio::sync::Mutex;

use crate::api::error::ServerError;
use crate::backend::UserStore;
use crate::core::AccountId;

/// Every route acts on this one account.
pub const USER_ID: AccountId = 123;
const CREATED_NAME: &str = "John";
const UPDATED_NAME: &str = "Jane";

#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<dyn UserStore + Send>>
}

impl AppState {
    pub fn new(store: impl UserStore + Send + 'static) -> AppState {
        AppState { store: Arc::new(Mutex::new(store)) }
    }
}

pub fn router(state: AppState) -> Router {
    let user_routes = get(get_user)
        .post(create_user)
        .put(update_user)
        .delete(delete_user)
        .fallback(not_found);

    Router::new()
        .route("/user", user_routes)
        .route("/swagger.json", get(openapi))
        .route("/docs", get(docs))
        .fallback(not_found)
        .with_state(state)
}

async fn get_user(State(state): State<AppState>) -> String {
    let store = state.store.lock().await;
    info!("GET /user");
    match store.get(USER_ID) {
        Some(account) => account.info(),
        None => "User not found".to_owned()
    }
}

async fn create_user(State(state): State<AppState>) -> &'static str {
    let mut store = state.store.lock().await;
    info!("POST /user");
    match store.create(USER_ID, CREATED_NAME) {
        Some(_) => "User created",
        None => "User already exists"
    }
}

async fn update_user(State(state): State<AppState>) -> &'static str {
    let mut store = state.store.lock().await;
    info!("PUT /user");
    match store.update(USER_ID, UPDATED_NAME) {
        Some(_) => "User updated",
        None => "User not found"
    }
}

async fn delete_user(State(state): State<AppState>) -> &'static str {
    let mut store = state.store.lock().await;
    info!("DELETE /user");
    store.delete(USER_ID);
    "User deleted"
}

async fn openapi() -> Json<serde_json::Value> {
    Json(openapi_document())
}

// swagger-ui from the CDN, reading the document served above
const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>User API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

async fn docs() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_owned())
}

fn text_operation(summary: &str) -> serde_json::Value {
    json!({
        "summary": summary,
        "responses": {
            "200": {
                "description": "Outcome message",
                "content": {"text/plain": {"schema": {"type": "string"}}}
            }
        }
    })
}

/// OpenAPI description of the `/user` routes.
pub fn openapi_document() -> serde_json::Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "User API",
            "version": "1.0.0"
        },
        "paths": {
            "/user": {
                "get": text_operation("Show the user"),
                "post": text_operation("Create the user"),
                "put": text_operation("Rename the user"),
                "delete": text_operation("Delete the user")
            }
        }
    })
}
