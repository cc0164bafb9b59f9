use axum::{
    routing::{get, post},
    Router,
};

use crate::modules::translate::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(controller::translate))
        .route("/languages", get(controller::list_languages))
}
