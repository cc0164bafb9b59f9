use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::modules::translate::schema::{
    Language, LanguageInfo, LanguagesResponse, MessageResponse, TranslateRequest,
    TranslateResponse,
};
use crate::AppState;

pub async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<MessageResponse>)> {
    if let Err(e) = payload.validate() {
        tracing::debug!(error = %e, "rejected translate request");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse {
                message: "Text and language are required.".to_string(),
            }),
        ));
    }

    tracing::info!(
        language = %payload.language,
        chars = payload.text.chars().count(),
        model = state.llm.model(),
        "translating"
    );

    let translation = state
        .llm
        .translate(&payload.text, &payload.language)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "translation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: format!("Translation failed: {}", e),
                }),
            )
        })?;

    Ok(Json(TranslateResponse { translation }))
}

pub async fn list_languages() -> Json<LanguagesResponse> {
    let languages = Language::all()
        .into_iter()
        .map(|language| LanguageInfo {
            name: language.as_str().to_string(),
            native_name: language.native_name().to_string(),
        })
        .collect();

    Json(LanguagesResponse { languages })
}
