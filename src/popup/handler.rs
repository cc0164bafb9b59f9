use crate::popup::view::PopupView;
use crate::services::translation_client::{TranslateError, Translation, TranslationClient};

pub const EMPTY_INPUT_ALERT: &str = "Please enter text to translate.";
pub const FAILURE_ALERT: &str = "Failed to translate. Check console for details.";

/// Binds a [`TranslationClient`] to a [`PopupView`].
///
/// Each call is independent: nothing is shared between invocations except the
/// view, so overlapping calls simply race and the last one to resolve owns the
/// output.
pub struct TranslateHandler<V> {
    client: TranslationClient,
    view: V,
}

impl<V: PopupView> TranslateHandler<V> {
    pub fn new(client: TranslationClient, view: V) -> Self {
        Self { client, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Reads the current inputs from the view and translates them.
    pub async fn on_click(&self) -> Result<Translation, TranslateError> {
        let text = self.view.input_text();
        let language = self.view.selected_language();

        self.submit(&text, &language).await
    }

    pub async fn submit(&self, text: &str, language: &str) -> Result<Translation, TranslateError> {
        match self.client.translate(text, language).await {
            Ok(translation) => {
                self.view.show_translation(translation.as_str());
                Ok(translation)
            }
            Err(TranslateError::Validation) => {
                self.view.alert(EMPTY_INPUT_ALERT);
                Err(TranslateError::Validation)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    endpoint = self.client.endpoint_url(),
                    "translation request failed"
                );
                self.view.alert(FAILURE_ALERT);
                Err(e)
            }
        }
    }
}
