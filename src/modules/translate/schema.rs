use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /translate`. The popup sends exactly these two fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    #[validate(length(min = 1, message = "Language is required"))]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Urdu,
    Punjabi,
    Pashto,
    Sindhi,
    Balochi,
    Saraiki,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Urdu => "Urdu",
            Language::Punjabi => "Punjabi",
            Language::Pashto => "Pashto",
            Language::Sindhi => "Sindhi",
            Language::Balochi => "Balochi",
            Language::Saraiki => "Saraiki",
            Language::English => "English",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Urdu => "اردو",
            Language::Punjabi => "پنجابی",
            Language::Pashto => "پښتو",
            Language::Sindhi => "سنڌي",
            Language::Balochi => "بلوچی",
            Language::Saraiki => "سرائیکی",
            Language::English => "English",
        }
    }

    /// The language typed at a prompt, or the default name when left blank.
    pub fn selection(entered: &str) -> String {
        let entered = entered.trim();

        if entered.is_empty() {
            Language::default().as_str().to_string()
        } else {
            entered.to_string()
        }
    }

    pub fn all() -> Vec<Language> {
        vec![
            Language::Urdu,
            Language::Punjabi,
            Language::Pashto,
            Language::Sindhi,
            Language::Balochi,
            Language::Saraiki,
            Language::English,
        ]
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Urdu
    }
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub name: String,
    pub native_name: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
