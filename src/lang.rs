use anyhow::{Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Target languages the translation service accepts. Closed set; anything
/// else must be rejected before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Ja,
    Zh,
}

impl Default for LanguageCode {
    fn default() -> Self {
        LanguageCode::Ja
    }
}

impl LanguageCode {
    /// Wire code sent as the `target_lang` request parameter.
    pub fn as_code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ja => "ja",
            LanguageCode::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "en" => Ok(LanguageCode::En),
            "ja" => Ok(LanguageCode::Ja),
            "zh" => Ok(LanguageCode::Zh),
            other => Err(anyhow!("unsupported target language: {other}")),
        }
    }

    /// Display-name lookup used by interactive front-ends. Unknown names
    /// fall back to Japanese, the service default.
    pub fn from_display_name(name: &str) -> Self {
        match name {
            "English" => LanguageCode::En,
            "Japanese" => LanguageCode::Ja,
            "Chinese" => LanguageCode::Zh,
            _ => LanguageCode::Ja,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Ja => "Japanese",
            LanguageCode::Zh => "Chinese",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}
