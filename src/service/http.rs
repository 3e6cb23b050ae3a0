use super::{FailureReason, TranslateService, TranslationResult};
use crate::{config::Config, lang::LanguageCode};
use anyhow::{Context, Result};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Remote service client over HTTP. One POST per translation, one GET per
/// cleanup request; no business logic lives here.
pub struct HttpTranslateService {
    client: Client,
    translate_url: String,
    clear_temp_url: String,
}

impl HttpTranslateService {
    pub fn new(cfg: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(cfg.server.connect_timeout_seconds));
        builder = if cfg.server.request_timeout_seconds > 0 {
            builder.timeout(Duration::from_secs(cfg.server.request_timeout_seconds))
        } else {
            // reqwest's default is 30s; translation jobs routinely run longer.
            builder.timeout(None)
        };
        let client = builder.build().with_context(|| "building HTTP client")?;

        let base = cfg.server.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            translate_url: format!("{}{}", base, cfg.server.translate_path),
            clear_temp_url: format!("{}{}", base, cfg.server.clear_temp_path),
        })
    }
}

impl TranslateService for HttpTranslateService {
    fn submit(&self, pdf: &[u8], file_name: &str, lang: LanguageCode) -> TranslationResult {
        let part = match Part::bytes(pdf.to_vec())
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
        {
            Ok(p) => p,
            Err(err) => return TranslationResult::Failure(FailureReason::Transport(err.to_string())),
        };
        let form = Form::new().part("input_pdf", part);

        debug!("POST {} target_lang={}", self.translate_url, lang);
        let response = self
            .client
            .post(&self.translate_url)
            .query(&[("target_lang", lang.as_code())])
            .multipart(form)
            .send();

        let response = match response {
            Ok(r) => r,
            Err(err) => return TranslationResult::Failure(FailureReason::Transport(err.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            return TranslationResult::Failure(FailureReason::Status(status.as_u16()));
        }

        match response.bytes() {
            Ok(body) => TranslationResult::Success {
                output: body.to_vec(),
            },
            Err(err) => TranslationResult::Failure(FailureReason::Transport(err.to_string())),
        }
    }

    fn clear_temp(&self) {
        debug!("GET {}", self.clear_temp_url);
        match self.client.get(&self.clear_temp_url).send() {
            Ok(response) if !response.status().is_success() => {
                warn!("clear_temp returned status {}", response.status());
            }
            Ok(_) => {}
            Err(err) => warn!("clear_temp request failed: {err}"),
        }
    }
}
