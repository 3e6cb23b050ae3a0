use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub batch: Batch,
    #[serde(default)]
    pub render: Render,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: Default::default(),
            batch: Default::default(),
            render: Default::default(),
            logging: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub base_url: String,
    pub translate_path: String,
    pub clear_temp_path: String,
    pub connect_timeout_seconds: u64,
    /// Whole-request timeout. Translation of a large PDF is slow; 0 disables.
    pub request_timeout_seconds: u64,
}
impl Default for Server {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8765".into(),
            translate_path: "/translate_pdf/".into(),
            clear_temp_path: "/clear_temp_dir/".into(),
            connect_timeout_seconds: 10,
            request_timeout_seconds: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Batch {
    pub out_dir: String,
    pub print_summary: bool,
    pub write_report_json: bool,
    pub report_filename: String,
}
impl Default for Batch {
    fn default() -> Self {
        Self {
            out_dir: "outputs".into(),
            print_summary: true,
            write_report_json: false,
            report_filename: "batch-report.json".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Render {
    pub pdftoppm_exe: String,
    pub dpi: u32,
    pub image_format: String,
}
impl Default for Render {
    fn default() -> Self {
        Self {
            pdftoppm_exe: "pdftoppm".into(),
            dpi: 150,
            image_format: "png".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: false,
            file_path: "".into(),
        }
    }
}
