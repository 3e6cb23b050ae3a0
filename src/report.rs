use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub file_name: String,
    pub disposition: Disposition,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Disposition {
    Succeeded { output_path: PathBuf },
    Failed { reason: String },
}

impl JobReport {
    pub fn is_success(&self) -> bool {
        matches!(self.disposition, Disposition::Succeeded { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub started: String,
    pub finished: String,
    pub succeeded: usize,
    pub failed: usize,
    pub jobs: Vec<JobReport>,
}
