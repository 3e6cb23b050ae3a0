use crate::{
    job::{TranslationJob, expand_target},
    lang::LanguageCode,
    report::{BatchReport, Disposition, JobReport},
    service::{TranslateService, TranslationResult},
    util::{ensure_dir, now_rfc3339},
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Runs translation jobs against the remote service, one at a time.
///
/// Execution is deliberately serial: the server keeps a single shared
/// temporary area per client, so job i's cleanup must settle before job
/// i+1 allocates anything there.
pub struct Orchestrator<S: TranslateService> {
    service: S,
}

impl<S: TranslateService> Orchestrator<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Expand the target and run every discovered job in order. Individual
    /// job failures are reported, not propagated; only expansion itself can
    /// fail here.
    pub fn run_batch(&self, input: &Path, out_dir: &Path, lang: LanguageCode) -> Result<BatchReport> {
        let jobs = expand_target(input, lang)?;
        self.run_jobs(&jobs, out_dir)
    }

    fn run_jobs(&self, jobs: &[TranslationJob], out_dir: &Path) -> Result<BatchReport> {
        let started = now_rfc3339();
        info!("batch start: {} job(s) out={}", jobs.len(), out_dir.display());

        let mut reports = Vec::with_capacity(jobs.len());
        for job in jobs {
            reports.push(self.run_job(job, out_dir));
        }

        let succeeded = reports.iter().filter(|r| r.is_success()).count();
        let failed = reports.len() - succeeded;
        info!("batch complete: {succeeded} succeeded, {failed} failed");

        Ok(BatchReport {
            started,
            finished: now_rfc3339(),
            succeeded,
            failed,
            jobs: reports,
        })
    }

    /// One job, start to finish: read, submit, persist, clean up. Never
    /// returns an error; every fault lands in the report so siblings keep
    /// running.
    pub fn run_job(&self, job: &TranslationJob, out_dir: &Path) -> JobReport {
        info!("translating {}...", job.source.display());

        let pdf = match std::fs::read(&job.source)
            .with_context(|| format!("reading {}", job.source.display()))
        {
            Ok(bytes) => bytes,
            Err(err) => return self.failed(job, format!("{err:#}")),
        };

        match self.service.submit(&pdf, &job.file_name, job.lang) {
            TranslationResult::Success { output } => {
                match self.persist(job, &output, out_dir) {
                    Ok(dest) => {
                        // Cleanup only after the output is durably on disk.
                        self.service.clear_temp();
                        info!("translated PDF saved to {}", dest.display());
                        JobReport {
                            file_name: job.file_name.clone(),
                            disposition: Disposition::Succeeded { output_path: dest },
                        }
                    }
                    Err(err) => self.failed(job, format!("{err:#}")),
                }
            }
            TranslationResult::Failure(reason) => self.failed(job, reason.to_string()),
        }
    }

    fn persist(&self, job: &TranslationJob, output: &[u8], out_dir: &Path) -> Result<PathBuf> {
        ensure_dir(out_dir)?;
        let dest = out_dir.join(&job.file_name);
        std::fs::write(&dest, output).with_context(|| format!("writing {}", dest.display()))?;
        Ok(dest)
    }

    fn failed(&self, job: &TranslationJob, reason: String) -> JobReport {
        error!("{} failed: {reason}", job.source.display());
        JobReport {
            file_name: job.file_name.clone(),
            disposition: Disposition::Failed { reason },
        }
    }

    /// Manual trigger for the server-side cleanup endpoint.
    pub fn clear_temp(&self) {
        self.service.clear_temp();
    }
}
