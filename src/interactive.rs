use crate::{
    job::expand_target,
    lang::LanguageCode,
    orchestrator::Orchestrator,
    render::PdfRenderer,
    report::Disposition,
    service::TranslateService,
    util::ensure_dir,
};
use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Result of one interactive translation: where the translated PDF landed
/// and its pages rendered for preview, in order.
#[derive(Debug)]
pub struct Preview {
    pub output_path: PathBuf,
    pub page_images: Vec<PathBuf>,
}

/// Single-file front-end core. Owns a scratch directory that lives as long
/// as the session itself; the server's temp area is a single shared slot,
/// so scratch must not be recreated per job.
pub struct InteractiveSession<S: TranslateService, R: PdfRenderer> {
    orchestrator: Orchestrator<S>,
    renderer: R,
    scratch: TempDir,
}

impl<S: TranslateService, R: PdfRenderer> InteractiveSession<S, R> {
    pub fn new(orchestrator: Orchestrator<S>, renderer: R) -> Result<Self> {
        let scratch = TempDir::new().with_context(|| "creating scratch directory")?;
        Ok(Self {
            orchestrator,
            renderer,
            scratch,
        })
    }

    /// Translate exactly one PDF and render it for preview. Service
    /// failures surface as errors here since there are no sibling jobs to
    /// protect.
    pub fn translate_one(&self, input: &Path, lang: LanguageCode) -> Result<Preview> {
        if !input.is_file() {
            return Err(anyhow!("interactive input must be a single file: {}", input.display()));
        }
        let jobs = expand_target(input, lang)?;
        let job = jobs
            .first()
            .ok_or_else(|| anyhow!("no job for input: {}", input.display()))?;

        let report = self.orchestrator.run_job(job, self.scratch.path());
        let output_path = match report.disposition {
            Disposition::Succeeded { output_path } => output_path,
            Disposition::Failed { reason } => {
                return Err(anyhow!("translation failed for {}: {reason}", input.display()));
            }
        };

        // Fresh page set per job; a shorter document must not inherit
        // trailing pages from the previous preview.
        let render_dir = self.scratch.path().join("pages");
        if render_dir.exists() {
            std::fs::remove_dir_all(&render_dir)
                .with_context(|| format!("clearing render dir: {}", render_dir.display()))?;
        }
        ensure_dir(&render_dir)?;
        let page_images = self
            .renderer
            .render_pages(&output_path, &render_dir)
            .with_context(|| format!("rendering preview for {}", output_path.display()))?;

        Ok(Preview {
            output_path,
            page_images,
        })
    }
}
