use pdf_translate::{
    interactive::InteractiveSession,
    lang::LanguageCode,
    orchestrator::Orchestrator,
    render::PdfRenderer,
    service::{FailureReason, TranslateService, TranslationResult},
};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

struct FixedService {
    reply: TranslationResult,
}

impl TranslateService for FixedService {
    fn submit(&self, _pdf: &[u8], _file_name: &str, _lang: LanguageCode) -> TranslationResult {
        self.reply.clone()
    }

    fn clear_temp(&self) {}
}

/// Writes `pages` fake images per render call.
struct FakeRenderer {
    pages: usize,
}

impl PdfRenderer for FakeRenderer {
    fn render_pages(&self, _pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut out = Vec::new();
        for i in 1..=self.pages {
            let path = out_dir.join(format!("page-{i}.png"));
            fs::write(&path, b"img")?;
            out.push(path);
        }
        Ok(out)
    }
}

#[test]
fn preview_returns_output_and_ordered_pages() {
    let input = tempfile::tempdir().unwrap();
    let pdf = input.path().join("doc.pdf");
    fs::write(&pdf, b"src").unwrap();

    let orch = Orchestrator::new(FixedService {
        reply: TranslationResult::Success {
            output: b"translated".to_vec(),
        },
    });
    let session = InteractiveSession::new(orch, FakeRenderer { pages: 3 }).unwrap();

    let preview = session.translate_one(&pdf, LanguageCode::Zh).unwrap();
    assert_eq!(fs::read(&preview.output_path).unwrap(), b"translated");
    assert_eq!(preview.page_images.len(), 3);
    assert!(preview.page_images[0].ends_with("page-1.png"));
}

#[test]
fn scratch_outlives_individual_jobs() {
    let input = tempfile::tempdir().unwrap();
    let pdf = input.path().join("doc.pdf");
    fs::write(&pdf, b"src").unwrap();

    let orch = Orchestrator::new(FixedService {
        reply: TranslationResult::Success {
            output: b"translated".to_vec(),
        },
    });
    let session = InteractiveSession::new(orch, FakeRenderer { pages: 1 }).unwrap();

    let first = session.translate_one(&pdf, LanguageCode::Ja).unwrap();
    let second = session.translate_one(&pdf, LanguageCode::Ja).unwrap();
    // Same process-lifetime scratch area, overwritten per job.
    assert_eq!(first.output_path, second.output_path);
    assert!(second.output_path.exists());
}

#[test]
fn service_failure_surfaces_as_error() {
    let input = tempfile::tempdir().unwrap();
    let pdf = input.path().join("doc.pdf");
    fs::write(&pdf, b"src").unwrap();

    let orch = Orchestrator::new(FixedService {
        reply: TranslationResult::Failure(FailureReason::Status(503)),
    });
    let session = InteractiveSession::new(orch, FakeRenderer { pages: 1 }).unwrap();

    let err = session.translate_one(&pdf, LanguageCode::Ja).unwrap_err();
    assert!(err.to_string().contains("translation failed"));
}

#[test]
fn directory_input_is_rejected() {
    let input = tempfile::tempdir().unwrap();
    fs::write(input.path().join("doc.pdf"), b"src").unwrap();

    let orch = Orchestrator::new(FixedService {
        reply: TranslationResult::Success {
            output: b"translated".to_vec(),
        },
    });
    let session = InteractiveSession::new(orch, FakeRenderer { pages: 1 }).unwrap();

    let err = session.translate_one(input.path(), LanguageCode::Ja).unwrap_err();
    assert!(err.to_string().contains("single file"));
}
