use crate::lang::LanguageCode;
use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// One unit of work: a readable PDF plus the language it should come back in.
#[derive(Debug, Clone)]
pub struct TranslationJob {
    pub source: PathBuf,
    pub file_name: String,
    pub lang: LanguageCode,
}

impl TranslationJob {
    fn for_file(source: &Path, lang: LanguageCode) -> Result<Self> {
        let file_name = source
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("input has no usable file name: {}", source.display()))?
            .to_string();
        Ok(Self {
            source: source.to_path_buf(),
            file_name,
            lang,
        })
    }
}

/// Expand a user target into the ordered job list for one batch run.
///
/// A file must carry a `.pdf` extension; a directory contributes its direct
/// `.pdf` children (non-recursive), sorted by file name so runs are
/// deterministic. All validation happens here, before any network call.
pub fn expand_target(input: &Path, lang: LanguageCode) -> Result<Vec<TranslationJob>> {
    if input.is_file() {
        if !has_pdf_extension(input) {
            return Err(anyhow!("input file must be a PDF: {}", input.display()));
        }
        return Ok(vec![TranslationJob::for_file(input, lang)?]);
    }

    if input.is_dir() {
        let mut sources = Vec::new();
        let entries = std::fs::read_dir(input)
            .with_context(|| format!("reading directory: {}", input.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("reading entry in {}", input.display()))?;
            let path = entry.path();
            if path.is_file() && has_pdf_extension(&path) {
                sources.push(path);
            }
        }
        // Emptiness is judged on the expanded list, not on the iterator.
        if sources.is_empty() {
            return Err(anyhow!("input directory contains no PDFs: {}", input.display()));
        }
        sources.sort_by_key(|p| p.file_name().map(|s| s.to_os_string()));
        return sources
            .iter()
            .map(|p| TranslationJob::for_file(p, lang))
            .collect();
    }

    Err(anyhow!(
        "input path must be a file or directory: {}",
        input.display()
    ))
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
