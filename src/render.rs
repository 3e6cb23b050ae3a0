use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Turns a translated PDF into one raster image per page so the interactive
/// front-end can preview the result.
pub trait PdfRenderer {
    fn render_pages(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Renderer backed by poppler's `pdftoppm`. Executable, DPI and image
/// format come from `[render]` config.
pub struct PdftoppmRenderer {
    exe: PathBuf,
    dpi: u32,
    format: String,
}

impl PdftoppmRenderer {
    pub fn new(cfg: &Config) -> Result<Self> {
        let format = cfg.render.image_format.to_ascii_lowercase();
        match format.as_str() {
            "png" | "jpeg" | "tiff" => {}
            other => return Err(anyhow!("unsupported render.image_format: {other}")),
        }
        Ok(Self {
            exe: PathBuf::from(&cfg.render.pdftoppm_exe),
            dpi: cfg.render.dpi,
            format,
        })
    }
}

impl PdfRenderer for PdftoppmRenderer {
    fn render_pages(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let prefix = out_dir.join("page");
        debug!("render {} -> {}-*.{}", pdf.display(), prefix.display(), self.format);

        let output = Command::new(&self.exe)
            .arg(format!("-{}", self.format))
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(pdf)
            .arg(&prefix)
            .output()
            .with_context(|| format!("spawning {}", self.exe.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "pdftoppm failed for {}: {}",
                pdf.display(),
                stderr.trim()
            ));
        }

        // pdftoppm names pages page-1.png, page-2.png, ... page-10.png;
        // zero-padding depends on page count, so sort by page number.
        let mut pages = Vec::new();
        for entry in std::fs::read_dir(out_dir)
            .with_context(|| format!("reading render dir: {}", out_dir.display()))?
        {
            let path = entry?.path();
            if let Some(n) = page_number(&path, &self.format) {
                pages.push((n, path));
            }
        }
        if pages.is_empty() {
            return Err(anyhow!("pdftoppm produced no pages for {}", pdf.display()));
        }
        pages.sort_by_key(|(n, _)| *n);
        Ok(pages.into_iter().map(|(_, p)| p).collect())
    }
}

fn page_number(path: &Path, format: &str) -> Option<u32> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(&format!(".{format}"))?;
    stem.strip_prefix("page-")?.parse().ok()
}
