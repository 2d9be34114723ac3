use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::text_ops::extract_filename;

/// The open file: backing path, display name, and unsaved-changes flag.
/// The source text itself lives in the editor's `TextBuffer`.
#[derive(Debug, Default)]
pub struct Document {
    pub file_path: Option<PathBuf>,
    pub display_name: String,
    pub dirty: bool,
}

impl Document {
    pub fn untitled() -> Self {
        Self {
            file_path: None,
            display_name: "Untitled".to_string(),
            dirty: false,
        }
    }

    /// Point the document at a new backing path and refresh the display name.
    pub fn set_path(&mut self, path: PathBuf) {
        self.display_name = extract_filename(&path.to_string_lossy());
        self.file_path = Some(path);
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

/// Read a UTF-8 text file in full.
pub fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write text to a UTF-8 file, replacing any existing content.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

/// Check if a file path points to a Markdown file.
pub fn is_markdown_file(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown") || lower.ends_with(".mdown")
}
