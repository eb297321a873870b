use crate::render::blocks::kinds::Heading;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// One note as served to the viewer: metadata plus the untouched body.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    /// Path relative to the notes root.
    pub name: RelativePathBuf,
    pub title: String,
    pub line_count: usize,
    /// Size in bytes.
    pub size: u64,
    /// Exactly what is on disk; this is what gets rendered.
    pub content: String,
}

impl DocumentRecord {
    pub fn new(name: RelativePathBuf, content: String) -> Self {
        let title = Self::extract_title(&name, &content);
        Self {
            title,
            line_count: content.lines().count(),
            size: content.len() as u64,
            name,
            content,
        }
    }

    /// Display name without the `.md` extension.
    pub fn display_name(&self) -> &str {
        let name = self.name.as_str();
        name.strip_suffix(".md").unwrap_or(name)
    }

    /// First level-one heading, else the file stem.
    fn extract_title(name: &RelativePath, content: &str) -> String {
        content
            .lines()
            .find_map(|line| match Heading::sig(line) {
                Some((1, text)) if !text.is_empty() => Some(text.to_string()),
                _ => None,
            })
            .or_else(|| name.file_stem().map(str::to_string))
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(
    relative_path: &RelativePath,
    root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the notes directory
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Load one note. `path` may be absolute or relative to `notes_root`.
pub fn load_document(notes_root: &Path, path: &Path) -> Result<DocumentRecord, IoError> {
    let relative = path.strip_prefix(notes_root).unwrap_or(path);
    let name = RelativePathBuf::from_path(relative)
        .map_err(|e| IoError::InvalidNotesDir(format!("{}: {e}", path.display())))?;
    let content = read_file(&name, notes_root)?;
    Ok(DocumentRecord::new(name, content))
}

/// Load every note under `notes_root`, sorted by path.
pub fn load_documents(notes_root: &Path) -> Result<Vec<DocumentRecord>, IoError> {
    scan_markdown_files(notes_root)?
        .iter()
        .map(|path| load_document(notes_root, path))
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
