//! Code page folder enumeration.

use crate::domain::models::PageEntry;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum PagesError {
    #[error("code pages folder not found: {0}")]
    FolderMissing(String),
    #[error("code pages path is not a directory: {0}")]
    NotADirectory(String),
}

/// One deployment candidate. The file name doubles as the remote page name.
#[derive(Debug, Clone)]
pub struct PageFile {
    pub name: String,
    pub path: PathBuf,
}

/// Regular files directly inside `folder`, sorted by name.
///
/// Subdirectories and other non-regular entries are skipped; nothing is
/// recursed into. `is_file` follows symlinks, so a link to a regular file
/// counts as a candidate.
pub fn list_page_files(folder: &Path) -> anyhow::Result<Vec<PageFile>> {
    if !folder.exists() {
        return Err(PagesError::FolderMissing(folder.display().to_string()).into());
    }
    if !folder.is_dir() {
        return Err(PagesError::NotADirectory(folder.display().to_string()).into());
    }

    let mut pages = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        pages.push(PageFile { name, path });
    }
    pages.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pages)
}

/// Candidates with their on-disk sizes, for the `pages` listing.
pub fn list_page_entries(folder: &Path) -> anyhow::Result<Vec<PageEntry>> {
    let mut entries = Vec::new();
    for page in list_page_files(folder)? {
        let meta = std::fs::metadata(&page.path)?;
        entries.push(PageEntry {
            name: page.name,
            bytes: meta.len(),
        });
    }
    Ok(entries)
}
