//! Refpage discovery
//!
//! A refpage directory holds one `gl<Name>.xml` file per API entry point next to shared
//! fragments (`apiversion.xml`, `funchead.xml`, …) that are only reachable through
//! `xi:include`. Only the former are generated.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

static REFPAGE_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^gl[A-Z]\w*\.xml$").unwrap());

/// Whether a file name is that of an API refpage.
pub fn is_refpage(file_name: &str) -> bool {
    REFPAGE_FILE.is_match(file_name)
}

/// Refpage files directly inside `dir`, sorted by file name.
pub fn refpages(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut pages = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_refpage) {
            pages.push(entry.path());
        }
    }

    pages.sort();
    Ok(pages)
}
