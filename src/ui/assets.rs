//! Filesystem-based asset source for piece images.
//!
//! Piece images are looked up by the service's opaque piece label, so the
//! asset directory must contain one file per label the service emits.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// Asset path for a piece, derived from its opaque service label.
pub fn piece_asset_path(label: &str) -> SharedString {
    SharedString::from(format!("assets/{label}.svg"))
}

/// Loads assets from the executable's directory, falling back to the
/// working directory.
pub struct FsAssets {
    search_roots: Vec<PathBuf>,
}

impl FsAssets {
    pub fn new() -> Self {
        let mut search_roots = Vec::new();
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        {
            search_roots.push(exe_dir);
        }
        if let Ok(cwd) = std::env::current_dir() {
            search_roots.push(cwd);
        }
        Self { search_roots }
    }
}

impl Default for FsAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FsAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        for root in &self.search_roots {
            if let Ok(data) = fs::read(root.join(path)) {
                return Ok(Some(Cow::Owned(data)));
            }
        }
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();
        for root in &self.search_roots {
            if let Ok(entries) = fs::read_dir(root.join(path)) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        results.push(SharedString::from(name.to_string()));
                    }
                }
                break;
            }
        }
        Ok(results)
    }
}
