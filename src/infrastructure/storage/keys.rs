use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use crate::domain::images::image_extension;

pub const IMAGE_DIR: &str = "images";

/// Fresh object key for an upload: `images/<uuid>.<ext>`. The original name
/// only contributes its (validated) extension.
pub fn build_image_key(filename: &str) -> String {
    let ext = image_extension(filename).unwrap_or_else(|| "bin".to_string());
    format!("{}/{}.{}", IMAGE_DIR, Uuid::new_v4(), ext)
}

/// Joins path-like prefixes with `/`, skipping empty parts.
pub fn join_key(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn public_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key.trim_start_matches('/'))
}

/// Inverse of `public_url`. Returns None for URLs outside `base` or keys
/// that would escape it.
pub fn key_from_url(base: &str, url: &str) -> Option<String> {
    let prefix = format!("{}/", base.trim_end_matches('/'));
    let rest = url.strip_prefix(&prefix)?;
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    safe_relative_path(rest)?;
    Some(rest.to_string())
}

pub fn normalize_prefix(root: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for comp in root.components() {
        if let Component::Normal(os) = comp {
            let s = os.to_string_lossy();
            if !s.is_empty() && s != "." {
                parts.push(s.replace('\\', "/"));
            }
        }
    }
    parts.join("/")
}

// Only plain components; rejects `..`, roots and empty paths
pub fn safe_relative_path(key: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(key).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => continue,
            _ => return None,
        }
    }
    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}
