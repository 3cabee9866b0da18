use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Stores rectification evidence uploads under the configured uploads path.
/// Stored names are returned relative to that path so they can be served
/// from `/uploads/`.
#[derive(Clone)]
pub struct EvidenceService {
    uploads_path: PathBuf,
}

impl EvidenceService {
    #[must_use]
    pub fn new(uploads_path: &str) -> Self {
        Self {
            uploads_path: PathBuf::from(uploads_path),
        }
    }

    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let dir = self.uploads_path.join("evidence");
        tokio::fs::create_dir_all(&dir)
            .await
            .context("Failed to create evidence directory")?;

        let stored_name = format!("{}_{}", Uuid::new_v4().simple(), sanitize(original_name));
        let path = dir.join(&stored_name);

        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write evidence file: {}", path.display()))?;

        info!("Stored rectification evidence: {}", path.display());

        Ok(format!("evidence/{stored_name}"))
    }
}

/// Strip path separators and anything outside a conservative charset.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize("photo 1.jpg"), "photo_1.jpg");
        assert_eq!(sanitize(""), "upload");
    }
}
