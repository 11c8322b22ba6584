use crate::error::{Error, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

const ALLOWED_EXTS: [&str; 5] = ["pdf", "doc", "docx", "txt", "rtf"];

/// CV files on local disk under `<root>/cv/`. Rows reference files by the
/// public URL (`/uploads/cv/<uuid>.<ext>`) that the static file mount serves.
#[derive(Clone)]
pub struct CvStorage {
    root: PathBuf,
}

impl CvStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Extension whitelist plus a magic-byte check for PDFs. Runs before
    /// anything touches the disk so a bad upload fails the request early.
    pub fn validate(filename: &str, data: &Bytes) -> Result<String> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_else(|| "bin".to_string());

        if !ALLOWED_EXTS.contains(&ext.as_str()) {
            return Err(Error::BadRequest(format!(
                "File type .{} is not allowed",
                ext
            )));
        }
        if ext == "pdf" && !data.starts_with(b"%PDF") {
            return Err(Error::BadRequest("Invalid PDF file content".into()));
        }
        Ok(ext)
    }

    /// First half of the submission's two-phase commit: write the file and
    /// return the URL the new row will reference. The caller removes the
    /// file again if the insert does not go through.
    pub async fn store(&self, filename: &str, data: &Bytes) -> Result<String> {
        let ext = Self::validate(filename, data)?;
        let dir = self.root.join("cv");
        fs::create_dir_all(&dir).await?;

        let file_id = Uuid::new_v4();
        let file_name = format!("{}.{}", file_id, ext);
        fs::write(dir.join(&file_name), data).await.map_err(|e| {
            tracing::error!("Failed to write CV file: {}", e);
            Error::Internal(format!("Failed to save file: {}", e))
        })?;

        Ok(format!("/uploads/cv/{}", file_name))
    }

    /// Best-effort removal by public URL. A missing file, a URL outside the
    /// uploads mount or a traversal attempt all come back as `false`.
    pub async fn delete_by_url(&self, url: &str) -> bool {
        let Some(relative) = url.strip_prefix("/uploads/") else {
            return false;
        };
        if relative.split('/').any(|part| part == ".." || part.is_empty()) {
            return false;
        }
        fs::remove_file(self.root.join(relative)).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_whitelisted_extensions() {
        let data = Bytes::from_static(b"hello");
        for name in ["cv.doc", "cv.docx", "cv.txt", "cv.rtf", "CV.DOCX"] {
            assert!(CvStorage::validate(name, &data).is_ok(), "{}", name);
        }
    }

    #[test]
    fn validate_rejects_other_extensions() {
        let data = Bytes::from_static(b"hello");
        assert!(CvStorage::validate("cv.exe", &data).is_err());
        assert!(CvStorage::validate("cv.png", &data).is_err());
        assert!(CvStorage::validate("cv", &data).is_err());
    }

    #[test]
    fn validate_checks_pdf_magic() {
        assert!(CvStorage::validate("cv.pdf", &Bytes::from_static(b"%PDF-1.7 rest")).is_ok());
        assert!(CvStorage::validate("cv.pdf", &Bytes::from_static(b"MZ not a pdf")).is_err());
    }

    #[tokio::test]
    async fn store_then_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CvStorage::new(dir.path());

        let url = storage
            .store("resume.pdf", &Bytes::from_static(b"%PDF-1.4 content"))
            .await
            .unwrap();
        assert!(url.starts_with("/uploads/cv/"));
        assert!(url.ends_with(".pdf"));

        let on_disk = dir.path().join(url.strip_prefix("/uploads/").unwrap());
        assert_eq!(fs::read(&on_disk).await.unwrap(), b"%PDF-1.4 content");

        assert!(storage.delete_by_url(&url).await);
        assert!(!on_disk.exists());
    }

    #[tokio::test]
    async fn delete_is_best_effort() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CvStorage::new(dir.path());
        assert!(!storage.delete_by_url("/uploads/cv/missing.pdf").await);
        assert!(!storage.delete_by_url("https://elsewhere/cv.pdf").await);
        assert!(!storage.delete_by_url("/uploads/../etc/passwd").await);
    }
}
