use std::path::{Path, PathBuf};

use crate::error::AppError;

/// File categories map to subdirectories of the upload root and to URL
/// prefixes under `/uploads`.
#[derive(Debug, Clone, Copy)]
pub enum UploadKind {
    Material,
    Certificate,
    Avatar,
}

impl UploadKind {
    pub fn directory(&self) -> &'static str {
        match self {
            UploadKind::Material => "materials",
            UploadKind::Certificate => "certificates",
            UploadKind::Avatar => "avatars",
        }
    }
}

/// Keeps only a safe alphanumeric extension from a client-supplied file
/// name. Anything else (path separators, double extensions, empty names)
/// collapses to "bin".
pub fn safe_extension(file_name: &str) -> String {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    if !extension.is_empty()
        && extension.len() <= 10
        && extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        extension.to_ascii_lowercase()
    } else {
        "bin".to_string()
    }
}

/// Writes an uploaded file under `{upload_dir}/{kind}/` with a fresh UUID
/// name and returns the public URL path for it.
pub async fn store_file(
    upload_dir: &str,
    kind: UploadKind,
    original_name: &str,
    bytes: &[u8],
) -> Result<String, AppError> {
    let extension = safe_extension(original_name);
    let file_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);

    let mut path = PathBuf::from(upload_dir);
    path.push(kind.directory());
    tokio::fs::create_dir_all(&path).await?;
    path.push(&file_name);

    tokio::fs::write(&path, bytes).await?;

    Ok(format!("/uploads/{}/{}", kind.directory(), file_name))
}

/// Removes a stored upload given the public URL `store_file` returned, so a
/// failed database write does not leave an orphaned file behind. Already
/// missing files are not an error.
pub async fn discard_file(upload_dir: &str, file_url: &str) -> Result<(), AppError> {
    let Some(relative) = file_url.strip_prefix("/uploads/") else {
        return Ok(());
    };

    let mut path = PathBuf::from(upload_dir);
    path.push(relative);

    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extension_is_sanitized() {
        assert_eq!(safe_extension("report.pdf"), "pdf");
        assert_eq!(safe_extension("photo.JPG"), "jpg");
        assert_eq!(safe_extension("archive.tar.gz"), "gz");
        assert_eq!(safe_extension("no_extension"), "bin");
        assert_eq!(safe_extension("evil.p/../df"), "bin");
        assert_eq!(safe_extension(""), "bin");
    }

    #[tokio::test]
    async fn stored_file_can_be_discarded() {
        let dir = std::env::temp_dir().join(format!("uploads-{}", uuid::Uuid::new_v4()));
        let dir = dir.to_str().unwrap().to_string();

        let url = store_file(&dir, UploadKind::Material, "notes.pdf", b"data")
            .await
            .unwrap();
        let path = Path::new(&dir).join(url.strip_prefix("/uploads/").unwrap());
        assert!(path.exists());

        discard_file(&dir, &url).await.unwrap();
        assert!(!path.exists());

        // Discarding the same URL twice is a no-op.
        discard_file(&dir, &url).await.unwrap();
    }
}
