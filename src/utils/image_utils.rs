use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

fn strip_data_url_prefix(data: &str) -> &str {
    if data.starts_with("data:image") {
        data.split(',').nth(1).unwrap_or(data)
    } else {
        data
    }
}

/// Decode a base64 image and write it under `media_root/folder/` with a
/// generated filename. Returns the public reference for the stored blob.
/// Blobs are not cleaned up if the surrounding request fails later.
pub async fn store_image(
    media_root: &str,
    media_base_url: &str,
    folder: &str,
    base64_data: &str,
) -> Result<String, ImageError> {
    let bytes = STANDARD.decode(strip_data_url_prefix(base64_data))?;

    let relative = format!("{}/{}.jpg", folder, Uuid::new_v4());
    let target = Path::new(media_root).join(&relative);
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&target, &bytes).await?;

    Ok(format!(
        "{}/{}",
        media_base_url.trim_end_matches('/'),
        relative
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_url_prefix() {
        assert_eq!(
            strip_data_url_prefix("data:image/jpeg;base64,aGVsbG8="),
            "aGVsbG8="
        );
        assert_eq!(strip_data_url_prefix("aGVsbG8="), "aGVsbG8=");
    }

    #[tokio::test]
    async fn stores_a_decoded_image_and_returns_a_reference() {
        let media_root = std::env::temp_dir().join(format!("ressq-test-{}", Uuid::new_v4()));
        let media_root = media_root.to_string_lossy().to_string();

        let reference = store_image(&media_root, "http://localhost:8000/media/", "profile", "aGVsbG8=")
            .await
            .unwrap();

        assert!(reference.starts_with("http://localhost:8000/media/profile/"));
        assert!(reference.ends_with(".jpg"));

        let relative = reference
            .strip_prefix("http://localhost:8000/media/")
            .unwrap();
        let stored = tokio::fs::read(Path::new(&media_root).join(relative))
            .await
            .unwrap();
        assert_eq!(stored, b"hello");

        tokio::fs::remove_dir_all(&media_root).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_invalid_base64() {
        let media_root = std::env::temp_dir().join(format!("ressq-test-{}", Uuid::new_v4()));
        let media_root = media_root.to_string_lossy().to_string();

        let result = store_image(&media_root, "http://localhost", "idproof", "not base64!!").await;
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }
}
