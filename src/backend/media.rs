//! Media Module
//!
//! Cover-image uploads. Files arrive as multipart form data, are written
//! below the configured media root under a random name, and are served
//! back by the static-file route at the public URL returned here.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::config::MediaConfig;

/// Maximum accepted upload size in bytes (5 MiB)
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Request body limit for the upload route
///
/// Axum's default body limit (2 MB) is smaller than [`MAX_UPLOAD_BYTES`],
/// so the upload route carries its own `DefaultBodyLimit` sized above the
/// cap; the extra megabyte absorbs multipart framing overhead. The
/// per-file cap itself is enforced in [`upload_image`].
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

/// Subdirectory below the media root for post cover images
const COVER_DIR: &str = "post-covers";

/// Response for a completed upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL at which the uploaded file is served
    pub url: String,
}

/// Extract and validate the file extension of an uploaded image
///
/// Only common web image formats are accepted; the stored name is a fresh
/// UUID plus this extension, never the client-supplied name.
fn image_extension(file_name: &str) -> Option<&str> {
    let ext = file_name.rsplit_once('.')?.1;
    match ext.to_ascii_lowercase().as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "webp" => Some(ext),
        _ => None,
    }
}

/// POST /api/media
///
/// Requires authentication. Accepts a single multipart field named `file`
/// and returns the public URL of the stored image.
pub async fn upload_image(
    State(media): State<MediaConfig>,
    AuthUser(viewer): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, BackendError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BackendError::validation("file", e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| BackendError::validation("file", "missing file name"))?;
        let ext = image_extension(&file_name)
            .ok_or_else(|| {
                BackendError::validation("file", "must be a png, jpg, jpeg, gif, or webp image")
            })?
            .to_ascii_lowercase();

        let data = field
            .bytes()
            .await
            .map_err(|e| BackendError::validation("file", e.to_string()))?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(BackendError::validation("file", "must be 5 MiB or smaller"));
        }
        if data.is_empty() {
            return Err(BackendError::validation("file", "must not be empty"));
        }

        let stored_name = format!("{}.{}", Uuid::new_v4(), ext);
        let dir = media.root.join(COVER_DIR);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&stored_name), &data).await?;

        let url = format!("{}/{}/{}", media.public_base, COVER_DIR, stored_name);
        tracing::info!("User {} uploaded {} ({} bytes)", viewer.user_id, url, data.len());

        return Ok(Json(UploadResponse { url }));
    }

    Err(BackendError::validation("file", "missing multipart field 'file'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert_eq!(image_extension("cover.png"), Some("png"));
        assert_eq!(image_extension("photo.JPEG"), Some("JPEG"));
        assert_eq!(image_extension("anim.webp"), Some("webp"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert_eq!(image_extension("script.svg"), None);
        assert_eq!(image_extension("binary.exe"), None);
        assert_eq!(image_extension("no_extension"), None);
        assert_eq!(image_extension(""), None);
    }
}
