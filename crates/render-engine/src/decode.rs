//! Image decoding.
//!
//! A source that fails to decode never becomes a frame or content item; the
//! caller decides how to surface the error.

use std::path::{Path, PathBuf};

use framer_common::error::{FramerError, FramerResult};

use crate::raster::DecodedImage;

/// Decode an encoded image (PNG, JPEG, ...) from memory.
pub fn decode_image(bytes: &[u8]) -> FramerResult<DecodedImage> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| FramerError::decode(format!("Unsupported or malformed image data: {e}")))?;
    Ok(DecodedImage::new(image.to_rgba8()))
}

/// Read and decode an image file.
pub async fn load_image(path: &Path) -> FramerResult<DecodedImage> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FramerError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    decode_image(&bytes).map_err(|e| match e {
        FramerError::Decode { message } => {
            FramerError::decode(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

/// Images that loaded, in input order, plus the paths that did not.
#[derive(Debug, Default)]
pub struct LoadedImages {
    pub images: Vec<DecodedImage>,
    pub failures: Vec<(PathBuf, FramerError)>,
}

/// Load several images sequentially, keeping going past failures.
pub async fn load_images(paths: &[PathBuf]) -> LoadedImages {
    let mut loaded = LoadedImages::default();
    for path in paths {
        match load_image(path).await {
            Ok(image) => {
                tracing::debug!(path = %path.display(), "Image loaded");
                loaded.images.push(image);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping image that failed to load");
                loaded.failures.push((path.clone(), e));
            }
        }
    }
    loaded
}
