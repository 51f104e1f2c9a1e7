//! Product image references
//!
//! Uploaded images are stored inline on the product as `data:` URIs.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::{ClientError, ClientResult};

/// Read an image file and encode it as `data:<mime>;base64,<payload>`
pub fn image_data_uri(path: impl AsRef<Path>) -> ClientResult<String> {
    let path = path.as_ref();
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(ClientError::UnsupportedImage(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    tracing::debug!(file = %path.display(), size = bytes.len(), %mime, "Encoding product image");
    Ok(encode_data_uri(mime.essence_str(), &bytes))
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_file_becomes_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scone.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let uri = image_data_uri(&path).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_non_image_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        let err = image_data_uri(&path).unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedImage(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_file() {
        let err = image_data_uri("/definitely/not/here.jpg").unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
