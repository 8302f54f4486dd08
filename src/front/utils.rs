use anyhow::bail;
use futures::TryStreamExt;
use std::path::Path;

use super::{errors, forms};
use crate::{consts, models};

/// Maps validation failures into a 400 response
pub fn invalid_form(fields: Vec<forms::FieldError>) -> ntex::web::Error {
    errors::UserError::FormInputValueError(fields).into()
}

/// Concats all the [bytes](ntex::util::Bytes) extracted from the field,
/// failing on the first broken chunk
pub async fn get_bytes_value(field: ntex_multipart::Field) -> anyhow::Result<Vec<u8>> {
    let chunks = field
        .try_collect::<Vec<ntex::util::Bytes>>()
        .await
        .map_err(|e| anyhow::anyhow!("photo upload was interrupted: {e}"))?;

    Ok(chunks.concat())
}

pub fn get_header_str_value(headers: &ntex::http::HeaderMap, key: &str) -> String {
    let default_header_value = ntex::http::header::HeaderValue::from_static("");

    headers
        .get(key)
        .unwrap_or(&default_header_value)
        .to_str()
        .unwrap_or_default()
        .to_string()
}

fn get_filename(content_disposition: &str) -> Option<String> {
    content_disposition
        .split(';')
        .map(str::trim)
        .find_map(|s| s.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
}

pub fn get_filename_extension(content_disposition: &str) -> anyhow::Result<String> {
    let filename = get_filename(content_disposition).unwrap_or_default();

    if let Some(extension) = Path::new(&filename).extension().and_then(|e| e.to_str()) {
        return Ok(extension.trim().to_lowercase());
    }

    bail!("filename extension couldnt be found in the request content_disposition form")
}

/// Reads the `photo` image field of a multipart body
pub async fn deserialize_photo(
    mut payload: ntex_multipart::Multipart,
) -> anyhow::Result<models::Pic> {
    while let Ok(Some(field)) = payload.try_next().await {
        let content_disposition = get_header_str_value(field.headers(), "content-disposition");
        let mime_type = field.content_type().essence_str().to_string();

        if !(mime_type.contains("image") && content_disposition.contains("photo")) {
            continue;
        }

        let filename_extension = get_filename_extension(&content_disposition)?;
        if !consts::ACCEPTED_IMAGE_EXTENSIONS.contains(&filename_extension.as_str()) {
            bail!("image extension {filename_extension} is not accepted")
        }

        let body = get_bytes_value(field).await?;
        if body.len() > consts::PET_PHOTO_MAX_SIZE_BYTES {
            bail!(
                "image is to big. max size: {}",
                consts::PET_PHOTO_MAX_SIZE_BYTES
            )
        }

        return Ok(models::Pic {
            filename: get_filename(&content_disposition).unwrap_or_default(),
            filename_extension,
            mime_type,
            body,
        });
    }

    bail!("photo field is missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_filename_extension() {
        let content_disposition = r#"form-data; name="photo"; filename="Max.PNG""#;

        assert_eq!(get_filename_extension(content_disposition).unwrap(), "png");
        assert_eq!(get_filename(content_disposition).as_deref(), Some("Max.PNG"));
        assert!(get_filename_extension(r#"form-data; name="photo""#).is_err());
    }

    #[test]
    fn test_get_header_str_value_defaults_to_empty() {
        let headers = ntex::http::HeaderMap::new();

        assert_eq!(get_header_str_value(&headers, "content-disposition"), "");
    }
}
