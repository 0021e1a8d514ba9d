use crate::utils::error::{FinderError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FinderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// UK postcodes compact to 5-7 alphanumeric characters once the inner
/// space is removed (e.g. "E14 4PU" -> "E144PU").
pub fn validate_postcode(field_name: &str, postcode: &str) -> Result<()> {
    validate_non_empty_string(field_name, postcode)?;

    let compact: String = postcode.split_whitespace().collect();
    if compact.len() < 5 || compact.len() > 7 {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: postcode.to_string(),
            reason: "Postcode must be 5-7 characters excluding spaces".to_string(),
        });
    }

    if !compact.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: postcode.to_string(),
            reason: "Postcode must contain only letters and digits".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(FinderError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(FinderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_endpoint", "https://example.com").is_ok());
        assert!(validate_url("api_endpoint", "http://example.com").is_ok());
        assert!(validate_url("api_endpoint", "").is_err());
        assert!(validate_url("api_endpoint", "invalid-url").is_err());
        assert!(validate_url("api_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_postcode() {
        assert!(validate_postcode("home_postcode", "E14 4PU").is_ok());
        assert!(validate_postcode("home_postcode", "E144PU").is_ok());
        assert!(validate_postcode("home_postcode", "SW1A 2AA").is_ok());
        assert!(validate_postcode("home_postcode", "").is_err());
        assert!(validate_postcode("home_postcode", "E1").is_err());
        assert!(validate_postcode("home_postcode", "E14 4PU EXTRA").is_err());
        assert!(validate_postcode("home_postcode", "E14-4PU").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["people.csv".to_string()];
        assert!(validate_file_extensions("people_file", &files, &["csv"]).is_ok());

        let invalid_files = vec!["people.txt".to_string()];
        assert!(validate_file_extensions("people_file", &invalid_files, &["csv"]).is_err());

        let no_extension = vec!["people".to_string()];
        assert!(validate_file_extensions("people_file", &no_extension, &["csv"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("request_timeout", 30u64, 1, 300).is_ok());
        assert!(validate_range("request_timeout", 0u64, 1, 300).is_err());
        assert!(validate_range("request_timeout", 301u64, 1, 300).is_err());
    }
}
