use crate::utils::error::{ForgeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ForgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ForgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The domain is used verbatim; only a blank value is rejected.
pub fn validate_domain(field_name: &str, domain: &str) -> Result<()> {
    validate_non_empty_string(field_name, domain)
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ForgeError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ForgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(ForgeError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "upns.txt").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_domain() {
        assert!(validate_domain("domain", "company.com").is_ok());
        assert!(validate_domain("domain", "abc.txt").is_ok());
        assert!(validate_domain("domain", "CORP").is_ok());
        assert!(validate_domain("domain", "").is_err());
        assert!(validate_domain("domain", "   ").is_err());
        assert!(validate_domain("domain", "corp local").is_ok());
        assert!(validate_domain("domain", "user@company.com").is_ok());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("corp.local".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("domain", &present).unwrap(), "corp.local");
        assert!(matches!(
            validate_required_field("domain", &missing),
            Err(ForgeError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("users", &["Jane Doe".to_string()]).is_ok());
        assert!(validate_non_empty_list("users", &[]).is_err());
    }
}
