use crate::domain::value_object::ValueObject;
use crate::utils::error::{BookError, Result, ValidationError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 持久化欄位還原的共用流程：缺值檢查 → 格式檢查 → 建構值物件。
/// 第一個錯誤即中止。
pub fn require_field<T: ValueObject>(
    entity: &'static str,
    value: Option<&str>,
) -> std::result::Result<T, ValidationError> {
    let raw = value.ok_or(ValidationError::MissingField {
        entity,
        field: T::NAME,
    })?;
    T::parse(raw)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
