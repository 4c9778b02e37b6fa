use crate::utils::error::ValidationError;
use std::fmt;

/// 以格式不變量包裝原始字串的值物件。
///
/// 只能經由 [`ValueObject::parse`] 建構，因此任何存在的實例都已通過驗證。
pub trait ValueObject: Sized + fmt::Display {
    /// 型別名稱，用於缺欄位訊息（例如 `WeddingName`）
    const NAME: &'static str;

    /// 驗證失敗時顯示給使用者的限制說明
    const MESSAGE_CONSTRAINTS: &'static str;

    /// 驗證通過時回傳實例，否則回傳 `None`
    fn try_new(value: &str) -> Option<Self>;

    fn is_valid(value: &str) -> bool {
        Self::try_new(value).is_some()
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::try_new(value).ok_or(ValidationError::InvalidFormat {
            field: Self::NAME,
            message: Self::MESSAGE_CONSTRAINTS,
        })
    }
}

/// 為單一字串欄位的值物件實作 `Display`
macro_rules! string_value_object {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use string_value_object;
