pub mod json_adapted_person;
pub mod json_adapted_wedding;
pub mod json_address_book_storage;
pub mod json_serializable_address_book;
pub mod local;

pub use json_adapted_person::{JsonAdaptedPerson, JsonAdaptedTag};
pub use json_adapted_wedding::JsonAdaptedWedding;
pub use json_address_book_storage::JsonAddressBookStorage;
pub use json_serializable_address_book::JsonSerializableAddressBook;
pub use local::LocalStorage;

use serde::{Deserialize, Deserializer};

/// 清單欄位為 `null` 時視為空清單
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
