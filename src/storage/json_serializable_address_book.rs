use crate::domain::AddressBook;
use crate::storage::json_adapted_person::JsonAdaptedPerson;
use crate::storage::json_adapted_wedding::JsonAdaptedWedding;
use crate::storage::null_as_empty;
use crate::utils::error::ValidationError;
use serde::{Deserialize, Serialize};

/// 通訊錄資料檔的頂層 JSON 結構
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default, deserialize_with = "null_as_empty")]
    persons: Vec<JsonAdaptedPerson>,
    #[serde(default, deserialize_with = "null_as_empty")]
    weddings: Vec<JsonAdaptedWedding>,
}

impl JsonSerializableAddressBook {
    pub fn new(persons: Vec<JsonAdaptedPerson>, weddings: Vec<JsonAdaptedWedding>) -> Self {
        Self { persons, weddings }
    }

    /// 先還原所有聯絡人，再還原婚禮；同名者視為重複。
    pub fn to_domain(&self) -> Result<AddressBook, ValidationError> {
        let mut book = AddressBook::new();
        for adapted in &self.persons {
            book.add_person(adapted.to_domain()?)?;
        }
        for adapted in &self.weddings {
            book.add_wedding(adapted.to_domain()?)?;
        }
        Ok(book)
    }
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(source: &AddressBook) -> Self {
        Self {
            persons: source.persons().iter().map(JsonAdaptedPerson::from).collect(),
            weddings: source.weddings().iter().map(JsonAdaptedWedding::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "phone": "94351253",
            "email": "someone@example.com",
            "address": "Blk 30 Geylang Street 29, #06-40",
            "tags": []
        })
    }

    #[test]
    fn test_typical_book() {
        let book: JsonSerializableAddressBook = serde_json::from_value(json!({
            "persons": [person("Alice Pauline"), person("Benson Meier")],
            "weddings": [{
                "weddingName": "Alice & Benson",
                "venue": "Garden",
                "dateTime": "2024-12-25 18:00",
                "participants": [person("Alice Pauline"), person("Benson Meier")]
            }]
        }))
        .unwrap();
        let book = book.to_domain().unwrap();
        assert_eq!(book.persons().len(), 2);
        assert_eq!(book.weddings().len(), 1);
        assert_eq!(book.weddings()[0].participants().len(), 2);
    }

    #[test]
    fn test_duplicate_persons() {
        let book: JsonSerializableAddressBook = serde_json::from_value(json!({
            "persons": [person("Alice Pauline"), person("Alice Pauline")]
        }))
        .unwrap();
        assert_eq!(
            book.to_domain().unwrap_err().to_string(),
            "Persons list contains duplicate person(s)."
        );
    }

    #[test]
    fn test_duplicate_weddings() {
        let wedding = json!({
            "weddingName": "Alice & Bob",
            "venue": "Garden",
            "dateTime": "2024-12-25 18:00"
        });
        let book: JsonSerializableAddressBook = serde_json::from_value(json!({
            "persons": null,
            "weddings": [wedding.clone(), wedding]
        }))
        .unwrap();
        assert_eq!(
            book.to_domain().unwrap_err(),
            ValidationError::DuplicateWedding
        );
    }

    #[test]
    fn test_empty_object_is_empty_book() {
        let book: JsonSerializableAddressBook = serde_json::from_value(json!({})).unwrap();
        assert_eq!(book.to_domain().unwrap(), AddressBook::new());
    }
}
