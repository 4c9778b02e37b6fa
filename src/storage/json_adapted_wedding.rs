use crate::domain::person::Person;
use crate::domain::wedding::{Datetime, Venue, Wedding, WeddingName};
use crate::storage::json_adapted_person::JsonAdaptedPerson;
use crate::storage::null_as_empty;
use crate::utils::error::ValidationError;
use crate::utils::validation::require_field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const ENTITY: &str = "Wedding";

/// `Wedding` 的 JSON 持久化形式。
///
/// 讀入時欄位可能為 `null` 或格式錯誤；由 [`JsonAdaptedWedding::to_domain`]
/// 負責全部驗證。參與者保留原始順序，還原時才收斂為集合。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedWedding {
    #[serde(default)]
    wedding_name: Option<String>,
    #[serde(default)]
    venue: Option<String>,
    #[serde(default)]
    date_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    participants: Vec<JsonAdaptedPerson>,
}

impl JsonAdaptedWedding {
    pub fn new(
        wedding_name: Option<String>,
        venue: Option<String>,
        date_time: Option<String>,
        participants: Option<Vec<JsonAdaptedPerson>>,
    ) -> Self {
        Self {
            wedding_name,
            venue,
            date_time,
            participants: participants.unwrap_or_default(),
        }
    }

    pub fn participants(&self) -> &[JsonAdaptedPerson] {
        &self.participants
    }

    /// 還原為 `Wedding`，遇到第一個錯誤即中止。
    ///
    /// 參與者先於婚禮本身的欄位驗證；接著依序為 name、venue、datetime。
    ///
    /// # Errors
    /// 參與者驗證失敗時原樣回傳其錯誤；欄位為 `null` 時回傳
    /// `MissingField`；格式不符時回傳 `InvalidFormat`。
    pub fn to_domain(&self) -> Result<Wedding, ValidationError> {
        let participant_list = self
            .participants
            .iter()
            .map(JsonAdaptedPerson::to_domain)
            .collect::<Result<Vec<Person>, _>>()?;

        let wedding_name = require_field::<WeddingName>(ENTITY, self.wedding_name.as_deref())?;
        let venue = require_field::<Venue>(ENTITY, self.venue.as_deref())?;
        let datetime = require_field::<Datetime>(ENTITY, self.date_time.as_deref())?;

        let participants: BTreeSet<Person> = participant_list.into_iter().collect();
        Ok(Wedding::new(wedding_name, venue, datetime, participants))
    }
}

impl From<&Wedding> for JsonAdaptedWedding {
    fn from(source: &Wedding) -> Self {
        Self {
            wedding_name: Some(source.wedding_name().to_string()),
            venue: Some(source.venue().to_string()),
            date_time: Some(source.datetime().to_string()),
            participants: source
                .participants()
                .iter()
                .map(JsonAdaptedPerson::from)
                .collect(),
        }
    }
}

impl TryFrom<&JsonAdaptedWedding> for Wedding {
    type Error = ValidationError;

    fn try_from(value: &JsonAdaptedWedding) -> Result<Self, Self::Error> {
        value.to_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::ValueObject;
    use serde_json::json;

    fn person_json() -> serde_json::Value {
        json!({
            "name": "Alice Pauline",
            "phone": "94351253",
            "email": "alice@example.com",
            "address": "123, Jurong West Ave 6, #08-111",
            "tags": ["friends"]
        })
    }

    fn wedding_json() -> serde_json::Value {
        json!({
            "weddingName": "Alice & Bob",
            "venue": "Garden",
            "dateTime": "2024-12-25 18:00",
            "participants": [person_json()]
        })
    }

    fn adapted(value: serde_json::Value) -> JsonAdaptedWedding {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_wedding_converts() {
        let wedding = adapted(wedding_json()).to_domain().unwrap();
        assert_eq!(wedding.wedding_name().to_string(), "Alice & Bob");
        assert_eq!(wedding.venue().to_string(), "Garden");
        assert_eq!(wedding.datetime().to_string(), "2024-12-25 18:00");
        assert_eq!(wedding.participants().len(), 1);
    }

    #[test]
    fn test_null_wedding_name() {
        let mut value = wedding_json();
        value["weddingName"] = serde_json::Value::Null;
        let err = adapted(value).to_domain().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                entity: "Wedding",
                field: "WeddingName"
            }
        );
        assert_eq!(err.to_string(), "Wedding's WeddingName field is missing!");
    }

    #[test]
    fn test_missing_checks_ignore_other_fields() {
        // venue 為 null，即使 datetime 也無效仍回報 venue
        let mut value = wedding_json();
        value["venue"] = serde_json::Value::Null;
        value["dateTime"] = json!("whenever");
        let err = adapted(value).to_domain().unwrap_err();
        assert_eq!(err.to_string(), "Wedding's Venue field is missing!");

        let mut value = wedding_json();
        value.as_object_mut().unwrap().remove("dateTime");
        let err = adapted(value).to_domain().unwrap_err();
        assert_eq!(err.to_string(), "Wedding's Datetime field is missing!");
    }

    #[test]
    fn test_invalid_formats() {
        let mut value = wedding_json();
        value["weddingName"] = json!("  ");
        assert_eq!(
            adapted(value).to_domain().unwrap_err().to_string(),
            WeddingName::MESSAGE_CONSTRAINTS
        );

        let mut value = wedding_json();
        value["venue"] = json!(" Garden");
        assert_eq!(
            adapted(value).to_domain().unwrap_err().to_string(),
            Venue::MESSAGE_CONSTRAINTS
        );

        let mut value = wedding_json();
        value["dateTime"] = json!("not-a-date");
        let err = adapted(value).to_domain().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "Datetime",
                message: Datetime::MESSAGE_CONSTRAINTS
            }
        );
    }

    #[test]
    fn test_invalid_participant_fails_first() {
        let mut bad_person = person_json();
        bad_person["phone"] = json!("12");
        let value = json!({
            "weddingName": null,
            "venue": "Garden",
            "dateTime": "2024-12-25 18:00",
            "participants": [bad_person]
        });
        let err = adapted(value).to_domain().unwrap_err();
        assert_eq!(err.to_string(), crate::domain::person::Phone::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_duplicate_participants_collapse() {
        let mut value = wedding_json();
        value["participants"] = json!([person_json(), person_json()]);
        let dto = adapted(value);
        assert_eq!(dto.participants().len(), 2);
        assert_eq!(dto.to_domain().unwrap().participants().len(), 1);
    }

    #[test]
    fn test_null_participants_is_empty() {
        let mut value = wedding_json();
        value["participants"] = serde_json::Value::Null;
        assert!(adapted(value).to_domain().unwrap().participants().is_empty());

        let mut value = wedding_json();
        value.as_object_mut().unwrap().remove("participants");
        assert!(adapted(value).to_domain().unwrap().participants().is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut value = wedding_json();
        value["theme"] = json!("rustic");
        assert!(adapted(value).to_domain().is_ok());
    }

    #[test]
    fn test_from_domain_round_trip() {
        let wedding = adapted(wedding_json()).to_domain().unwrap();
        let dto = JsonAdaptedWedding::from(&wedding);
        assert_eq!(dto, adapted(wedding_json()));
        assert_eq!(Wedding::try_from(&dto).unwrap(), wedding);
    }

    #[test]
    fn test_serializes_camel_case() {
        let dto = JsonAdaptedWedding::new(
            Some("Alice & Bob".to_string()),
            Some("Garden".to_string()),
            None,
            None,
        );
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            json!({
                "weddingName": "Alice & Bob",
                "venue": "Garden",
                "dateTime": null,
                "participants": []
            })
        );
    }
}
