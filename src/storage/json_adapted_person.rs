use crate::domain::person::{Address, Email, Name, Person, Phone, Tag};
use crate::domain::value_object::ValueObject;
use crate::storage::null_as_empty;
use crate::utils::error::ValidationError;
use crate::utils::validation::require_field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const ENTITY: &str = "Person";

/// 標籤在 JSON 中是單純字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonAdaptedTag(String);

impl JsonAdaptedTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self(tag_name.into())
    }

    pub fn to_domain(&self) -> Result<Tag, ValidationError> {
        Tag::parse(&self.0)
    }
}

impl From<&Tag> for JsonAdaptedTag {
    fn from(source: &Tag) -> Self {
        Self(source.to_string())
    }
}

/// `Person` 的 JSON 持久化形式，欄位可能缺漏或格式錯誤
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedPerson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    tags: Vec<JsonAdaptedTag>,
}

impl JsonAdaptedPerson {
    pub fn new(
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        tags: Option<Vec<JsonAdaptedTag>>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.unwrap_or_default(),
        }
    }

    /// 還原為 `Person`。先轉換標籤，再依序檢查 name、phone、email、address。
    pub fn to_domain(&self) -> Result<Person, ValidationError> {
        let tags = self
            .tags
            .iter()
            .map(JsonAdaptedTag::to_domain)
            .collect::<Result<BTreeSet<_>, _>>()?;

        let name = require_field::<Name>(ENTITY, self.name.as_deref())?;
        let phone = require_field::<Phone>(ENTITY, self.phone.as_deref())?;
        let email = require_field::<Email>(ENTITY, self.email.as_deref())?;
        let address = require_field::<Address>(ENTITY, self.address.as_deref())?;

        Ok(Person::new(name, phone, email, address, tags))
    }
}

impl From<&Person> for JsonAdaptedPerson {
    fn from(source: &Person) -> Self {
        Self {
            name: Some(source.name().to_string()),
            phone: Some(source.phone().to_string()),
            email: Some(source.email().to_string()),
            address: Some(source.address().to_string()),
            tags: source.tags().iter().map(JsonAdaptedTag::from).collect(),
        }
    }
}
