use crate::domain::value_object::{string_value_object, ValueObject};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name regex is valid"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone regex is valid"));

// local-part@domain，最後一段 domain label 至少兩個字元
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*",
        r"@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*",
        r"([A-Za-z0-9]+(-[A-Za-z0-9]+)*){2,}$",
    ))
    .expect("email regex is valid")
});

static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s].*$").expect("address regex is valid"));

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl ValueObject for Name {
    const NAME: &'static str = "Name";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    fn try_new(value: &str) -> Option<Self> {
        NAME_REGEX.is_match(value).then(|| Self(value.to_string()))
    }
}

string_value_object!(Name);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl ValueObject for Phone {
    const NAME: &'static str = "Phone";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    fn try_new(value: &str) -> Option<Self> {
        PHONE_REGEX.is_match(value).then(|| Self(value.to_string()))
    }
}

string_value_object!(Phone);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl ValueObject for Email {
    const NAME: &'static str = "Email";
    const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). \
The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    fn try_new(value: &str) -> Option<Self> {
        EMAIL_REGEX.is_match(value).then(|| Self(value.to_string()))
    }
}

string_value_object!(Email);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl ValueObject for Address {
    const NAME: &'static str = "Address";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    fn try_new(value: &str) -> Option<Self> {
        ADDRESS_REGEX.is_match(value).then(|| Self(value.to_string()))
    }
}

string_value_object!(Address);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl ValueObject for Tag {
    const NAME: &'static str = "Tag";
    const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    fn try_new(value: &str) -> Option<Self> {
        TAG_REGEX.is_match(value).then(|| Self(value.to_string()))
    }
}

string_value_object!(Tag);

/// 通訊錄中的聯絡人。所有欄位都已通過驗證，建立後不可變。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// 同名即視為同一人（通訊錄去重用，比 `==` 寬鬆）
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
