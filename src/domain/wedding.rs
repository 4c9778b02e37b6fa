use crate::domain::person::Person;
use crate::domain::value_object::{string_value_object, ValueObject};
use chrono::NaiveDateTime;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

/// `Datetime` 的標準字串格式
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

static WEDDING_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 &'.,\-]*$").expect("wedding name regex is valid")
});

static VENUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s].*$").expect("venue regex is valid"));

// chrono 接受未補零、多餘空白與正負號，先以固定寬度檢查
static DATETIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$").expect("datetime regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeddingName(String);

impl ValueObject for WeddingName {
    const NAME: &'static str = "WeddingName";
    const MESSAGE_CONSTRAINTS: &'static str = "Wedding names should only contain alphanumeric \
characters, spaces and the characters & ' . , -, and it should not be blank";

    fn try_new(value: &str) -> Option<Self> {
        WEDDING_NAME_REGEX
            .is_match(value)
            .then(|| Self(value.to_string()))
    }
}

string_value_object!(WeddingName);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Venue(String);

impl ValueObject for Venue {
    const NAME: &'static str = "Venue";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Venues can take any values, and it should not be blank";

    fn try_new(value: &str) -> Option<Self> {
        VENUE_REGEX.is_match(value).then(|| Self(value.to_string()))
    }
}

string_value_object!(Venue);

/// 婚禮日期時間，精確到分鐘。輸出一律為 `YYYY-MM-DD HH:MM`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Datetime(NaiveDateTime);

impl ValueObject for Datetime {
    const NAME: &'static str = "Datetime";
    const MESSAGE_CONSTRAINTS: &'static str = "Datetimes should be in the format \
YYYY-MM-DD HH:MM and represent a valid date and time";

    fn try_new(value: &str) -> Option<Self> {
        if !DATETIME_REGEX.is_match(value) {
            return None;
        }
        NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
            .ok()
            .map(Self)
    }
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

/// 婚禮活動：名稱、場地、時間與參與者集合。建立後不可變。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wedding {
    wedding_name: WeddingName,
    venue: Venue,
    datetime: Datetime,
    participants: BTreeSet<Person>,
}

impl Wedding {
    pub fn new(
        wedding_name: WeddingName,
        venue: Venue,
        datetime: Datetime,
        participants: BTreeSet<Person>,
    ) -> Self {
        Self {
            wedding_name,
            venue,
            datetime,
            participants,
        }
    }

    pub fn wedding_name(&self) -> &WeddingName {
        &self.wedding_name
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn datetime(&self) -> &Datetime {
        &self.datetime
    }

    pub fn participants(&self) -> &BTreeSet<Person> {
        &self.participants
    }

    pub fn is_same_wedding(&self, other: &Wedding) -> bool {
        self.wedding_name == other.wedding_name
    }
}

impl fmt::Display for Wedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Venue: {}; Datetime: {}; Participants: {}",
            self.wedding_name,
            self.venue,
            self.datetime,
            self.participants.len()
        )
    }
}
