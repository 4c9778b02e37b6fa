use crate::domain::person::Person;
use crate::domain::wedding::Wedding;
use crate::utils::error::ValidationError;

/// 通訊錄：聯絡人與婚禮清單，各自以同名規則去重。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
    weddings: Vec<Wedding>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn weddings(&self) -> &[Wedding] {
        &self.weddings
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ValidationError> {
        if self.has_person(&person) {
            return Err(ValidationError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    pub fn has_wedding(&self, wedding: &Wedding) -> bool {
        self.weddings.iter().any(|w| w.is_same_wedding(wedding))
    }

    pub fn add_wedding(&mut self, wedding: Wedding) -> Result<(), ValidationError> {
        if self.has_wedding(&wedding) {
            return Err(ValidationError::DuplicateWedding);
        }
        self.weddings.push(wedding);
        Ok(())
    }
}
