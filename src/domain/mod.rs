// Domain layer: value objects, entities and ports. Storage formats live in `crate::storage`.

pub mod address_book;
pub mod person;
pub mod ports;
pub mod value_object;
pub mod wedding;

pub use address_book::AddressBook;
pub use person::Person;
pub use value_object::ValueObject;
pub use wedding::Wedding;
