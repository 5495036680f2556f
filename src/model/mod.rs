pub mod book;
pub mod fields;
pub mod record;

// Re-exports for convenience
pub use book::{AddressBook, UpcomingBirthday};
pub use fields::{Birthday, Name, PhoneNumber};
pub use record::Record;
