mod query;
mod registration;
mod user;

pub use query::QueryResult;
pub use registration::{RegisterResponse, RegistrationInput};
pub use user::UserRecord;
