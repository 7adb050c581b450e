pub mod errors;
pub mod todo;

pub use errors::DomainError;
pub use todo::{Todo, TodoId};
