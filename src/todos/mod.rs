pub mod model;
pub mod repository;
pub mod validator;

pub use model::ToDo;
pub use repository::ToDoRepository;
pub use validator::{validate, Violation};
