//! CrudService: typed CRUD over the safe SQL builder, plus request body validation.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;
