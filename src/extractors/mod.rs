pub mod validated;

pub use validated::ValidatedJson;
