//! Route tables: operational routes and the resource binding table.

mod common;
mod resource;

pub use common::common_routes;
pub use resource::api_routes;
