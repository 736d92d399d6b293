/// Introspection domain layer: query loading, request, response validation.
pub mod errors;
pub mod query;
pub mod request;
pub mod response;

pub use errors::IntrospectError;
pub use query::load;
pub use request::{build_client, execute};
pub use response::validate;
