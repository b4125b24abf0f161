pub mod error;
pub mod lookup;
pub mod preprocess;

pub use error::LookupError;
pub use lookup::{Resolution, Resolver};
