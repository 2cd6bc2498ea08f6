mod delivery;
mod handler;
mod types;
mod validation;

pub use delivery::*;
pub use handler::*;
pub use types::*;
pub use validation::*;
