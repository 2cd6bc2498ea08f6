mod delay;
mod field;
mod state;
mod transition;

pub use delay::*;
pub use field::*;
pub use state::*;
pub use transition::*;
