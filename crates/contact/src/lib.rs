mod delivery;
mod form;
mod root;
mod types;

pub use delivery::*;
pub use form::*;
pub use root::*;
pub use types::*;
