pub mod condition;
pub mod definition;
pub mod field;
pub mod layout;

pub use condition::*;
pub use definition::*;
pub use field::*;
pub use layout::*;
