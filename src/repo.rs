mod records;
mod subscribers;

pub use records::*;
pub use subscribers::*;
