mod brands;
mod records;
mod subscribers;

pub use brands::*;
pub use records::*;
pub use subscribers::*;
