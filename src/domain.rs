mod category;
mod email_address;
mod record_query;
mod sorting;

pub use category::*;
pub use email_address::*;
pub use record_query::*;
pub use sorting::*;
