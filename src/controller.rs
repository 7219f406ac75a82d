/// Brand history endpoints
pub mod brands;
/// Disclosure record listing endpoints
pub mod records;
/// Subscription endpoints
pub mod subscribers;
