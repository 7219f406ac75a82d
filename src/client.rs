mod count_poller;
mod portal_client;
mod subscribe_form;

pub use count_poller::*;
pub use portal_client::*;
pub use subscribe_form::*;
