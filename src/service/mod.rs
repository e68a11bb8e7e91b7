pub mod countdown;
pub mod event_store;
