pub mod layout;
pub mod schedule;
pub mod session;
pub mod time_slot;
pub mod view;
