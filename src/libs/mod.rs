pub mod calculator;
pub mod clock;
pub mod countdown;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod notify;
pub mod settings;
pub mod view;
