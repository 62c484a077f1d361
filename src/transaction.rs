pub mod entry;
pub mod history;
