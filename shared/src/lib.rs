pub mod color;
pub mod datatypes;
pub mod format;
pub mod menu;
pub mod store;
