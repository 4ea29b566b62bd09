pub mod active;
pub mod catalog;
pub mod widgets;
