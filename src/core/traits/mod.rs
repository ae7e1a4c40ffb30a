pub mod clipboard;
pub mod executor;
pub mod judge;
