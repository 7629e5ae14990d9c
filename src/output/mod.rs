// Tue Feb 3 2026 - Alex

pub mod slbin;

pub use slbin::{encode, write_result, FORMAT_VERSION, MAGIC};
