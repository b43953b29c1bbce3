pub mod emotion;
pub mod memory;
