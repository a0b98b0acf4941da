pub mod initialize;
pub mod pool;
pub mod slot;
