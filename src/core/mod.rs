pub mod add;
pub mod clear;
pub mod position;
pub mod sort;
pub mod validate;
