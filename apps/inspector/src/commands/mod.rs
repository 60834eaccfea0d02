pub mod details;
pub mod patterns;
pub mod tree;
