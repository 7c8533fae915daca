pub mod backend;
pub mod binding;
pub mod call;
pub mod format;
