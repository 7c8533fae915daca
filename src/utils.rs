pub mod config;
pub mod manual_types;

pub mod utils;

pub mod pointer;
