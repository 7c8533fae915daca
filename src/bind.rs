pub mod gl;
pub mod gl_safe;
