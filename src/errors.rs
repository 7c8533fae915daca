use gl::types::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlError {
    /// `glGetError` reported a flag after `op`.
    #[error("{op}: glError 0x{code:x}")]
    Call { op: String, code: GLenum },

    #[error("Unable to locate '{label}' in program")]
    MissingLocation { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadbackError {
    #[error("no known pixel size for format 0x{format:x} with type 0x{type_:x}")]
    UnsupportedFormat { format: GLenum, type_: GLenum },

    #[error("cannot read back a {width}x{height} rectangle")]
    InvalidDimensions { width: GLsizei, height: GLsizei },

    #[error("GL_PACK_ALIGNMENT {0} is not one of 1, 2, 4 or 8")]
    InvalidAlignment(GLint),

    #[error("{0} is not available in this process")]
    Unavailable(&'static str),

    #[error(transparent)]
    Gl(#[from] GlError),
}

/// Uniform and attribute lookups return -1 when the name is not active.
pub fn check_location(location: GLint, label: &str) -> Result<(), GlError> {
    if location < 0 {
        return Err(GlError::MissingLocation {
            label: label.to_owned(),
        });
    }
    Ok(())
}
