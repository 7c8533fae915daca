use gl::types::GLenum;

// the gl crate is generated from the desktop core profile, so the GLES2/legacy
// enums it leaves out are hardcoded here
pub const K_GL_ALPHA: GLenum = 0x1906;
pub const K_GL_LUMINANCE: GLenum = 0x1909;
pub const K_GL_LUMINANCE_ALPHA: GLenum = 0x190A;
pub const K_GL_HALF_FLOAT_OES: GLenum = 0x8D61;
pub const K_GL_BGRA_EXT: GLenum = 0x80E1;

/// `JNI_VERSION_1_6`, the lowest version Android accepts from `JNI_OnLoad`.
pub const JNI_VERSION_1_6: i32 = 0x0001_0006;

// where the GL entry points usually live when they are not already in the global namespace
pub const GL_LIBRARY_CANDIDATES: &[&str] = &["libGLESv2.so", "libGLESv3.so", "libGL.so.1"];
