#![allow(non_snake_case)]

use gl::types::*;
use libc::c_void;

use super::gl::GlEntryPoints;

/// Issues `glReadPixels` with `pixels` passed through untouched.
/// Returns false when the entry point could not be resolved.
///
/// # Safety
///
/// With a pixel pack buffer bound `pixels` is a byte offset into it and GL
/// validates the range. Without one it is a client pointer and must be valid
/// for the whole readback.
pub unsafe fn glReadPixelsSafe(
    entry: &GlEntryPoints,
    x: GLint,
    y: GLint,
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    type_: GLenum,
    pixels: *mut c_void,
) -> bool {
    match entry.read_pixels {
        Some(func) => {
            func(x, y, width, height, format, type_, pixels);
            true
        }
        None => false,
    }
}

/// Pops the oldest GL error flag. An unresolved entry point reads as `GL_NO_ERROR`.
pub fn glGetErrorSafe(entry: &GlEntryPoints) -> GLenum {
    match entry.get_error {
        Some(func) => unsafe { func() },
        None => gl::NO_ERROR,
    }
}

/// Single-valued `glGetIntegerv`; `None` if the entry point is missing.
/// An unknown `pname` leaves the value at 0 and raises `GL_INVALID_ENUM`.
pub fn glGetIntegerSafe(entry: &GlEntryPoints, pname: GLenum) -> Option<GLint> {
    let func = entry.get_integerv?;
    let mut value: GLint = 0;
    unsafe {
        func(pname, &mut value);
    }
    Some(value)
}
