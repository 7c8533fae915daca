use gl::types::*;
use libc::c_void;
use log::warn;

use crate::bind::{
    gl::GlEntryPoints,
    gl_safe::{glGetErrorSafe, glGetIntegerSafe, glReadPixelsSafe},
};

use super::call::ReadPixelsCall;

// GL_PACK_ALIGNMENT's initial value
const DEFAULT_PACK_ALIGNMENT: GLint = 4;

/// The GL calls a readback needs.
///
/// Every method acts on whatever context is current on the calling thread.
/// Making one current first is the caller's job; nothing here checks it.
#[cfg_attr(test, mockall::automock)]
pub trait GlReadback {
    /// Reads into the bound `GL_PIXEL_PACK_BUFFER`, `offset` bytes in.
    /// Returns whether the read was issued.
    fn read_pixels_to_pack_buffer(&self, call: ReadPixelsCall, offset: usize) -> bool;

    /// Reads into client memory. Returns whether the read was issued.
    fn read_pixels_into(&self, call: ReadPixelsCall, pixels: &mut [u8]) -> bool;

    fn error(&self) -> GLenum;

    fn pack_alignment(&self) -> GLint;
}

/// Forwards to the process' GL library.
#[derive(Clone, Copy, Default)]
pub struct GlesBackend {
    // None means the process-wide entry points, looked up on first use
    entry_points: Option<GlEntryPoints>,
    require_pack_buffer: bool,
}

impl GlesBackend {
    pub fn new(require_pack_buffer: bool) -> Self {
        GlesBackend {
            entry_points: None,
            require_pack_buffer,
        }
    }

    pub fn with_entry_points(entry_points: GlEntryPoints, require_pack_buffer: bool) -> Self {
        GlesBackend {
            entry_points: Some(entry_points),
            require_pack_buffer,
        }
    }

    fn entry_points(&self) -> GlEntryPoints {
        self.entry_points.unwrap_or_else(GlEntryPoints::resolved)
    }

    // GLES2 has no pack buffers, the query raises GL_INVALID_ENUM there and reads as unbound
    fn pack_buffer_bound(&self, entry: &GlEntryPoints) -> bool {
        matches!(glGetIntegerSafe(entry, gl::PIXEL_PACK_BUFFER_BINDING), Some(name) if name != 0)
    }
}

impl GlReadback for GlesBackend {
    fn read_pixels_to_pack_buffer(&self, call: ReadPixelsCall, offset: usize) -> bool {
        let entry = self.entry_points();
        // opt-in only, the query itself leaves an error flag on GLES2
        if self.require_pack_buffer && !self.pack_buffer_bound(&entry) {
            warn!("glReadPixels skipped, no pixel pack buffer bound: {:?}", call);
            return false;
        }
        unsafe {
            glReadPixelsSafe(
                &entry,
                call.x,
                call.y,
                call.width,
                call.height,
                call.format,
                call.type_,
                offset as *mut c_void,
            )
        }
    }

    fn read_pixels_into(&self, call: ReadPixelsCall, pixels: &mut [u8]) -> bool {
        let entry = self.entry_points();
        // if a pack buffer happens to be bound GL range-checks the address as an
        // offset into it, client memory is only written when none is
        let needed = match call.byte_len(self.pack_alignment()) {
            Ok(needed) => needed,
            Err(err) => {
                warn!("glReadPixels skipped: {}", err);
                return false;
            }
        };
        if pixels.len() < needed {
            warn!(
                "glReadPixels skipped, {} bytes needed but only {} given",
                needed,
                pixels.len()
            );
            return false;
        }
        unsafe {
            glReadPixelsSafe(
                &entry,
                call.x,
                call.y,
                call.width,
                call.height,
                call.format,
                call.type_,
                pixels.as_mut_ptr() as *mut c_void,
            )
        }
    }

    fn error(&self) -> GLenum {
        glGetErrorSafe(&self.entry_points())
    }

    fn pack_alignment(&self) -> GLint {
        glGetIntegerSafe(&self.entry_points(), gl::PACK_ALIGNMENT).unwrap_or(DEFAULT_PACK_ALIGNMENT)
    }
}
