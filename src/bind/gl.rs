#![allow(non_upper_case_globals, non_camel_case_types)]

use std::ffi::{CStr, CString};

use gl::types::*;
use lazy_static::lazy_static;
use libc::c_void;
use log::{debug, warn};

use crate::{constants::GL_LIBRARY_CANDIDATES, host::hosting::HOST, utils::pointer::Pointer};

// entry points are looked up at runtime instead of linked, the same library is
// loaded by the runtime for its own GL calls and we want whatever it picked
pub type ReadPixelsFn = unsafe extern "system" fn(
    x: GLint,
    y: GLint,
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    type_: GLenum,
    pixels: *mut c_void,
);
pub type GetErrorFn = unsafe extern "system" fn() -> GLenum;
pub type GetIntegervFn = unsafe extern "system" fn(pname: GLenum, data: *mut GLint);

#[cfg(feature = "log_symbols")]
pub const LOG_SYMBOLS: bool = true;
#[cfg(not(feature = "log_symbols"))]
pub const LOG_SYMBOLS: bool = false;

fn open_library(path: &str) -> Option<Pointer> {
    let path_cstring = CString::new(path).ok()?;
    let handle = unsafe { libc::dlopen(path_cstring.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
    let handle = Pointer::from_raw(handle);
    if LOG_SYMBOLS {
        debug!("dlopen({}) -> {:?}", path, handle);
    }
    handle
}

lazy_static! {
    // only consulted when a symbol is not already visible in the global namespace
    static ref GL_LIBRARY: Option<Pointer> = {
        let configured = HOST.config.gl_library.as_deref();
        configured
            .into_iter()
            .chain(GL_LIBRARY_CANDIDATES.iter().copied())
            .find_map(open_library)
    };
}

pub fn resolve_symbol(name: &CStr) -> Option<Pointer> {
    let global = Pointer::from_raw(unsafe { libc::dlsym(libc::RTLD_DEFAULT, name.as_ptr()) });
    let resolved = match global {
        Some(pointer) => Some(pointer),
        None => (*GL_LIBRARY).and_then(|library| {
            Pointer::from_raw(unsafe { libc::dlsym(library.as_mut_func(), name.as_ptr()) })
        }),
    };
    if LOG_SYMBOLS {
        debug!("resolved {:?} to {:?}", name, resolved);
    }
    if resolved.is_none() {
        warn!("{:?} is not available in this process", name);
    }
    resolved
}

lazy_static! {
    pub static ref glReadPixels: Option<ReadPixelsFn> = resolve_symbol(c"glReadPixels")
        .map(|pointer| unsafe { std::mem::transmute::<*const c_void, ReadPixelsFn>(pointer.as_func()) });

    pub static ref glGetError: Option<GetErrorFn> = resolve_symbol(c"glGetError")
        .map(|pointer| unsafe { std::mem::transmute::<*const c_void, GetErrorFn>(pointer.as_func()) });

    pub static ref glGetIntegerv: Option<GetIntegervFn> = resolve_symbol(c"glGetIntegerv")
        .map(|pointer| unsafe { std::mem::transmute::<*const c_void, GetIntegervFn>(pointer.as_func()) });
}

/// The entry points a readback goes through, copied out of the lazily resolved statics.
#[derive(Clone, Copy)]
pub struct GlEntryPoints {
    pub read_pixels: Option<ReadPixelsFn>,
    pub get_error: Option<GetErrorFn>,
    pub get_integerv: Option<GetIntegervFn>,
}

impl GlEntryPoints {
    pub fn resolved() -> Self {
        GlEntryPoints {
            read_pixels: *glReadPixels,
            get_error: *glGetError,
            get_integerv: *glGetIntegerv,
        }
    }
}
