//! Native side of `GLUtil`: pixel readback for a managed runtime.
//!
//! The exported `glReadPixels` binding reads into whatever pixel pack buffer
//! the caller bound. The offset it is given is dropped unless
//! `GLUTIL_HONOR_OFFSET` is set, see [`readback::binding::OffsetPolicy`].
//!
//! `JNI_OnLoad` falls back to `env_logger`, which writes to stderr. On Android
//! stderr goes to /dev/null, so install a logcat-backed `log` logger before the
//! library is loaded if the output matters. An existing logger is left alone.

pub mod bind;
pub mod constants;
pub mod errors;
pub mod hooks;
pub mod host;
pub mod readback;
pub mod utils;

pub use errors::{check_location, GlError, ReadbackError};
pub use readback::{
    backend::{GlReadback, GlesBackend},
    binding::{OffsetPolicy, PixelReadoutBinding},
    call::ReadPixelsCall,
    format::bytes_per_pixel,
};
