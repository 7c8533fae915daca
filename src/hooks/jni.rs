use std::panic;

use gl::types::GLenum;
use human_panic::setup_panic;
use libc::c_void;
use log::error;

use crate::{
    constants::JNI_VERSION_1_6,
    host::hosting::HOST,
    utils::config::Config,
    utils::manual_types::jni::{jclass, jint, JNIEnv, JavaVM},
};

#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    setup_panic!();
    // the logger has to be up before HOST exists, or its startup lines are lost
    let filter = Config::from_env().log_filter();
    // a logger installed by the embedding process wins
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
    HOST.announce();
    JNI_VERSION_1_6
}

// static native void glReadPixels(int x, int y, int width, int height, int format, int type, int offset)
#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn Java_com_erlei_videorecorder_gles_GLUtil_glReadPixels(
    _env: *mut JNIEnv,
    _class: jclass,
    x: jint,
    y: jint,
    width: jint,
    height: jint,
    format: jint,
    type_: jint,
    offset: jint,
) {
    // unwinding into the runtime aborts it
    let result = panic::catch_unwind(|| {
        HOST.binding.read_pixels(
            x,
            y,
            width,
            height,
            format as GLenum,
            type_ as GLenum,
            offset,
        );
    });
    if result.is_err() {
        error!("glReadPixels binding panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // no context and usually no GL library in the test process, the call has to stay silent anyway
    #[test]
    fn entry_point_is_silent_without_a_context() {
        Java_com_erlei_videorecorder_gles_GLUtil_glReadPixels(
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            10,
            20,
            0,
            0,
            gl::RGBA as jint,
            gl::UNSIGNED_BYTE as jint,
            0,
        );
    }

    #[test]
    fn on_load_reports_jni_1_6() {
        let version = JNI_OnLoad(std::ptr::null_mut(), std::ptr::null_mut());
        assert_eq!(version, 0x0001_0006);
    }
}
