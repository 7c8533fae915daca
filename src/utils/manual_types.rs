// We use enums to ref structs owned by the runtime without actually defining them fully
// see https://users.rust-lang.org/t/idiomatic-untyped-pointer/3757/2

#[allow(non_camel_case_types)]
pub mod jni {
    use libc::c_void;

    pub type jint = i32;

    pub enum JNIEnv {}
    pub enum JavaVM {}

    pub type jclass = *mut c_void;
}
