pub mod jni;
