use libc::c_void;

/// Raw address handed out by the dynamic loader (a library handle or an entry point).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer(pub *const c_void);

impl Pointer {
    pub fn as_func(&self) -> *const c_void {
        self.0
    }

    pub fn as_mut_func(&self) -> *mut c_void {
        self.0 as *mut c_void
    }

    pub fn from_raw(ptr: *mut c_void) -> Option<Pointer> {
        if ptr.is_null() {
            None
        } else {
            Some(Pointer(ptr as *const c_void))
        }
    }
}

// handles and entry points are process-wide and immutable once resolved
unsafe impl Send for Pointer {}
unsafe impl Sync for Pointer {}
