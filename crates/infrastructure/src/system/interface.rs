use dualdial_application::ports::InterfaceDirectory;
use std::ffi::{CStr, CString};

/// Interface lookups through `if_nametoindex(3)` and `if_indextoname(3)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaceDirectory;

impl InterfaceDirectory for SystemInterfaceDirectory {
    fn index_by_name(&self, name: &str) -> Option<u32> {
        let name = CString::new(name).ok()?;
        // SAFETY: `name` is NUL-terminated and outlives the call.
        let index = unsafe { libc::if_nametoindex(name.as_ptr()) };
        (index != 0).then_some(index)
    }

    fn name_by_index(&self, index: u32) -> Option<String> {
        let mut buf = [0 as libc::c_char; libc::IF_NAMESIZE];
        // SAFETY: `buf` holds IF_NAMESIZE bytes as the call requires.
        let ptr = unsafe { libc::if_indextoname(index, buf.as_mut_ptr()) };
        if ptr.is_null() {
            return None;
        }
        // SAFETY: on success the buffer holds a NUL-terminated name.
        let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
        Some(name.to_string_lossy().into_owned())
    }
}
