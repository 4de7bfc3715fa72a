//! Linux entropy through the `getrandom` system call.

use libc::{EINTR, c_void, getrandom};

/// Fills `buf` with random bytes from the kernel entropy pool.
///
/// Short reads and `EINTR` are retried until the buffer is full, so large
/// byte budgets (more than 256 bytes per call on older kernels) work.
///
/// # Panics
/// Panics if `getrandom` fails with anything other than `EINTR`.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let remaining = &mut buf[filled..];
        let ret = unsafe { getrandom(remaining.as_mut_ptr() as *mut c_void, remaining.len(), 0) };

        if ret < 0 {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }

            panic!("getrandom() failed: {err}");
        }

        filled += ret as usize;
    }
}
