//! The fixed-size transfer buffer.
//!
//! One anonymous, zero-initialized memory region is acquired per copy and
//! reused for every chunk; nothing meaningful survives in it between
//! iterations. On Unix the region is a private `mmap(2)` mapping and
//! unmap failures are reported; elsewhere it is a plain heap allocation
//! and release cannot fail.

use std::io;

/// Size in bytes of the transfer buffer: 2 MiB.
///
/// Every read requests this much; the underlying stream returning fewer
/// bytes (or zero at end-of-file) is what terminates the copy loop.
pub const TRANSFER_BUF_LEN: usize = 2 * 1024 * 1024;

/// Reusable staging area between a read and the following write.
///
/// Scoped ownership: [`TransferBuffer::release`] consumes the buffer on
/// the success path and reports unmap failures; `Drop` covers early
/// error paths best-effort.
#[cfg(unix)]
pub(crate) struct TransferBuffer {
    ptr: std::ptr::NonNull<u8>,
    released: bool,
}

#[cfg(unix)]
impl TransferBuffer {
    /// Map an anonymous, zero-initialized 2 MiB region.
    pub(crate) fn acquire() -> io::Result<Self> {
        // SAFETY: anonymous private mapping with no backing fd and a
        // fixed length; the kernel chooses the address.
        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                TRANSFER_BUF_LEN,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };
        if ptr == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }
        let ptr = std::ptr::NonNull::new(ptr.cast::<u8>())
            .ok_or_else(|| io::Error::other("mmap returned a null mapping"))?;
        Ok(Self {
            ptr,
            released: false,
        })
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: the mapping is TRANSFER_BUF_LEN bytes, readable and
        // writable, and stays mapped until release() or Drop.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), TRANSFER_BUF_LEN) }
    }

    /// Unmap the region, surfacing `munmap` failure to the caller.
    pub(crate) fn release(mut self) -> io::Result<()> {
        self.released = true;
        // SAFETY: ptr and length are exactly what mmap handed back; the
        // released flag keeps Drop from unmapping a second time.
        if unsafe { libc::munmap(self.ptr.as_ptr().cast(), TRANSFER_BUF_LEN) } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(unix)]
impl Drop for TransferBuffer {
    fn drop(&mut self) {
        if !self.released {
            // SAFETY: same mapping as in acquire(), not yet unmapped.
            let _ = unsafe { libc::munmap(self.ptr.as_ptr().cast(), TRANSFER_BUF_LEN) };
        }
    }
}

#[cfg(not(unix))]
pub(crate) struct TransferBuffer {
    buf: Box<[u8]>,
}

#[cfg(not(unix))]
impl TransferBuffer {
    pub(crate) fn acquire() -> io::Result<Self> {
        Ok(Self {
            buf: vec![0u8; TRANSFER_BUF_LEN].into_boxed_slice(),
        })
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    pub(crate) fn release(self) -> io::Result<()> {
        Ok(())
    }
}
