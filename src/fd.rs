//! Thin ownership layer over raw POSIX file descriptors.

use std::{
	ffi::CString,
	io, mem,
	os::{
		fd::{AsRawFd, FromRawFd, IntoRawFd, OwnedFd, RawFd},
		unix::ffi::OsStrExt,
	},
	path::Path,
};

use bitflags::bitflags;

use crate::params::FileMode;

bitflags! {
	/// Flags handed to `open(2)` when the target file is acquired.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct CreationFlags: i32 {
		/// Create the file if it does not exist yet.
		const CREATE = libc::O_CREAT;
		/// Discard the previous content of an existing file.
		const TRUNCATE = libc::O_TRUNC;
		/// Open the descriptor for both reading and writing.
		const READ_WRITE = libc::O_RDWR;
	}
}

impl Default for CreationFlags {
	fn default() -> Self {
		Self::CREATE | Self::TRUNCATE | Self::READ_WRITE
	}
}

/// An owned file descriptor obtained from `open(2)`.
///
/// The descriptor is released on drop. [`FileHandle::close`] closes it
/// eagerly instead and surfaces the result of `close(2)`.
#[derive(Debug)]
pub struct FileHandle {
	fd: RawFd,
}

impl FileHandle {
	/// Creates `path` with the given flags and permission bits.
	pub fn create(path: &Path, flags: CreationFlags, mode: FileMode) -> io::Result<Self> {
		let path_c = CString::new(path.as_os_str().as_bytes()).map_err(|e| {
			io::Error::new(
				io::ErrorKind::InvalidInput,
				format!("invalid target path: {e}"),
			)
		})?;

		let fd = unsafe { libc::open(path_c.as_ptr(), flags.bits(), mode.get() as libc::c_int) };
		if fd < 0 {
			// Read errno before anything else touches it.
			let err = io::Error::last_os_error();
			if fd != -1 {
				warn!("Unexpected return value {fd} from open(2)");
			}
			return Err(err);
		}
		trace!("Opened {} as fd {fd}", path.display());

		Ok(Self { fd })
	}

	/// Hands `buf` to a single `write(2)` call and returns the number of
	/// bytes the kernel accepted.
	pub fn write(&self, buf: &[u8]) -> io::Result<usize> {
		let step = unsafe { libc::write(self.fd, buf.as_ptr().cast(), buf.len()) };
		if step < 0 {
			return Err(io::Error::last_os_error());
		}
		Ok(step as usize)
	}

	/// Writes all of `buf`, repeating `write(2)` on short writes and
	/// retrying after interrupts.
	pub fn write_all(&self, mut buf: &[u8]) -> io::Result<()> {
		while !buf.is_empty() {
			match self.write(buf) {
				Ok(0) => {
					return Err(io::Error::new(
						io::ErrorKind::WriteZero,
						"write(2) accepted no bytes",
					));
				}
				Ok(step) => buf = &buf[step..],
				Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
				Err(e) => return Err(e),
			}
		}
		Ok(())
	}

	/// Closes the descriptor and reports whether `close(2)` succeeded.
	pub fn close(self) -> io::Result<()> {
		let fd = self.into_raw_fd();
		if unsafe { libc::close(fd) } < 0 {
			return Err(io::Error::last_os_error());
		}
		trace!("Closed fd {fd}");
		Ok(())
	}
}

impl AsRawFd for FileHandle {
	fn as_raw_fd(&self) -> RawFd {
		self.fd
	}
}

impl FromRawFd for FileHandle {
	unsafe fn from_raw_fd(fd: RawFd) -> Self {
		Self { fd }
	}
}

impl IntoRawFd for FileHandle {
	fn into_raw_fd(self) -> RawFd {
		let fd = self.fd;
		mem::forget(self);
		fd
	}
}

impl Drop for FileHandle {
	fn drop(&mut self) {
		// OwnedFd closes the descriptor when it goes out of scope.
		unsafe { OwnedFd::from_raw_fd(self.fd) };
	}
}
