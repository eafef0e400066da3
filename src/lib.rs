#![warn(rust_2018_idioms)]

//! # fdwrite
//!
//! Small demonstrations of the POSIX `open`/`write`/`close` triad: each of
//! the two binaries in this crate creates a file through the raw descriptor
//! interface and writes a fixed byte payload to it. The library holds the
//! descriptor layer and the run description the programs share.

#[macro_use]
extern crate log;

pub mod consts;
pub mod fd;
pub mod params;
pub mod writer;

pub use fd::{CreationFlags, FileHandle};
pub use params::{FileMode, Params};
pub use writer::{WriteFileError, WriteFileResult, write_file};

#[cfg(not(unix))]
compile_error!("fdwrite drives POSIX file-descriptor syscalls and only builds on Unix-like systems");
