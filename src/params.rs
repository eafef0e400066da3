//! Run descriptions and the validated permission-mode type.

use std::{fmt, num::ParseIntError, path::PathBuf, str::FromStr};

use thiserror::Error;

use crate::consts::{OUTPUT_PATH, OUTPUT_PAYLOAD};

/// Everything one writing run needs: which file to create and what to put
/// into it.
#[derive(Debug, Clone)]
pub struct Params {
	/// Target file, created if missing and truncated if present.
	pub path: PathBuf,

	/// Bytes written verbatim to the target.
	pub payload: Vec<u8>,

	/// Permission bits applied when the target is created.
	pub mode: FileMode,
}

impl Default for Params {
	fn default() -> Self {
		Self {
			path: OUTPUT_PATH.into(),
			payload: OUTPUT_PAYLOAD.to_vec(),
			mode: FileMode::default(),
		}
	}
}

/// Permission bits assigned to a newly created file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMode(u32);

impl FileMode {
	/// Owner read + owner write, the mode both demo programs use.
	pub const OWNER_RW: FileMode = FileMode((libc::S_IRUSR | libc::S_IWUSR) as u32);

	/// Every bit `open(2)` accepts in its mode argument.
	const MODE_MASK: u32 = 0o7777;

	pub fn get(self) -> u32 {
		self.0
	}
}

impl Default for FileMode {
	fn default() -> Self {
		Self::OWNER_RW
	}
}

impl fmt::Display for FileMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:03o}", self.0)
	}
}

#[derive(Error, Debug)]
#[error(
	"Invalid file mode. Must only contain permission bits up to {max:#o} (is {cur:#o})",
	max = FileMode::MODE_MASK,
	cur = .0,
)]
pub struct InvalidFileModeError(u32);

impl TryFrom<u32> for FileMode {
	type Error = InvalidFileModeError;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		if value & !Self::MODE_MASK != 0 {
			Err(InvalidFileModeError(value))
		} else {
			Ok(Self(value))
		}
	}
}

#[derive(Error, Debug)]
pub enum ParseModeError {
	#[error(transparent)]
	Parse(#[from] ParseIntError),

	#[error(transparent)]
	InvalidMode(#[from] InvalidFileModeError),
}

impl FromStr for FileMode {
	type Err = ParseModeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let digits = s.strip_prefix("0o").unwrap_or(s);
		let bits = u32::from_str_radix(digits, 8)?;
		let mode = bits.try_into()?;
		Ok(mode)
	}
}
