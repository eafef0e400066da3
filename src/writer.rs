//! The checked create/write/close run shared by both demo programs.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{
	fd::{CreationFlags, FileHandle},
	params::Params,
};

pub type WriteFileResult<T> = Result<T, WriteFileError>;

/// Ways a write run can fail, each tied to the step that broke.
#[derive(Error, Debug)]
pub enum WriteFileError {
	#[error("failed to create {}: {source}", .path.display())]
	Create {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to write to {}: {source}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to close {}: {source}", .path.display())]
	Close {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Creates `params.path`, writes the payload and closes the descriptor.
///
/// Each step of the triad is checked and the first failing one aborts the
/// run. Returns the number of bytes written.
pub fn write_file(params: &Params) -> WriteFileResult<usize> {
	let file = FileHandle::create(&params.path, CreationFlags::default(), params.mode).map_err(
		|source| WriteFileError::Create {
			path: params.path.clone(),
			source,
		},
	)?;

	file.write_all(&params.payload)
		.map_err(|source| WriteFileError::Write {
			path: params.path.clone(),
			source,
		})?;

	file.close().map_err(|source| WriteFileError::Close {
		path: params.path.clone(),
		source,
	})?;

	debug!(
		"Wrote {} bytes to {}",
		params.payload.len(),
		params.path.display()
	);
	Ok(params.payload.len())
}
