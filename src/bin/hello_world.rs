#![warn(rust_2018_idioms)]

use std::{path::PathBuf, process};

use clap::Parser;

use fdwritelib::consts::{HELLO_WORLD_PATH, HELLO_WORLD_PAYLOAD};
use fdwritelib::params::{FileMode, Params};
use fdwritelib::write_file;

/// Creates a greeting file through the raw descriptor interface.
///
/// Opens the target with O_CREAT | O_TRUNC | O_RDWR, writes `Hello World!\n`
/// into it and closes the descriptor again. Without arguments the target is
/// `hello_world.txt` in the current directory.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
	/// Permission bits of the created file, in octal
	#[clap(short, long, default_value_t)]
	mode: FileMode,

	/// The file to create
	#[clap(default_value = HELLO_WORLD_PATH, env = "FDWRITE_HELLO_PATH")]
	path: PathBuf,
}

impl From<Args> for Params {
	fn from(args: Args) -> Self {
		let Args { mode, path } = args;
		Self {
			path,
			payload: HELLO_WORLD_PAYLOAD.to_vec(),
			mode,
		}
	}
}

fn run_hello_world() -> i32 {
	env_logger::init();

	let params = Params::from(Args::parse());
	match write_file(&params) {
		Ok(_) => 0,
		Err(err) => {
			eprintln!("hello_world: {err}");
			1
		}
	}
}

fn main() {
	process::exit(run_hello_world())
}
