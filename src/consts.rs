//! Canonical targets and payloads of the demo programs.

/// Target path of the `write_file` demo.
pub const OUTPUT_PATH: &str = "output.txt";

/// Payload of the `write_file` demo, written verbatim.
pub const OUTPUT_PAYLOAD: &[u8] = b"Great!\n";

/// Target path of the `hello_world` demo.
pub const HELLO_WORLD_PATH: &str = "hello_world.txt";

/// Payload of the `hello_world` demo, written verbatim.
pub const HELLO_WORLD_PAYLOAD: &[u8] = b"Hello World!\n";
