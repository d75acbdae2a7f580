//! Command-line front end shared by the `audioconv` and `mp3to` binaries.

pub mod args;
pub mod run;

pub use args::{ChannelArgs, Cli, ConversionArgs, Mp3ToCli};
pub use run::{init_tracing, run, RunOptions, EXIT_PARTIAL_FAILURE};
