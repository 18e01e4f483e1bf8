//! Terminal front end for flip-runner.
//!
//! Parses command-line options, reads the player's partitions and flips as
//! lines of text, and renders the three graphs after every change. All game
//! rules live in [`crate::game`]; this module only translates text to
//! controller calls and back.

mod commands;
mod input;
mod render;
mod session;

pub use commands::{run_cli, Cli, CliError, DEFAULT_MAX_ATTEMPTS};
pub use input::{
    parse_flip_line, parse_group_lines, parse_partition_line, parse_vertex_list, FlipInput,
    InputError,
};
pub use render::{render_flip, render_graph, render_outcome, render_round, render_snapshot};
pub use session::Session;
