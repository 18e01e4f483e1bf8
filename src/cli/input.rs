//! Parsing of the player's typed lines.
//!
//! Only syntax is checked here. Whether vertices are in range and groups are
//! disjoint is decided by [`Partition::validate`](crate::partition::Partition::validate),
//! and whether a group number exists by [`FlipCommand::from_one_based`](crate::flip::FlipCommand::from_one_based).

use thiserror::Error;

use crate::partition::GROUP_COUNT;

/// A parsed line from the flip prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipInput {
    /// Flip between two 1-based group numbers (equal numbers flip a group
    /// with itself).
    Flip { first: usize, second: usize },
    /// Stop flipping and let the runner move.
    End,
    /// Enter a new partition before continuing to flip.
    Repartition,
}

/// Syntax errors in typed input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("`{token}` is not a vertex number")]
    InvalidVertex { token: String },

    #[error("`{token}` is not a group number")]
    InvalidGroup { token: String },

    #[error("expected 3 groups separated by `/`, found {found}")]
    WrongGroupCount { found: usize },

    #[error("expected two group numbers (like `1,2`), found {found}")]
    WrongFlipArity { found: usize },

    #[error("nothing entered")]
    Empty,
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Parse one group: vertex ids separated by commas and/or spaces.
///
/// A blank line is an empty group.
pub fn parse_vertex_list(line: &str) -> Result<Vec<u32>, InputError> {
    tokens(line)
        .map(|token| {
            token.parse::<u32>().map_err(|_| InputError::InvalidVertex {
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Parse all three groups from one line, e.g. `1,2,3/4,5/0`.
pub fn parse_partition_line(line: &str) -> Result<[Vec<u32>; GROUP_COUNT], InputError> {
    match line.split('/').collect::<Vec<_>>().as_slice() {
        [first, second, third] => parse_group_lines([*first, *second, *third]),
        parts => Err(InputError::WrongGroupCount { found: parts.len() }),
    }
}

/// Parse the three groups entered on separate lines.
pub fn parse_group_lines(lines: [&str; GROUP_COUNT]) -> Result<[Vec<u32>; GROUP_COUNT], InputError> {
    Ok([
        parse_vertex_list(lines[0])?,
        parse_vertex_list(lines[1])?,
        parse_vertex_list(lines[2])?,
    ])
}

/// Parse a line from the flip prompt.
///
/// Accepts `1,2`, `1 2`, `end`/`done` and `repartition`.
pub fn parse_flip_line(line: &str) -> Result<FlipInput, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "end" | "done" => return Ok(FlipInput::End),
        "repartition" => return Ok(FlipInput::Repartition),
        _ => {}
    }

    let numbers = tokens(trimmed)
        .map(|token| {
            token.parse::<usize>().map_err(|_| InputError::InvalidGroup {
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match numbers.as_slice() {
        [first, second] => Ok(FlipInput::Flip {
            first: *first,
            second: *second,
        }),
        other => Err(InputError::WrongFlipArity { found: other.len() }),
    }
}
