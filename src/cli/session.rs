//! Interactive terminal session driving one game.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::commands::CliError;
use super::input::{parse_flip_line, parse_group_lines, parse_partition_line, FlipInput};
use super::render::{render_flip, render_outcome, render_round, render_snapshot};
use crate::flip::FlipCommand;
use crate::game::TurnController;
use crate::partition::GROUP_COUNT;
use crate::rules::GameOutcome;
use crate::runner::{MaxDegreePolicy, RunnerPolicy};

/// Result of one prompt attempt.
enum Attempt<T> {
    /// Input accepted.
    Done(T),
    /// Input rejected; the reason is shown and the prompt repeated.
    Rejected(String),
}

/// What the player chose at the flip prompt.
enum FlipStep {
    Flipped,
    End,
    Repartition,
}

/// Plays one game over a line-oriented reader and writer.
///
/// Invalid input is reported and re-prompted up to `max_attempts` times in a
/// row for the same prompt; the game state is never changed by a rejected
/// line.
pub struct Session<R, W, P: RunnerPolicy = MaxDegreePolicy> {
    game: TurnController<P>,
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write, P: RunnerPolicy> Session<R, W, P> {
    pub fn new(game: TurnController<P>, input: R, output: W, max_attempts: u32) -> Self {
        Self {
            game,
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &TurnController<P> {
        &self.game
    }

    /// Play rounds until the runner is caught.
    ///
    /// # Errors
    /// Fails if input ends early, a prompt is failed `max_attempts` times, or
    /// the terminal cannot be written.
    pub fn run(mut self) -> Result<GameOutcome, CliError> {
        if let Some(seed) = self.game.state().seed() {
            writeln!(self.output, "seed {seed}")?;
        }
        render_snapshot(&self.game.snapshot(), &mut self.output)?;

        loop {
            if let Some(outcome) = self.game.outcome() {
                render_outcome(&outcome, &mut self.output)?;
                self.output.flush()?;
                return Ok(outcome);
            }

            writeln!(
                self.output,
                "-- round {}: runner at {} --",
                self.game.state().round(),
                self.game.state().runner().position_prev
            )?;
            self.read_partition()?;
            self.play_flips()?;

            let result = self.game.end_round()?;
            render_round(&result.record, &mut self.output)?;
            render_snapshot(&result.snapshot, &mut self.output)?;
        }
    }

    fn read_partition(&mut self) -> Result<(), CliError> {
        self.retry("partition", |session| {
            let groups = match session.read_groups()? {
                Ok(groups) => groups,
                Err(reason) => return Ok(Attempt::Rejected(reason)),
            };
            match session.game.submit_partition(&groups) {
                Ok(partition) => {
                    let text = partition.to_string();
                    writeln!(session.output, "partition: {text}")?;
                    Ok(Attempt::Done(()))
                }
                Err(err) if err.is_recoverable() => Ok(Attempt::Rejected(err.to_string())),
                Err(err) => Err(err.into()),
            }
        })
    }

    /// Read either a single `a/b/c` line or three separate group lines.
    fn read_groups(&mut self) -> Result<Result<[Vec<u32>; GROUP_COUNT], String>, CliError> {
        let first = self.prompt("group 1 (or all groups as `1,2/3/0`): ")?;
        if first.contains('/') {
            return Ok(parse_partition_line(&first).map_err(|err| err.to_string()));
        }

        let second = self.prompt("group 2: ")?;
        let third = self.prompt("group 3: ")?;
        let lines = [first.as_str(), second.as_str(), third.as_str()];
        Ok(parse_group_lines(lines).map_err(|err| err.to_string()))
    }

    fn play_flips(&mut self) -> Result<(), CliError> {
        loop {
            let step = self.retry("flip", |session| {
                let line = session.prompt("flip (`1,2`, `2,2`, `end`, `repartition`): ")?;
                let (first, second) = match parse_flip_line(&line) {
                    Ok(FlipInput::Flip { first, second }) => (first, second),
                    Ok(FlipInput::End) => return Ok(Attempt::Done(FlipStep::End)),
                    Ok(FlipInput::Repartition) => return Ok(Attempt::Done(FlipStep::Repartition)),
                    Err(err) => return Ok(Attempt::Rejected(err.to_string())),
                };
                let command = match FlipCommand::from_one_based(first, second) {
                    Ok(command) => command,
                    Err(err) => return Ok(Attempt::Rejected(err.to_string())),
                };
                match session.game.flip(command) {
                    Ok(report) => {
                        render_flip(&report, &mut session.output)?;
                        render_snapshot(&session.game.snapshot(), &mut session.output)?;
                        Ok(Attempt::Done(FlipStep::Flipped))
                    }
                    Err(err) if err.is_recoverable() => Ok(Attempt::Rejected(err.to_string())),
                    Err(err) => Err(err.into()),
                }
            })?;

            match step {
                FlipStep::Flipped => {}
                FlipStep::End => return Ok(()),
                FlipStep::Repartition => self.read_partition()?,
            }
        }
    }

    /// Run `attempt` until it is accepted or `max_attempts` rejections pile up.
    fn retry<T>(
        &mut self,
        prompt: &'static str,
        mut attempt: impl FnMut(&mut Self) -> Result<Attempt<T>, CliError>,
    ) -> Result<T, CliError> {
        for tries in 1..=self.max_attempts {
            match attempt(self)? {
                Attempt::Done(value) => return Ok(value),
                Attempt::Rejected(reason) => {
                    debug!(prompt, tries, %reason, "input rejected");
                    writeln!(self.output, "invalid input: {reason}")?;
                }
            }
        }
        warn!(prompt, attempts = self.max_attempts, "giving up after repeated invalid input");
        Err(CliError::TooManyInvalidInputs {
            prompt,
            attempts: self.max_attempts,
        })
    }

    fn prompt(&mut self, text: &str) -> Result<String, CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}
