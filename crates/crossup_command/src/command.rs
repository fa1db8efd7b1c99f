//! Commands: ordered step sequences matched against input history.
//!
//! A command string like `"236a"` is a *sequence* of individual (possibly
//! compound) inputs, while each individual input may itself be an AND/OR
//! compound. The notation therefore parses at two levels: a coarse step
//! scanner splits the string into consecutive parenthesized-or-simple
//! groups (each optionally suffixed with the `~` strict marker), and each
//! group runs through the tokenizer, parser, and predicate compiler on
//! its own.

use std::fmt;

use tracing::{debug, trace};

use crossup_foundation::{Error, Facing, GameInput, Result};
use crossup_history::{InputHistory, PlayerHistories};

use crate::expr::{InputExpr, compile};
use crate::parser;
use crate::tokenizer::tokenize;

/// One step of a command's input sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandStep {
    /// The compiled predicate for this step.
    pub expr: InputExpr,
    /// Strict steps forbid unrelated, non-empty input on intervening
    /// frames while they are being searched for.
    pub strict: bool,
}

/// An ordered sequence of input steps plus an execution window in frames.
///
/// Immutable after construction; evaluation is a pure query, so a command
/// may be checked repeatedly against any number of histories.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    steps: Vec<CommandStep>,
    window: u32,
    notation: String,
}

impl Command {
    /// Compiles a command from its notation and execution window.
    ///
    /// Empty notation yields an empty command, which never executes.
    ///
    /// # Errors
    /// Returns [`crossup_foundation::ErrorKind::Unparseable`] naming the
    /// offending step when a step tokenizes but does not parse. This is a
    /// content-authoring error expected at move-table construction, not
    /// during gameplay.
    pub fn parse(notation: &str, window: u32) -> Result<Self> {
        let mut steps = Vec::new();
        for (text, strict) in split_steps(notation) {
            let tokens = tokenize(&text);
            let node = parser::parse(&tokens).ok_or_else(|| Error::unparseable(text.clone()))?;
            steps.push(CommandStep {
                expr: compile(&node)?,
                strict,
            });
        }
        debug!(notation, steps = steps.len(), window, "compiled command");
        Ok(Self {
            steps,
            window,
            notation: notation.to_string(),
        })
    }

    /// Returns the source notation.
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Returns the execution window in frames, current frame included.
    #[must_use]
    pub const fn window(&self) -> u32 {
        self.window
    }

    /// Returns the compiled steps in sequence order.
    #[must_use]
    pub fn steps(&self) -> &[CommandStep] {
        &self.steps
    }

    /// Returns true if the command has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Determines whether this command was executed on the current frame.
    ///
    /// The final step must hold at lookback 0; earlier steps must each be
    /// found, in order, on strictly older frames within
    /// `min(window, capacity)` frames of lookback. The search backtracks:
    /// when a placement admits no completion, the next-older candidate is
    /// tried.
    ///
    /// # Errors
    /// Propagates history lookback errors (out-of-contract usage).
    pub fn is_executed(&self, history: &InputHistory, facing: Facing) -> Result<bool> {
        let Some((last, rest)) = self.steps.split_last() else {
            return Ok(false);
        };
        if !last.expr.evaluate(history, 0, facing, false)? {
            return Ok(false);
        }
        if rest.is_empty() {
            return Ok(true);
        }

        let window = (self.window as usize).min(history.capacity());

        // Iterative backtracking over the remaining steps, newest first.
        // Each worklist entry resumes the candidate scan for `step` at
        // lookback `from`; a parent's resume entry sits beneath its
        // child's, so an exhausted child falls back to the parent scan.
        let mut worklist = vec![(rest.len() - 1, 1usize)];
        while let Some((step, from)) = worklist.pop() {
            if let Some(found) = scan_step(&rest[step], history, facing, from, window)? {
                trace!(notation = %self.notation, step, lookback = found, "step placed");
                if step == 0 {
                    return Ok(true);
                }
                worklist.push((step, found + 1));
                worklist.push((step - 1, found + 1));
            }
        }
        Ok(false)
    }

    /// Checks execution for a player in an injected history context.
    ///
    /// # Errors
    /// Fails fast on an unknown player index.
    pub fn is_executed_for(
        &self,
        players: &PlayerHistories,
        player: usize,
        facing: Facing,
    ) -> Result<bool> {
        self.is_executed(players.player(player)?, facing)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}

/// Scans candidate lookbacks for one step, newest eligible first.
///
/// Returns the lookback where the step matched, or `None` when the
/// window is exhausted. For a strict step the scan aborts the first time
/// a frame carries activity that does not satisfy the step ignoring its
/// kind; idle frames are skipped without penalty.
fn scan_step(
    step: &CommandStep,
    history: &InputHistory,
    facing: Facing,
    from: usize,
    window: usize,
) -> Result<Option<usize>> {
    for lookback in from..window {
        if step.strict
            && !history.sample(lookback)?.is_empty()
            && !step.expr.evaluate(history, lookback, facing, true)?
        {
            return Ok(None);
        }
        if step.expr.evaluate(history, lookback, facing, false)? {
            return Ok(Some(lookback));
        }
    }
    Ok(None)
}

/// Splits a command string into step texts with their strict flags.
///
/// Each step is a parenthesized group or a single (optionally
/// `*`-prefixed) symbol; a trailing `~` marks the step strict. Characters
/// that fit neither form are skipped, including an unmatched `(`.
fn split_steps(notation: &str) -> Vec<(String, bool)> {
    let chars: Vec<char> = notation.chars().collect();
    let mut steps = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let text = match chars[i] {
            '(' => match matching_paren(&chars, i) {
                Some(end) => {
                    let text: String = chars[i..=end].iter().collect();
                    i = end + 1;
                    Some(text)
                }
                None => {
                    i += 1;
                    None
                }
            },
            '*' if i + 1 < chars.len() && GameInput::is_symbol(chars[i + 1]) => {
                let text: String = chars[i..=i + 1].iter().collect();
                i += 2;
                Some(text)
            }
            c if GameInput::is_symbol(c) => {
                i += 1;
                Some(c.to_string())
            }
            _ => {
                i += 1;
                None
            }
        };

        if let Some(text) = text {
            let strict = chars.get(i) == Some(&'~');
            if strict {
                i += 1;
            }
            steps.push((text, strict));
        }
    }
    steps
}

/// Finds the index of the paren matching the one at `open`.
fn matching_paren(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &c) in chars.iter().enumerate().skip(open) {
        if c == '(' {
            depth += 1;
        } else if c == ')' {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}
