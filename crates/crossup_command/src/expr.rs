//! Compiled input predicates.
//!
//! The parse tree compiles into a closed tree of predicates evaluated
//! directly against a player's input history. Mirrored directions are
//! resolved through the facing at evaluation time.

use std::fmt;

use crossup_foundation::{Error, Facing, GameInput, Result};
use crossup_history::InputHistory;

use crate::parser::ParseNode;

/// How a simple predicate reads its symbol from history.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Active this frame (the `*` hold marker).
    Down,
    /// Became active this frame (the default).
    Pressed,
    /// Stopped being active this frame.
    ///
    /// Constructible through the API but has no notation spelling.
    Released,
}

/// A compiled, directly-evaluable input predicate.
#[derive(Clone, Debug, PartialEq)]
pub enum InputExpr {
    /// A single symbol check.
    Simple {
        /// The symbol, as authored from the right-facing perspective.
        input: GameInput,
        /// Which history query the check uses.
        kind: InputKind,
    },
    /// A boolean combination of child predicates.
    Junction {
        /// The operands, in source order.
        children: Vec<InputExpr>,
        /// True for AND (every child), false for OR (any child).
        all: bool,
    },
}

impl InputExpr {
    /// Creates a simple predicate.
    #[must_use]
    pub const fn simple(input: GameInput, kind: InputKind) -> Self {
        Self::Simple { input, kind }
    }

    /// Evaluates this predicate at a lookback depth.
    ///
    /// `ignore_kind` downgrades every simple check to plain presence; the
    /// strict-step scan uses it to ask "was anything unrelated active?"
    /// without caring about press edges.
    ///
    /// # Errors
    /// Fails fast when `lookback` is past the history capacity.
    pub fn evaluate(
        &self,
        history: &InputHistory,
        lookback: usize,
        facing: Facing,
        ignore_kind: bool,
    ) -> Result<bool> {
        match self {
            Self::Simple { input, kind } => {
                let resolved = input.resolve(facing);
                let kind = if ignore_kind { InputKind::Down } else { *kind };
                match kind {
                    InputKind::Down => history.is_down(resolved, lookback),
                    InputKind::Pressed => history.is_pressed(resolved, lookback),
                    InputKind::Released => history.is_released(resolved, lookback),
                }
            }
            Self::Junction { children, all } => {
                for child in children {
                    let hit = child.evaluate(history, lookback, facing, ignore_kind)?;
                    if *all && !hit {
                        return Ok(false);
                    }
                    if !*all && hit {
                        return Ok(true);
                    }
                }
                Ok(*all)
            }
        }
    }
}

impl fmt::Display for InputExpr {
    /// Renders the predicate back into notation.
    ///
    /// Parseable predicates round-trip; `Released` has no spelling and
    /// renders as its bare symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple { input, kind } => {
                if *kind == InputKind::Down {
                    write!(f, "*")?;
                }
                write!(f, "{input}")
            }
            Self::Junction { children, all } => {
                let operator = if *all { '+' } else { '|' };
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{operator}")?;
                    }
                    if matches!(child, Self::Junction { .. }) {
                        write!(f, "({child})")?;
                    } else {
                        write!(f, "{child}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Compiles a parse tree into an executable predicate.
///
/// # Errors
/// Returns [`crossup_foundation::ErrorKind::UnknownSymbol`] if a token
/// carries a character outside the alphabet. The tokenizer only emits
/// legal symbols, so reaching that case means the grammar and compiler
/// have drifted apart.
pub fn compile(node: &ParseNode) -> Result<InputExpr> {
    match node {
        ParseNode::Base(base) => {
            let input = GameInput::from_symbol(base.symbol)
                .ok_or_else(|| Error::unknown_symbol(base.symbol))?;
            let kind = if base.held {
                InputKind::Down
            } else {
                InputKind::Pressed
            };
            Ok(InputExpr::simple(input, kind))
        }
        ParseNode::All(children) => compile_junction(children, true),
        ParseNode::Any(children) => compile_junction(children, false),
        ParseNode::Group { inner, .. } => compile(inner),
    }
}

fn compile_junction(children: &[ParseNode], all: bool) -> Result<InputExpr> {
    let children = children.iter().map(compile).collect::<Result<Vec<_>>>()?;
    Ok(InputExpr::Junction { children, all })
}
