//! The notation lab.
//!
//! An authoring-time tool: type a notation to see how it tokenizes,
//! parses, and compiles; feed frames into a scratch history and check
//! commands against it. Nothing here runs during gameplay.

use std::fs;
use std::path::Path;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crossup_command::{Command, compile, parse, tokenize};
use crossup_foundation::{Facing, FrameSample, GameInput};
use crossup_history::InputHistory;

/// Interactive session state: a scratch history and a facing.
pub struct Repl {
    history: InputHistory,
    facing: Facing,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

impl Repl {
    /// Creates a session with an empty scratch history, facing right.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: InputHistory::new(),
            facing: Facing::Right,
        }
    }

    /// Runs the interactive loop until EOF, interrupt, or `:quit`.
    ///
    /// # Errors
    /// Returns an error when the line editor cannot be constructed or
    /// read from.
    pub fn run(&mut self) -> rustyline::Result<()> {
        let mut editor = DefaultEditor::new()?;
        println!("crossup notation lab — :help for commands");

        loop {
            match editor.readline("crossup> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(line)?;
                    if line == ":quit" || line == ":q" {
                        break;
                    }
                    println!("{}", self.eval_line(line));
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Evaluates every non-empty line of a file, printing the results.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> std::io::Result<()> {
        for line in fs::read_to_string(path)?.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            println!("{}", self.eval_line(line));
        }
        Ok(())
    }

    /// Evaluates one lab line and returns the rendered response.
    pub fn eval_line(&mut self, line: &str) -> String {
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            ":help" => HELP.to_string(),
            ":reset" => {
                self.history.reset();
                "history cleared".to_string()
            }
            ":facing" => self.set_facing(rest),
            ":feed" => self.feed(rest),
            ":history" => self.show_history(rest),
            ":check" => self.check(rest),
            _ if head.starts_with(':') => format!("unknown command {head} — :help lists them"),
            _ => inspect(line),
        }
    }

    fn set_facing(&mut self, arg: &str) -> String {
        match arg {
            "left" => {
                self.facing = Facing::Left;
                "facing left".to_string()
            }
            "right" => {
                self.facing = Facing::Right;
                "facing right".to_string()
            }
            "" => format!("facing {:?}", self.facing).to_lowercase(),
            other => format!("unknown facing {other:?} (left|right)"),
        }
    }

    /// Pushes one frame; each legal character becomes an active input.
    fn feed(&mut self, symbols: &str) -> String {
        let sample = FrameSample::from_inputs(
            symbols.chars().filter_map(GameInput::from_symbol),
        );
        let rendered = format!("{sample:?}");
        self.history.push(sample);
        format!("pushed {rendered}")
    }

    fn show_history(&self, arg: &str) -> String {
        let depth = arg.parse::<usize>().unwrap_or(8).min(self.history.capacity());
        let mut out = String::new();
        for lookback in 0..depth {
            match self.history.sample(lookback) {
                Ok(sample) => out.push_str(&format!("  -{lookback}: {sample:?}\n")),
                Err(err) => return format!("{err}"),
            }
        }
        out.trim_end().to_string()
    }

    /// `:check <notation> [window]` — compile and evaluate a command.
    fn check(&self, args: &str) -> String {
        let (notation, window) = match args.split_once(char::is_whitespace) {
            Some((notation, window)) => (notation, window.trim()),
            None => (args, ""),
        };
        if notation.is_empty() {
            return "usage: :check <notation> [window]".to_string();
        }
        let window = window.parse::<u32>().unwrap_or(18);
        match Command::parse(notation, window) {
            Ok(command) => match command.is_executed(&self.history, self.facing) {
                Ok(executed) => format!("{command} (window {window}) => {executed}"),
                Err(err) => format!("{err}"),
            },
            Err(err) => format!("{err}"),
        }
    }
}

/// Shows the full pipeline for one notation string.
fn inspect(notation: &str) -> String {
    let tokens = tokenize(notation);
    if tokens.is_empty() {
        return "no tokens".to_string();
    }
    let mut out = format!("tokens: {tokens:?}\n");
    match parse(&tokens) {
        Some(node) => {
            out.push_str(&format!("tree:   {node:?}\n"));
            match compile(&node) {
                Ok(expr) => out.push_str(&format!("expr:   {expr}")),
                Err(err) => out.push_str(&format!("compile error: {err}")),
            }
        }
        None => out.push_str("does not parse as a single input (try :check for sequences)"),
    }
    out
}

const HELP: &str = "\
notation          inspect a single input (tokens, tree, compiled expr)
:check N [W]      compile command N with window W (default 18) and evaluate
:feed [symbols]   push one frame; e.g. `:feed 2`, `:feed 6a`, `:feed` for idle
:history [n]      show the n most recent frames (default 8)
:facing [l|r]     show or set facing (left|right)
:reset            refill the scratch history with empty frames
:quit             leave the lab";
