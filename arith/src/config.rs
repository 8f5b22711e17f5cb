use std::path::PathBuf;

use compiler::{error::CompilerError, Program};

#[derive(Debug, PartialEq)]
pub enum Mode {
    Interactive,
    /// Parse a whole file once and exit.
    Batch(PathBuf),
}

#[derive(Debug, PartialEq)]
pub struct ReplConfig {
    pub prompt: String,
    pub banner: String,
    /// Any input line containing this word ends the session.
    pub exit_word: String,
    /// Reject characters the lexer does not recognize instead of treating
    /// them as end of input.
    pub strict: bool,
    pub mode: Mode,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "> ".into(),
            banner: "Repl v0.1".into(),
            exit_word: "exit".into(),
            strict: true,
            mode: Mode::Interactive,
        }
    }
}

impl ReplConfig {
    /// Builds a config from `[--permissive] [FILE]`, program name excluded.
    pub fn from_args<I>(args: I) -> Result<ReplConfig, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = ReplConfig::default();

        for arg in args {
            match arg.as_str() {
                "--permissive" => config.strict = false,
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown option '{}'", flag))
                }
                path => match config.mode {
                    Mode::Interactive => config.mode = Mode::Batch(path.into()),
                    Mode::Batch(_) => return Err("expected at most one input file".to_owned()),
                },
            }
        }

        Ok(config)
    }

    pub fn parse(&self, source: &str) -> Result<Program, CompilerError> {
        if self.strict {
            compiler::parse_strict(source)
        } else {
            compiler::parse(source)
        }
    }

    pub fn is_exit(&self, line: &str) -> bool {
        line.contains(&self.exit_word)
    }
}
