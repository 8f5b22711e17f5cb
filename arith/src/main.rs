use std::io::Write;

use arith::{
    config::{Mode, ReplConfig},
    error::ArithError,
};
use rustyline::{error::ReadlineError, history::FileHistory};

#[derive(Debug, PartialEq)]
enum IterStatus {
    Continue,
    Break,
}

struct Repl {
    config: ReplConfig,
    editor: rustyline::Editor<(), FileHistory>,
    out: Box<dyn Write>,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Result<Self, ArithError> {
        Ok(Repl {
            out: Box::new(std::io::stderr()),
            editor: rustyline::DefaultEditor::new()?,
            config,
        })
    }

    fn iter(&mut self) -> Result<IterStatus, ArithError> {
        match self.editor.readline(&self.config.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    return Ok(IterStatus::Continue);
                }

                self.record_history(line.trim())?;
                self.handle_line(&line)
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(&mut self.out, "SIGINT received; exiting...")?;
                Ok(IterStatus::Break)
            }
            Err(ReadlineError::Eof) => Ok(IterStatus::Break),
            Err(err) => {
                writeln!(&mut self.out, "Error: {err:?}")?;
                Ok(IterStatus::Continue)
            }
        }
    }

    fn record_history(&mut self, line: &str) -> Result<(), ArithError> {
        if let Err(err) = self.editor.add_history_entry(line) {
            writeln!(&mut self.out, "Failed to record history: {err}")?;
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<IterStatus, ArithError> {
        if self.config.is_exit(line) {
            return Ok(IterStatus::Break);
        }

        match self.config.parse(line) {
            Ok(program) => println!("{:#?}", program),
            Err(e) => writeln!(&mut self.out, "{}", e)?,
        }

        Ok(IterStatus::Continue)
    }

    pub fn run(&mut self) -> Result<(), ArithError> {
        writeln!(&mut self.out, "\n{}", self.config.banner)?;
        while self.iter()? == IterStatus::Continue {}
        Ok(())
    }
}

fn run_batch(config: &ReplConfig, path: &std::path::Path) -> Result<(), ArithError> {
    let source = std::fs::read_to_string(path)?;
    let program = config.parse(&source)?;
    println!("{:#?}", program);
    Ok(())
}

fn main() -> Result<(), ArithError> {
    let config = ReplConfig::from_args(std::env::args().skip(1)).map_err(ArithError::UsageError)?;

    if let Mode::Batch(path) = &config.mode {
        return run_batch(&config, path);
    }

    Repl::new(config)?.run()
}
