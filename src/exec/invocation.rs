//! Toolchain invocations.

use super::environment::EnvOverlay;
use super::TOOLCHAIN;
use crate::error::{GomError, Result};

/// A program to run with its arguments and environment overlay.
///
/// The working directory is always inherited from gom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path; bare names are looked up on `PATH`.
    pub program: String,
    /// Arguments after the program.
    pub args: Vec<String>,
    /// Variables layered over the inherited environment (overlay wins).
    pub env: EnvOverlay,
}

impl Invocation {
    /// Build from an argument vector whose first element is the program.
    pub fn new<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().ok_or_else(|| GomError::Usage {
            message: "no command given to execute".to_string(),
        })?;
        Ok(Self {
            program,
            args: argv.collect(),
            env: EnvOverlay::new(),
        })
    }

    /// `go <subcommand> <args..>`.
    ///
    /// # Example
    ///
    /// ```
    /// use gom::exec::Invocation;
    ///
    /// let inv = Invocation::toolchain("test", &["-run".to_string(), "Foo".to_string()]);
    /// assert_eq!(inv.argv(), ["go", "test", "-run", "Foo"]);
    /// ```
    pub fn toolchain(subcommand: &str, args: &[String]) -> Self {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(subcommand.to_string());
        full.extend(args.iter().cloned());
        Self::program(TOOLCHAIN, full)
    }

    /// A named program with arguments.
    pub fn program(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
            env: EnvOverlay::new(),
        }
    }

    /// Attach an environment overlay, replacing any previous one.
    pub fn with_env(mut self, env: EnvOverlay) -> Self {
        self.env = env;
        self
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}
