use std::fmt;
use std::path::{Path, PathBuf};

/// A single external command: program, arguments and how to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    stdin: Option<String>,
    check: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            stdin: None,
            check: true,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Text written to the child's stdin before it is closed.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Don't treat a non-zero exit code as an error.
    pub fn unchecked(mut self) -> Self {
        self.check = false;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn input(&self) -> Option<&str> {
        self.stdin.as_deref()
    }

    pub fn checks_exit_code(&self) -> bool {
        self.check
    }

    /// The full argument vector, program first.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let invocation = Invocation::new("firebase")
            .args(["deploy", "--only", "hosting"])
            .current_dir("/tmp");

        assert_eq!(invocation.to_string(), "firebase deploy --only hosting");
        assert_eq!(invocation.working_dir(), Some(Path::new("/tmp")));
        assert!(invocation.checks_exit_code());
    }

    #[test]
    fn unchecked_disables_failure_policy() {
        let invocation = Invocation::new("npm").arg("--version").unchecked();
        assert!(!invocation.checks_exit_code());
        assert_eq!(invocation.argv(), vec!["npm", "--version"]);
    }
}
