//! Runner configuration.

use std::fmt;

/// Error from parsing runner arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Argument was not recognized.
    UnknownArgument { argument: String },
    /// `--filter=` was given with no pattern.
    EmptyFilter,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument { argument } => write!(f, "unknown argument: {argument}"),
            Self::EmptyFilter => write!(f, "--filter requires a non-empty pattern"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for a test run.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Only run cases whose name contains this substring.
    pub filter: Option<String>,
    /// Print passing cases in the report, not just failures.
    pub verbose: bool,
    /// Run cases on a thread pool.
    pub parallel: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            filter: None,
            verbose: false,
            parallel: true,
        }
    }
}

impl RunnerConfig {
    /// Parse a config from command-line style arguments.
    ///
    /// Recognizes `--filter=<pattern>`, `-v`/`--verbose`, `--no-parallel`,
    /// and `--parallel`. Later arguments override earlier ones.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = RunnerConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            if let Some(pattern) = arg.strip_prefix("--filter=") {
                if pattern.is_empty() {
                    return Err(ConfigError::EmptyFilter);
                }
                config.filter = Some(pattern.to_string());
            } else {
                match arg {
                    "-v" | "--verbose" => config.verbose = true,
                    "--no-parallel" => config.parallel = false,
                    "--parallel" => config.parallel = true,
                    _ => {
                        return Err(ConfigError::UnknownArgument {
                            argument: arg.to_string(),
                        });
                    }
                }
            }
        }
        Ok(config)
    }
}
