//! MeCab Analyzer Implementation
//!
//! Drives an installed `mecab` executable (for example with a Korean
//! dictionary) and returns its default tabular output.
//!
//! # Lifecycle
//!
//! - Construction probes the executable and the configured dictionaries.
//!   Any failure there is an [`AnalyzerError::Initialization`] and no handle
//!   is returned.
//! - Every `analyze` call opens its own session (one child process). The
//!   session is killed and reaped when it goes out of scope, whether the call
//!   succeeded or not.
//!
//! # Examples
//!
//! ```no_run
//! use nounsift_analyzer::{MecabAnalyzer, MecabConfig};
//! use nounsift_domain::traits::Analyzer;
//!
//! # fn main() -> Result<(), nounsift_analyzer::AnalyzerError> {
//! let config = MecabConfig::from_arg_string("-d /usr/local/lib/mecab/dic/mecab-ko-dic")?;
//! let analyzer = MecabAnalyzer::new(config)?;
//! let raw = analyzer.analyze("아버지가 방에 들어가신다")?;
//! println!("{}", raw);
//! # Ok(())
//! # }
//! ```

use crate::AnalyzerError;
use nounsift_domain::traits::Analyzer as AnalyzerTrait;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use tracing::{debug, info, warn};

/// Default executable name
pub const DEFAULT_PROGRAM: &str = "mecab";

/// Configuration for the MeCab backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MecabConfig {
    /// Executable to run (looked up on `PATH` when relative)
    #[serde(default = "default_program")]
    pub program: PathBuf,

    /// System dictionary directory (`-d`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dicdir: Option<PathBuf>,

    /// User dictionary file (`-u`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userdic: Option<PathBuf>,

    /// Any other arguments, passed through unchanged
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_program() -> PathBuf {
    PathBuf::from(DEFAULT_PROGRAM)
}

impl Default for MecabConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            dicdir: None,
            userdic: None,
            extra_args: Vec::new(),
        }
    }
}

impl MecabConfig {
    /// Build a configuration from a MeCab option string
    ///
    /// Recognizes `-d DIR`, `-dDIR`, `--dicdir=DIR`, `-u FILE`, `-uFILE` and
    /// `--userdic=FILE`. Everything else is kept in `extra_args`.
    ///
    /// ```
    /// use nounsift_analyzer::MecabConfig;
    ///
    /// let config = MecabConfig::from_arg_string("-d /opt/dic -N 1").unwrap();
    /// assert_eq!(config.dicdir.unwrap().to_str(), Some("/opt/dic"));
    /// assert_eq!(config.extra_args, vec!["-N", "1"]);
    /// ```
    pub fn from_arg_string(args: &str) -> Result<Self, AnalyzerError> {
        let mut config = Self::default();
        let mut tokens = args.split_whitespace();

        while let Some(token) = tokens.next() {
            if let Some(value) = option_value(token, "-d", "--dicdir", &mut tokens)? {
                config.dicdir = Some(PathBuf::from(value));
            } else if let Some(value) = option_value(token, "-u", "--userdic", &mut tokens)? {
                config.userdic = Some(PathBuf::from(value));
            } else {
                config.extra_args.push(token.to_string());
            }
        }

        Ok(config)
    }

    /// Arguments passed to every invocation
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(dicdir) = &self.dicdir {
            args.push(OsString::from("-d"));
            args.push(dicdir.clone().into_os_string());
        }
        if let Some(userdic) = &self.userdic {
            args.push(OsString::from("-u"));
            args.push(userdic.clone().into_os_string());
        }
        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }

    /// Validate the configured paths
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.program.as_os_str().is_empty() {
            return Err(AnalyzerError::Initialization(
                "program must not be empty".to_string(),
            ));
        }
        if let Some(dicdir) = &self.dicdir {
            if !dicdir.is_dir() {
                return Err(AnalyzerError::Initialization(format!(
                    "dictionary directory not found: {}",
                    dicdir.display()
                )));
            }
        }
        if let Some(userdic) = &self.userdic {
            if !userdic.is_file() {
                return Err(AnalyzerError::Initialization(format!(
                    "user dictionary not found: {}",
                    userdic.display()
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

/// Match `short VALUE`, `shortVALUE` or `long=VALUE`
fn option_value<'a>(
    token: &'a str,
    short: &str,
    long: &str,
    rest: &mut impl Iterator<Item = &'a str>,
) -> Result<Option<&'a str>, AnalyzerError> {
    if token == short || token == long {
        return rest
            .next()
            .map(Some)
            .ok_or_else(|| AnalyzerError::Initialization(format!("option {} requires a value", token)));
    }
    if let Some(value) = token.strip_prefix(long).and_then(|v| v.strip_prefix('=')) {
        return Ok(Some(value));
    }
    if !token.starts_with("--") {
        if let Some(value) = token.strip_prefix(short).filter(|v| !v.is_empty()) {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Analyzer backed by the `mecab` executable
///
/// The handle only holds the resolved invocation; it is safe to share across
/// threads and to call concurrently.
#[derive(Debug, Clone)]
pub struct MecabAnalyzer {
    program: PathBuf,
    args: Vec<OsString>,
    version: String,
}

impl MecabAnalyzer {
    /// Construct the analyzer, probing the executable once
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Initialization`] if a dictionary path is
    /// missing, the executable cannot be started, or it rejects the options.
    pub fn new(config: MecabConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        let args = config.args();

        let probe = Command::new(&config.program)
            .args(&args)
            .arg("-v")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                AnalyzerError::Initialization(format!(
                    "failed to start {}: {}",
                    config.program.display(),
                    e
                ))
            })?;

        if !probe.status.success() {
            return Err(AnalyzerError::Initialization(format!(
                "{} exited with {}: {}",
                config.program.display(),
                probe.status,
                String::from_utf8_lossy(&probe.stderr).trim()
            )));
        }

        let version = String::from_utf8_lossy(&probe.stdout).trim().to_string();
        info!(
            "MeCab analyzer ready ({}, version '{}')",
            config.program.display(),
            version
        );

        Ok(Self {
            program: config.program,
            args,
            version,
        })
    }

    /// Construct with the default configuration (`mecab` on `PATH`)
    pub fn default_config() -> Result<Self, AnalyzerError> {
        Self::new(MecabConfig::default())
    }

    /// Version string reported by the executable
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl AnalyzerTrait for MecabAnalyzer {
    type Error = AnalyzerError;

    fn analyze(&self, text: &str) -> Result<String, Self::Error> {
        let sentence = text.replace(['\r', '\n'], " ");
        let session = Session::open(&self.program, &self.args)?;
        let output = session.run(sentence)?;
        debug!("MeCab produced {} bytes for {} chars", output.len(), text.chars().count());
        Ok(output)
    }
}

/// Per-call analysis state
///
/// Owns the child process until it has been waited on. Dropping an
/// unfinished session kills and reaps the process.
struct Session {
    child: Option<Child>,
}

impl Session {
    fn open(program: &Path, args: &[OsString]) -> Result<Self, AnalyzerError> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                AnalyzerError::Analysis(format!("failed to start {}: {}", program.display(), e))
            })?;
        Ok(Self { child: Some(child) })
    }

    fn run(mut self, sentence: String) -> Result<String, AnalyzerError> {
        let child = self
            .child
            .as_mut()
            .ok_or_else(|| AnalyzerError::Analysis("session already closed".to_string()))?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AnalyzerError::Analysis("analyzer stdin unavailable".to_string()))?;

        // Written from a separate thread so a full stdout pipe cannot stall us.
        let writer = thread::spawn(move || {
            stdin.write_all(sentence.as_bytes())?;
            stdin.write_all(b"\n")
        });

        let child = self
            .child
            .take()
            .ok_or_else(|| AnalyzerError::Analysis("session already closed".to_string()))?;
        let output = child
            .wait_with_output()
            .map_err(|e| AnalyzerError::Analysis(format!("failed to read analyzer output: {}", e)))?;

        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(AnalyzerError::Analysis(format!(
                    "failed to write analyzer input: {}",
                    e
                )))
            }
            Err(_) => {
                return Err(AnalyzerError::Analysis(
                    "analyzer input writer panicked".to_string(),
                ))
            }
        }

        if !output.status.success() {
            return Err(AnalyzerError::Analysis(format!(
                "analyzer exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| AnalyzerError::Analysis(format!("analyzer output is not UTF-8: {}", e)))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                warn!("Failed to kill analysis session: {}", e);
            }
            let _ = child.wait();
            debug!("Released unfinished analysis session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_string_dicdir_forms() {
        for args in ["-d /dic", "-d/dic", "--dicdir=/dic", "--dicdir /dic"] {
            let config = MecabConfig::from_arg_string(args).unwrap();
            assert_eq!(config.dicdir, Some(PathBuf::from("/dic")), "args: {}", args);
            assert!(config.extra_args.is_empty());
        }
    }

    #[test]
    fn test_arg_string_userdic_and_passthrough() {
        let config = MecabConfig::from_arg_string("-u user.dic --marginal -N 2").unwrap();
        assert_eq!(config.userdic, Some(PathBuf::from("user.dic")));
        assert_eq!(config.extra_args, vec!["--marginal", "-N", "2"]);
    }

    #[test]
    fn test_arg_string_empty_is_default() {
        assert_eq!(MecabConfig::from_arg_string("").unwrap(), MecabConfig::default());
        assert_eq!(MecabConfig::from_arg_string("   ").unwrap(), MecabConfig::default());
    }

    #[test]
    fn test_arg_string_missing_value() {
        let err = MecabConfig::from_arg_string("-d").unwrap_err();
        assert!(matches!(err, AnalyzerError::Initialization(_)));
    }

    #[test]
    fn test_args_order() {
        let config = MecabConfig {
            program: default_program(),
            dicdir: Some(PathBuf::from("/dic")),
            userdic: Some(PathBuf::from("/u.dic")),
            extra_args: vec!["-a".to_string()],
        };
        let args: Vec<String> = config
            .args()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, vec!["-d", "/dic", "-u", "/u.dic", "-a"]);
    }

    #[test]
    fn test_validate_missing_dicdir() {
        let config = MecabConfig {
            dicdir: Some(PathBuf::from("/definitely/not/a/dicdir")),
            ..MecabConfig::default()
        };
        assert!(matches!(config.validate(), Err(AnalyzerError::Initialization(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MecabConfig::from_arg_string("-d /dic -a").unwrap();
        let toml_str = config.to_toml().unwrap();
        let parsed = MecabConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_toml_defaults() {
        let parsed = MecabConfig::from_toml("").unwrap();
        assert_eq!(parsed.program, PathBuf::from("mecab"));
    }
}
