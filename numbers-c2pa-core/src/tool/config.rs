//! c2patool adapter configuration
//!
//! Loaded from environment variables with defaults that work when
//! `c2patool` is on `PATH`.

use std::ffi::OsString;
use std::time::Duration;

/// Environment variable naming the c2patool executable
pub const TOOL_PATH_ENV: &str = "C2PATOOL_PATH";

/// Environment variable for the thumbnail download timeout in seconds
pub const THUMBNAIL_TIMEOUT_ENV: &str = "C2PATOOL_THUMBNAIL_TIMEOUT_SECS";

/// Environment variable for the number of thumbnail download retries
pub const THUMBNAIL_RETRIES_ENV: &str = "C2PATOOL_THUMBNAIL_RETRIES";

const DEFAULT_PROGRAM: &str = "c2patool";
const DEFAULT_THUMBNAIL_TIMEOUT_SECS: u64 = 120;
const DEFAULT_THUMBNAIL_RETRIES: u32 = 3;

/// Upper bound applied to the thumbnail timeout
pub const MAX_THUMBNAIL_TIMEOUT: Duration = Duration::from_secs(3600);

/// Upper bound applied to the thumbnail retry count
pub const MAX_THUMBNAIL_RETRIES: u32 = 20;

#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Executable to run (default: `c2patool`, resolved through `PATH`)
    pub program: OsString,
    /// Arguments placed before the tool's own, for launching through a
    /// wrapper such as `sh <script>` or `docker run ...`
    pub program_args: Vec<OsString>,
    /// Timeout for a single thumbnail request (default: 120s)
    pub thumbnail_timeout: Duration,
    /// Retries for transient thumbnail failures (default: 3)
    pub thumbnail_retries: u32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            program_args: Vec::new(),
            thumbnail_timeout: Duration::from_secs(DEFAULT_THUMBNAIL_TIMEOUT_SECS),
            thumbnail_retries: DEFAULT_THUMBNAIL_RETRIES,
        }
    }
}

impl ToolConfig {
    /// Load configuration from environment variables
    ///
    /// Unparseable numbers fall back to the defaults; out-of-range ones are
    /// clamped to [`MAX_THUMBNAIL_TIMEOUT`] and [`MAX_THUMBNAIL_RETRIES`].
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let parse = |name: &str| {
            lookup(name).and_then(|v| v.to_str().and_then(|s| s.trim().parse::<u64>().ok()))
        };

        let program = lookup(TOOL_PATH_ENV)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_PROGRAM));

        let thumbnail_timeout_secs = parse(THUMBNAIL_TIMEOUT_ENV)
            .unwrap_or(DEFAULT_THUMBNAIL_TIMEOUT_SECS)
            .clamp(1, MAX_THUMBNAIL_TIMEOUT.as_secs());

        let thumbnail_retries = parse(THUMBNAIL_RETRIES_ENV)
            .map_or(DEFAULT_THUMBNAIL_RETRIES, |n| {
                n.min(u64::from(MAX_THUMBNAIL_RETRIES)) as u32
            });

        Self {
            program,
            program_args: Vec::new(),
            thumbnail_timeout: Duration::from_secs(thumbnail_timeout_secs),
            thumbnail_retries,
        }
    }

    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_program_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.program_args.push(arg.into());
        self
    }

    pub fn with_thumbnail_timeout(mut self, timeout: Duration) -> Self {
        self.thumbnail_timeout = timeout;
        self
    }

    pub fn with_thumbnail_retries(mut self, retries: u32) -> Self {
        self.thumbnail_retries = retries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert_eq!(config.program, "c2patool");
        assert!(config.program_args.is_empty());
        assert_eq!(config.thumbnail_timeout, Duration::from_secs(120));
        assert_eq!(config.thumbnail_retries, 3);
    }

    #[test]
    fn test_builder_setters() {
        let config = ToolConfig::default()
            .with_program("sh")
            .with_program_arg("/opt/fake-c2patool.sh")
            .with_thumbnail_timeout(Duration::from_secs(5))
            .with_thumbnail_retries(0);

        assert_eq!(config.program, "sh");
        assert_eq!(config.program_args, vec![OsString::from("/opt/fake-c2patool.sh")]);
        assert_eq!(config.thumbnail_timeout, Duration::from_secs(5));
        assert_eq!(config.thumbnail_retries, 0);
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_without_variables_uses_defaults() {
        let config = ToolConfig::from_lookup(lookup(&[]));
        assert_eq!(config.program, "c2patool");
        assert_eq!(config.thumbnail_timeout, Duration::from_secs(120));
        assert_eq!(config.thumbnail_retries, 3);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ToolConfig::from_lookup(lookup(&[
            (TOOL_PATH_ENV, "/usr/local/bin/c2patool"),
            (THUMBNAIL_TIMEOUT_ENV, "30"),
            (THUMBNAIL_RETRIES_ENV, " 0 "),
        ]));
        assert_eq!(config.program, "/usr/local/bin/c2patool");
        assert_eq!(config.thumbnail_timeout, Duration::from_secs(30));
        assert_eq!(config.thumbnail_retries, 0);
    }

    #[test]
    fn test_from_lookup_unparseable_values_fall_back() {
        let config = ToolConfig::from_lookup(lookup(&[
            (TOOL_PATH_ENV, ""),
            (THUMBNAIL_TIMEOUT_ENV, "two minutes"),
            (THUMBNAIL_RETRIES_ENV, "-1"),
        ]));
        assert_eq!(config.program, "c2patool");
        assert_eq!(config.thumbnail_timeout, Duration::from_secs(120));
        assert_eq!(config.thumbnail_retries, 3);
    }

    #[test]
    fn test_from_lookup_clamps_large_values() {
        let config = ToolConfig::from_lookup(lookup(&[
            (THUMBNAIL_TIMEOUT_ENV, "18446744073709551615"),
            (THUMBNAIL_RETRIES_ENV, "4294967295"),
        ]));
        assert_eq!(config.thumbnail_timeout, MAX_THUMBNAIL_TIMEOUT);
        assert_eq!(config.thumbnail_retries, MAX_THUMBNAIL_RETRIES);

        let config = ToolConfig::from_lookup(lookup(&[(THUMBNAIL_TIMEOUT_ENV, "0")]));
        assert_eq!(config.thumbnail_timeout, Duration::from_secs(1));
    }
}
