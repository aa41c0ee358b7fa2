//! Command line configuration for sorting and logging.

use std::fs::File;
use std::io::BufWriter;

use crate::logging::{stderr_logger, writer_logger, ThreewayLogger};
use crate::sort::{Sorter, UnorderedPolicy};

/// How values are sorted, and where events are logged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Preserve the order of equivalent elements in total sorts.
    pub stable: bool,
    /// What to do with unordered elements in partial sorts.
    pub policy: UnorderedPolicy,
    /// Print logged events on stderr.
    pub report: bool,
    /// Encode logged events into this file.
    pub log_file: Option<String>,
}

impl Config {
    /// Constructs a configuration by parsing supplied text arguments, and returns it along
    /// with the arguments that are not options.
    ///
    /// The arguments should not include the program name. Arguments starting with `-`, such
    /// as negative amounts, must follow a `--`.
    ///
    /// ```
    /// use threeway::{Config, UnorderedPolicy};
    ///
    /// let args = ["-s", "--unordered", "trailing", "--", "-3.07", "42.50"];
    /// let (config, free) = Config::from_args(args.iter().map(|s| s.to_string())).unwrap();
    /// assert!(config.stable);
    /// assert_eq!(config.policy, UnorderedPolicy::Trailing);
    /// assert_eq!(free, ["-3.07", "42.50"]);
    /// ```
    pub fn from_args<I: IntoIterator<Item=String>>(args: I) -> Result<(Config, Vec<String>), String> {
        let mut opts = getopts::Options::new();
        opts.optflag("s", "stable", "preserve the order of equivalent values");
        opts.optopt("u", "unordered", "placement of unordered values (exclude, trailing, or unspecified)", "POLICY");
        opts.optflag("r", "report", "prints logged events on stderr");
        opts.optopt("l", "log", "file receiving bincode-encoded events", "FILE");

        let matches = opts.parse(args).map_err(|e| e.to_string())?;

        let config = Config {
            stable: matches.opt_present("stable"),
            policy: matches.opt_get_default("unordered", UnorderedPolicy::default())?,
            report: matches.opt_present("report"),
            log_file: matches.opt_str("log"),
        };
        Ok((config, matches.free))
    }

    /// A sorter following this configuration, logging to `logger` if supplied.
    pub fn sorter(&self, logger: Option<ThreewayLogger>) -> Sorter {
        let sorter = Sorter::new(self.policy).with_stable(self.stable);
        match logger {
            Some(logger) => sorter.with_logger(logger),
            None => sorter,
        }
    }

    /// The logger this configuration asks for, if any.
    ///
    /// A log file takes precedence over reporting on stderr.
    pub fn logger(&self) -> Result<Option<ThreewayLogger>, String> {
        if let Some(path) = &self.log_file {
            let file = File::create(path).map_err(|e| format!("cannot create {}: {}", path, e))?;
            Ok(Some(writer_logger(0, BufWriter::new(file))))
        }
        else if self.report {
            Ok(Some(stderr_logger(0)))
        }
        else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<(Config, Vec<String>), String> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let (config, free) = parse(&["42.50", "0.99"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(free, ["42.50", "0.99"]);
        assert!(config.logger().unwrap().is_none());
    }

    #[test]
    fn all_options() {
        let (config, free) = parse(&["--stable", "-u", "unspecified", "-r", "-l", "events.bin"]).unwrap();
        assert!(config.stable);
        assert!(config.report);
        assert_eq!(config.policy, UnorderedPolicy::Unspecified);
        assert_eq!(config.log_file.as_deref(), Some("events.bin"));
        assert!(free.is_empty());
        assert_eq!(config.sorter(None).policy(), UnorderedPolicy::Unspecified);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--unordered", "sideways"]).unwrap_err().contains("sideways"));
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["-u"]).is_err());
    }

    #[test]
    fn report_without_file() {
        let (config, _) = parse(&["-r"]).unwrap();
        assert!(config.logger().unwrap().is_some_and(|logger| logger.is_active()));
    }
}
