use clap::{Parser, ValueEnum};

/// Output format of log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per record
    Json,
}

/// Command line interface for the application
#[derive(Parser, Debug)]
#[command(about = "Serves HTTP-triggered greeting functions")]
pub struct Cli {
    /// Path to a YAML or TOML file declaring functions and global options
    #[arg(short, long)]
    pub config: Option<String>,

    /// Host to listen on, overrides the configuration file
    #[arg(long, env = "FUNCTIONS_HOST")]
    pub host: Option<String>,

    /// Port to listen on, overrides the configuration file
    #[arg(short, long, env = "FUNCTIONS_PORT")]
    pub port: Option<u16>,

    /// Maximum concurrent invocations across all functions
    #[arg(long, env = "FUNCTIONS_MAX_INSTANCES")]
    pub max_instances: Option<usize>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Output format of stdout logs
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Also write logs to a daily rotating file under `logs/`
    #[arg(long)]
    pub log_to_file: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_overrides_unset() {
        let cli = Cli::try_parse_from(["hello-functions"]).unwrap();

        assert!(cli.config.is_none());
        assert_eq!(cli.logging_level, "info");
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert!(!cli.log_to_file);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "hello-functions",
            "-c",
            "functions.yaml",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--max-instances",
            "2",
            "--log-format",
            "json",
            "--log-to-file",
        ])
        .unwrap();

        assert_eq!(cli.config.as_deref(), Some("functions.yaml"));
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.max_instances, Some(2));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(cli.log_to_file);
    }
}
