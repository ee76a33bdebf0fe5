use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "study-timer")]
#[command(about = "A study-session timer with randomized break reminders")]
#[command(long_about = "study-timer - A study-session timer with randomized break reminders

Asks how long you want to study, then counts the session down while showing
the elapsed time. At random points during the session it tells you to take a
short break, and it plays a cue when the session is over. After each session
it asks again, until you stop it with Ctrl-C.

CONFIGURATION:
  ~/.study-timer/config.yaml    Minimum session length, break interval
                                range, and audio cues

EXAMPLES:
  study-timer                            Start with the default configuration
  study-timer --config ./config.yaml     Use a specific configuration file
  study-timer --log-level debug          Show timer internals on stderr")]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file
    ///
    /// Defaults to ~/.study-timer/config.yaml. A missing file means
    /// built-in defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter for diagnostics written to stderr
    ///
    /// Accepts tracing filter syntax, e.g. "debug" or "study_timer=info".
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
