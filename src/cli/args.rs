use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "studymate")]
#[command(about = "A study companion for your terminal")]
#[command(long_about = "studymate - a study companion for your terminal

Chat with a study assistant, block distracting apps while you work, and run
pomodoro-style study timers. Session state lives for the lifetime of the
command; nothing is synced or persisted between runs.

QUICK START:
  studymate tui             Launch the full-screen interface
  studymate chat            Talk to the study assistant
  studymate timer           Run a 25-minute study countdown
  studymate apps            Show the distraction blocker roster

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  studymate <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Talk to the study assistant
    ///
    /// Opens an interactive conversation. The assistant offers a few quick
    /// prompts before your first message; replies arrive after a short,
    /// configurable latency. Use --message to send a single message and
    /// print the reply without entering the conversation loop.
    #[command(alias = "c")]
    Chat(ChatArgs),

    /// Run the study countdown timer
    ///
    /// Counts down in the terminal and exits when the timer finishes.
    /// Defaults to the configured pomodoro length (25 minutes).
    #[command(alias = "t")]
    Timer(TimerArgs),

    /// Show the distraction blocker roster
    ///
    /// Lists the blockable apps with their block flags and usage. Toggles
    /// apply in-memory for this invocation only; there is no OS-level
    /// blocking and nothing is persisted.
    Apps(AppsArgs),

    /// Show today's study plan
    ///
    /// Lists the planned study sessions with a completion summary.
    Sessions,

    /// Launch the full-screen interface
    ///
    /// A main menu with the assistant chat and the distraction blocker
    /// screens.
    Tui,

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ChatArgs {
    /// Send a single message and print the assistant's reply
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Args)]
pub struct TimerArgs {
    /// Countdown length in minutes (defaults to the configured pomodoro)
    #[arg(short, long)]
    pub minutes: Option<u32>,
}

#[derive(Args)]
pub struct AppsArgs {
    /// Flip the block flag for the app at this index before display
    /// (repeatable)
    #[arg(short, long, value_name = "INDEX")]
    pub toggle: Vec<usize>,

    /// Enter study mode: block every app in the roster
    #[arg(long)]
    pub study_mode: bool,
}
