//! CLI - Command Line Interface for LovePlay
//!
//! Everything the TUI persists can also be driven from a script. Output is
//! human text on a terminal and JSON otherwise.
//!
//! # Examples
//!
//! ```bash
//! # Spin the idea wheel
//! loveplay spin
//!
//! # Truth or dare
//! loveplay pick dare --json
//! loveplay add truth "Apa mimpi terbesarmu?"
//!
//! # Settings
//! loveplay set --left Budi --right Sari --accent 3
//! loveplay show
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::models::Mode;
use crate::ui::theme::ACCENT_PALETTE;
use crate::ui::ThemeMode;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error (I/O, serialization)
    Error = 1,
    /// Invalid arguments or rejected input
    InvalidArgs = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// LovePlay - games for couples, in your terminal
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "loveplay",
    version,
    author = "M. Samjaya",
    about = "Games for couples: idea wheel, truth or dare, love counter",
    long_about = "Spin a wheel of date ideas, play truth or dare with your own prompts \
                  and keep a love counter, all personalised with both names.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  loveplay                               Launch interactive TUI\n\
                  loveplay spin                          Spin the idea wheel\n\
                  loveplay pick dare                     Random dare\n\
                  loveplay add truth \"Apa mimpimu?\"      Add a custom truth\n\
                  loveplay set --left Budi --right Sari  Change names"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Path to the preference store
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Colour scheme: auto, light or dark
    #[arg(long, global = true)]
    pub theme: Option<ThemeMode>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Spin the date idea wheel
    #[command(visible_alias = "w")]
    Spin(SpinCmd),

    /// Pick a random truth or dare
    #[command(visible_alias = "p")]
    Pick(PickCmd),

    /// Add a custom truth or dare
    #[command(visible_alias = "a")]
    Add(AddCmd),

    /// Show settings and custom prompts
    Show(ShowCmd),

    /// Change names or accent colour
    Set(SetCmd),
}

/// Truth or dare selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Truth,
    Dare,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Mode {
        match arg {
            ModeArg::Truth => Mode::Truth,
            ModeArg::Dare => Mode::Dare,
        }
    }
}

/// Spin the idea wheel once
#[derive(Args, Debug)]
pub struct SpinCmd {
    /// Seed the random draw (repeatable results)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Pick a random prompt from builtin and custom prompts
#[derive(Args, Debug)]
pub struct PickCmd {
    /// truth or dare
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// Seed the random draw (repeatable results)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Add a custom prompt
#[derive(Args, Debug)]
pub struct AddCmd {
    /// truth or dare
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// Prompt text (trimmed; blank and duplicate prompts are rejected)
    #[arg(required = true)]
    pub text: String,
}

/// Show the stored settings
#[derive(Args, Debug)]
pub struct ShowCmd {}

/// Update settings; omitted fields keep their value
#[derive(Args, Debug)]
pub struct SetCmd {
    /// Left partner's name
    #[arg(long, short = 'l')]
    pub left: Option<String>,

    /// Right partner's name
    #[arg(long, short = 'r')]
    pub right: Option<String>,

    /// Accent colour index (0-5)
    #[arg(long, short = 'a', value_parser = parse_accent)]
    pub accent: Option<i32>,
}

impl SetCmd {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.accent.is_none()
    }
}

/// Validate an accent index against the palette
pub fn parse_accent(s: &str) -> Result<i32, String> {
    let index: i32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0..ACCENT_PALETTE.len() as i32).contains(&index) {
        Ok(index)
    } else {
        Err(format!("accent must be between 0 and {}", ACCENT_PALETTE.len() - 1))
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Standard JSON output wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub code: i32,
    pub message: String,
}

impl<T> JsonOutput<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error_msg(msg: &str, code: ExitCode) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(JsonError {
                code: code.into(),
                message: msg.to_string(),
            }),
        }
    }
}

/// `spin` response
#[derive(Debug, Serialize, Deserialize)]
pub struct SpinResult {
    pub idea: String,
    pub turns: u32,
}

/// `pick` response
#[derive(Debug, Serialize, Deserialize)]
pub struct PickResult {
    pub mode: Mode,
    pub prompt: String,
}

/// `add` response
#[derive(Debug, Serialize, Deserialize)]
pub struct AddResult {
    pub mode: Mode,
    pub added: String,
    pub total: usize,
}

/// `show` and `set` response
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsReport {
    pub left_name: String,
    pub right_name: String,
    pub accent_index: i32,
    pub greeting: String,
    pub custom_truths: Vec<String>,
    pub custom_dares: Vec<String>,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data: JSON envelope, or `human` on a terminal
    pub fn print<T: Serialize>(&self, data: T, human: impl std::fmt::Display) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", human);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        log::warn!("{}", msg);
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
