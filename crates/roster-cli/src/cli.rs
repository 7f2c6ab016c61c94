//! CLI argument definitions for the roster tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::{Language, Languages};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Browse and maintain the staff profile roster",
    long_about = "Browse and maintain the staff profile roster.\n\n\
                  Profiles are read from a CSV file. Searching, filtering and sorting \
                  never change the file; add, update and delete require a login and \
                  write the roster back as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Roster CSV file.
    #[arg(
        long = "data",
        value_name = "CSV",
        env = "ROSTER_DATA",
        default_value = "teachers.csv",
        global = true
    )]
    pub data: PathBuf,

    /// File the login session is kept in between runs.
    #[arg(
        long = "session-file",
        value_name = "PATH",
        env = "ROSTER_SESSION_FILE",
        default_value = ".roster-session.json",
        global = true
    )]
    pub session_file: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include personal profile values such as names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List profiles matching the given search, filters and sort.
    List(ListArgs),

    /// Show one profile in full.
    Show {
        /// Profile id, e.g. teacher-3.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List every distinct skill in the roster.
    Skills,

    /// Write the roster as CSV.
    Export {
        /// Destination file (prints to stdout when omitted).
        #[arg(long = "output", short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Start a session.
    Login {
        #[arg(value_name = "USERNAME")]
        username: String,
        #[arg(value_name = "PASSWORD")]
        password: String,
    },

    /// End the current session.
    Logout,

    /// Show the logged-in user.
    Whoami,

    /// Add a profile (requires login).
    Add(AddArgs),

    /// Change fields of a profile (requires login).
    Update(UpdateArgs),

    /// Remove a profile (requires login).
    Delete {
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        output: OutputArg,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Fuzzy search across name, skills, hobbies and interests.
    #[arg(long = "search", short = 's', value_name = "TERM", default_value = "")]
    pub search: String,

    /// Only keep profiles speaking this language.
    #[arg(long = "language", short = 'l', value_name = "LANG")]
    pub language: Option<Language>,

    /// Minimum level for --language.
    #[arg(long = "min-level", value_name = "N", default_value_t = 1)]
    pub min_level: i32,

    /// Only keep profiles with a skill containing this text.
    #[arg(long = "skill", value_name = "TEXT", default_value = "")]
    pub skill: String,

    /// Sort key: name, languages.<lang>, skills, hobbies, interests, id, image.
    #[arg(long = "sort", value_name = "KEY", default_value = "name")]
    pub sort: String,

    /// Sort descending.
    #[arg(long = "desc")]
    pub desc: bool,

    /// Output layout.
    #[arg(long = "view", value_enum, default_value = "table")]
    pub view: ViewArg,
}

/// Destination for a rewritten roster.
#[derive(Args, Default)]
pub struct OutputArg {
    /// Where to write the updated roster (default: the --data file).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Per-language level flags shared by add and update.
#[derive(Args, Default)]
pub struct LevelArgs {
    #[arg(long = "english", value_name = "N")]
    pub english: Option<i32>,
    #[arg(long = "arabic", value_name = "N")]
    pub arabic: Option<i32>,
    #[arg(long = "urdu", value_name = "N")]
    pub urdu: Option<i32>,
    #[arg(long = "malayalam", value_name = "N")]
    pub malayalam: Option<i32>,
    #[arg(long = "hindi", value_name = "N")]
    pub hindi: Option<i32>,
}

impl LevelArgs {
    pub fn is_empty(&self) -> bool {
        self.levels().all(|(_, level)| level.is_none())
    }

    /// Overlay the given levels on `base`.
    pub fn apply(&self, mut base: Languages) -> Languages {
        for (language, level) in self.levels() {
            if let Some(level) = level {
                base.set(language, level);
            }
        }
        base
    }

    fn levels(&self) -> impl Iterator<Item = (Language, Option<i32>)> {
        [
            (Language::English, self.english),
            (Language::Arabic, self.arabic),
            (Language::Urdu, self.urdu),
            (Language::Malayalam, self.malayalam),
            (Language::Hindi, self.hindi),
        ]
        .into_iter()
    }
}

#[derive(Args, Default)]
pub struct AddArgs {
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    #[arg(long = "image", value_name = "URL", default_value = "")]
    pub image: String,

    #[command(flatten)]
    pub levels: LevelArgs,

    /// Repeat for each skill.
    #[arg(long = "skill", value_name = "TEXT")]
    pub skills: Vec<String>,

    #[arg(long = "hobby", value_name = "TEXT")]
    pub hobbies: Vec<String>,

    #[arg(long = "interest", value_name = "TEXT")]
    pub interests: Vec<String>,

    #[command(flatten)]
    pub output: OutputArg,
}

#[derive(Args, Default)]
pub struct UpdateArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    #[arg(long = "image", value_name = "URL")]
    pub image: Option<String>,

    #[command(flatten)]
    pub levels: LevelArgs,

    /// Replaces the skill list when given. Repeat for each skill.
    #[arg(long = "skill", value_name = "TEXT")]
    pub skills: Option<Vec<String>>,

    #[arg(long = "hobby", value_name = "TEXT")]
    pub hobbies: Option<Vec<String>>,

    #[arg(long = "interest", value_name = "TEXT")]
    pub interests: Option<Vec<String>>,

    #[command(flatten)]
    pub output: OutputArg,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    #[default]
    Table,
    Cards,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
