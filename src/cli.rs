//! Command-line interface for `joshua-bundle`.
//!
//! A single flat command: the source configuration, the bundle directory and
//! flags that tune how artifacts are placed and how the config is rewritten.
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Default options handed to `copy-config.pl`.
pub const DEFAULT_COPY_CONFIG_OPTIONS: &str = "-top-n 0 -output-format %S -mark-oovs false";

/// Version reported by `--version`.
pub const VERSION: &str = match option_env!("JOSHUA_BUNDLE_VERSION") {
    Some(v) => v,
    None => concat!("dev-", env!("CARGO_PKG_VERSION")),
};

const EXAMPLE: &str = "\
Example invocation:

joshua-bundle \\
  --force \\
  --verbose \\
  --copy-config-options \\
    '-top-n 1 -output-format %S -mark-oovs false' \\
  /path/to/origin/directory/test/model/joshua.config \\
  /path/to/destination/directory

Note: The options included in the value string for the --copy-config-options
argument can either be Joshua options or options for the
$JOSHUA/scripts/copy-config.pl script.";

/// Create a Joshua configuration bundle from an existing configuration and
/// the model files it references.
#[derive(Parser, Debug)]
#[command(
    name = "joshua-bundle",
    about = "Create a Joshua configuration bundle from an existing configuration and set of files",
    version = VERSION,
    after_help = EXAMPLE
)]
pub struct Cli {
    /// Path to the origin configuration file, e.g. /path/to/tune/dir/joshua.config.final
    #[arg(value_parser = existing_file)]
    pub config: PathBuf,

    /// Destination directory, which should not already exist (removed first with -f)
    pub dest_dir: PathBuf,

    /// Overwrite an existing destination directory
    #[arg(short, long)]
    pub force: bool,

    /// Additional or replacement configuration options for Joshua, quoted as one argument
    #[arg(short = 'o', long, default_value = DEFAULT_COPY_CONFIG_OPTIONS, allow_hyphen_values = true)]
    pub copy_config_options: String,

    /// Default amount of memory for Joshua
    #[arg(short, long, default_value = "4g")]
    pub mem: String,

    /// Print informational messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Delete comments and multiple consecutive empty lines
    #[arg(long = "no-comments")]
    pub suppress_comments: bool,

    /// Symlink to TM and LM files instead of copying them
    #[arg(long)]
    pub symlink: bool,

    /// Use absolute instead of relative paths for model file locations
    #[arg(long)]
    pub absolute: bool,

    /// List the planned operations without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Source language two-character code (ISO 639-1)
    #[arg(long)]
    pub source: Option<String>,

    /// Source sentence normalizer that was applied to the model
    /// [default: $JOSHUA/scripts/preparation/normalize.pl]
    #[arg(long)]
    pub normalizer: Option<PathBuf>,

    /// Source sentence tokenizer that was applied to the model
    /// [default: $JOSHUA/scripts/preparation/tokenize.pl]
    #[arg(long)]
    pub tokenizer: Option<PathBuf>,

    /// Temporary directory for the config filter
    #[arg(short = 'T', long, default_value = "/tmp")]
    pub tmpdir: PathBuf,
}

impl Cli {
    /// Text shown for a rejected command line: clap's error followed by the
    /// full help, which ends with the example invocation.
    #[must_use]
    pub fn usage_error(err: &clap::Error) -> String {
        format!(
            "{}\n\n{}",
            err.render().to_string().trim_end(),
            Self::command().render_long_help().to_string().trim_end()
        )
    }
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    match std::fs::File::open(&path) {
        Ok(_) if path.is_file() => Ok(path),
        Ok(_) => Err(format!("'{value}' is not a file")),
        Err(e) => Err(format!("can't open '{value}': {e}")),
    }
}
