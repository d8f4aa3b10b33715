//! Tracing subscriber setup: console formatter and initialisation.
use tracing::Level;

/// Target used for stage headers.
pub const STAGE_TARGET: &str = "joshua_bundle::stage";
/// Target used for dry-run listings; shown even when not verbose.
pub const DRY_RUN_TARGET: &str = "joshua_bundle::dry_run";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Render one console line (without the trailing newline).
fn render_line(level: Level, target: &str, msg: &str) -> String {
    match level {
        Level::ERROR => format!("\x1b[31mERROR\x1b[0m {msg}"),
        Level::WARN => format!("\x1b[33mWARN\x1b[0m  {msg}"),
        Level::INFO if target == STAGE_TARGET => format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m"),
        Level::INFO if target == DRY_RUN_TARGET => format!("  \x1b[33m[DRY RUN]\x1b[0m {msg}"),
        Level::INFO => format!("* {msg}"),
        _ => format!("  \x1b[2m{msg}\x1b[0m"),
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that prefixes messages the way
/// the bundler reports progress (`* message`).
struct BundleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for BundleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        writeln!(
            writer,
            "{}",
            render_line(*metadata.level(), metadata.target(), &extractor.message)
        )
    }
}

/// Filter directives for the console: warnings only, or everything down to
/// debug when `verbose`. Dry-run listings are always let through.
fn default_directives(verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        format!("warn,{DRY_RUN_TARGET}=info")
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, everything else to stdout. `RUST_LOG`
/// overrides the level chosen from `verbose`. Must be called once at program
/// startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let make_writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(BundleFormatter)
        .with_writer(make_writer)
        .with_filter(filter);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
