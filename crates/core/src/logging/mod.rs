use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Dispatch;
use tracing::dispatcher;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{Layer, Registry, fmt, layer::SubscriberExt};

/// Level of the log file. Never stricter than the console, so with both
/// sinks up every console record is in the file too.
pub const FILE_LEVEL: LevelFilter = LevelFilter::INFO;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsOptions {
  /// Lower the console threshold from WARN to INFO.
  pub verbose: bool,
  /// Structured log file, truncated on every invocation.
  pub log_path: PathBuf,
}

/// State of the structured file destination.
#[derive(Debug)]
pub enum FileSink {
  Active { path: PathBuf },
  Unavailable { path: PathBuf, error: io::Error },
}

impl FileSink {
  #[must_use]
  pub fn is_active(&self) -> bool {
    matches!(self, FileSink::Active { .. })
  }

  #[must_use]
  pub fn path(&self) -> &Path {
    match self {
      FileSink::Active { path } | FileSink::Unavailable { path, .. } => path,
    }
  }
}

/// Console + JSON file fan-out for one invocation.
///
/// Holds a [`Dispatch`] instead of installing itself, so callers decide
/// whether records go through a scoped or the global default.
pub struct Diagnostics {
  dispatch: Dispatch,
  file: FileSink,
}

#[must_use]
pub fn console_level(verbose: bool) -> LevelFilter {
  if verbose {
    LevelFilter::INFO
  } else {
    LevelFilter::WARN
  }
}

impl Diagnostics {
  /// Build both destinations. A log file that cannot be created leaves the
  /// console as the only destination; see [`Diagnostics::report_file_sink`].
  pub fn new<W>(options: &DiagnosticsOptions, console: W, ansi: bool) -> Self
  where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
  {
    let console_layer = fmt::layer()
      .without_time()
      .with_target(false)
      .with_ansi(ansi)
      .with_writer(console)
      .with_filter(console_level(options.verbose));

    // File::create truncates, so every invocation starts from an empty file.
    let (json_layer, file) = match File::create(&options.log_path) {
      Ok(handle) => {
        let layer = fmt::layer()
          .json()
          .with_timer(ChronoUtc::rfc_3339())
          .with_current_span(false)
          .with_span_list(false)
          .with_level(true)
          .with_target(false)
          .with_thread_ids(false)
          .with_thread_names(false)
          .with_writer(Mutex::new(handle))
          .with_filter(FILE_LEVEL);
        (
          Some(layer),
          FileSink::Active {
            path: options.log_path.clone(),
          },
        )
      }
      Err(error) => (
        None,
        FileSink::Unavailable {
          path: options.log_path.clone(),
          error,
        },
      ),
    };

    let subscriber = Registry::default().with(console_layer).with(json_layer);
    Self {
      dispatch: Dispatch::new(subscriber),
      file,
    }
  }

  #[must_use]
  pub fn file_sink(&self) -> &FileSink {
    &self.file
  }

  /// Run `f` with these diagnostics as the thread's default subscriber.
  pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
    dispatcher::with_default(&self.dispatch, f)
  }

  /// Make these diagnostics the process-wide default. If another default is
  /// already installed, that is reported through these sinks.
  pub fn install_global(&self) {
    if let Err(err) = dispatcher::set_global_default(self.dispatch.clone()) {
      self.in_scope(|| {
        warn!(
          error = %err,
          "diagnostics already installed; later records go to the existing subscriber"
        );
      });
    }
  }

  /// Emit the degraded-mode warning when the log file could not be created.
  pub fn report_file_sink(&self) {
    if let FileSink::Unavailable { path, error } = &self.file {
      warn!(error = %error, "failed to create log at {}", path.display());
    }
  }
}
