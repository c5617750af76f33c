use crate::Logger;
use crate::error::LoggerError;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// File output settings. Present only once a path is set.
#[derive(Debug)]
struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileOutput {
    fn new(directory: PathBuf) -> Self {
        Self { directory, rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES, json: false }
    }
}

#[derive(Debug, Default)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug, Default)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
use private::Sealed;
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for configuring and initializing the global tracing subscriber.
///
/// The type states guarantee at compile time that a name is set before
/// `init()` and that file-only knobs (rotation, retention, JSON) are only
/// reachable after `path()`.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    name: N,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
    _file_state: PhantomData<F>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            name: NoName,
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
            _file_state: PhantomData,
        }
    }
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the application name used in log file names.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder {
            name: WithName(name.into()),
            console: self.console,
            level: self.level,
            env_filter: self.env_filter,
            file: self.file,
            _file_state: PhantomData,
        }
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `tsp=debug,hyper=info`).
    ///
    /// `RUST_LOG` still overrides; this is a programmatic default. An invalid
    /// filter causes [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the console layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Enables file logging into `path`.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        LoggerBuilder {
            name: self.name,
            console: self.console,
            level: self.level,
            env_filter: self.env_filter,
            file: Some(FileOutput::new(path.into())),
            _file_state: PhantomData,
        }
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// The returned [`Logger`] holds the non-blocking file worker guard and
    /// must be kept alive for the duration of the program so buffered log
    /// lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already
    /// been set, and [`LoggerError::InvalidConfiguration`] for invalid
    /// builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;

        let env_filter = build_env_filter(self.level, self.env_filter.as_deref())?;
        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.file {
            Some(file) => Some(init_file_layer(&self.name.0, file, &mut layers)?),
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger::new(guard))
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.0.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        if let Some(file) = &self.file
            && file.max_files == 0
        {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }

        Ok(())
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Configures how many rotated log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = &mut self.file {
            file.max_files = max;
        }
        self
    }

    /// Configures the log file rotation strategy.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = &mut self.file {
            file.rotation = rotation;
        }
        self
    }

    /// Switches the file layer to JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn json(mut self) -> Self {
        if let Some(file) = &mut self.file {
            file.json = true;
        }
        self
    }
}

fn init_file_layer<S>(
    name: &str,
    file: FileOutput,
    layers: &mut Vec<Box<dyn Layer<S> + Send + Sync>>,
) -> Result<tracing_appender::non_blocking::WorkerGuard, LoggerError>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fs::create_dir_all(&file.directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create path: {}", file.directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(file.directory)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let file_layer = layer().with_writer(non_blocking).with_ansi(false);

    layers.push(if file.json { file_layer.json().boxed() } else { file_layer.boxed() });
    Ok(guard)
}

fn build_env_filter(
    level: LevelFilter,
    explicit: Option<&str>,
) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    explicit.map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
