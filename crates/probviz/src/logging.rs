//! Tracing setup.
//!
//! Native builds log to `{data_dir}/probviz.log` since the terminal is owned by
//! the TUI. Web builds log to the browser console.

#[cfg(feature = "native")]
pub use native::init_logging;

#[cfg(feature = "web")]
pub use web::init_logging_web;

#[cfg(feature = "native")]
mod native {
    use std::fs::{self, File, OpenOptions};
    use std::io::{self, Read, Seek, SeekFrom, Write};
    use std::path::Path;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    /// Name of the log file inside the data directory
    pub const LOG_FILE_NAME: &str = "probviz.log";
    /// Maximum log file size before rotation (5 MB)
    const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
    /// Size to keep after rotation (1 MB of most recent logs)
    const KEEP_SIZE: u64 = 1024 * 1024;

    /// Rotate log file if it exceeds `max_size`, keeping the last `keep_size` bytes.
    pub(super) fn rotate_log_if_needed(
        log_path: &Path,
        max_size: u64,
        keep_size: u64,
    ) -> io::Result<bool> {
        if !log_path.exists() {
            return Ok(false);
        }

        let file_size = fs::metadata(log_path)?.len();
        if file_size <= max_size {
            return Ok(false);
        }

        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(file_size.saturating_sub(keep_size)))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        drop(file);

        // Skip to the first newline to avoid partial lines
        let skip = buffer
            .iter()
            .position(|&b| b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut file = File::create(log_path)?;
        file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
        file.write_all(&buffer[skip..])?;

        Ok(true)
    }

    /// A writer factory that produces writers for the shared log file
    #[derive(Clone)]
    struct LogWriterFactory {
        file: Arc<Mutex<File>>,
    }

    /// A writer that holds a reference to the shared file
    struct LogWriter {
        file: Arc<Mutex<File>>,
    }

    impl LogWriter {
        fn lock(&self) -> io::Result<MutexGuard<'_, File>> {
            self.file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))
        }
    }

    impl Write for LogWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.lock()?.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.lock()?.flush()
        }
    }

    impl<'a> MakeWriter<'a> for LogWriterFactory {
        type Writer = LogWriter;

        fn make_writer(&'a self) -> Self::Writer {
            LogWriter {
                file: self.file.clone(),
            }
        }
    }

    /// Initialize logging to write to a file in the data directory.
    ///
    /// When the log exceeds 5MB, older entries are removed keeping only the
    /// last 1MB. `RUST_LOG` overrides `level` when set.
    pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
        fs::create_dir_all(data_dir)?;

        let log_path = data_dir.join(LOG_FILE_NAME);

        if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
            eprintln!("Warning: Failed to rotate log file: {}", e);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let writer_factory = LogWriterFactory {
            file: Arc::new(Mutex::new(file)),
        };

        let default_filter = format!("probviz={level},probviz_core=warn");
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(writer_factory)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()?;

        tracing::info!(
            "probviz logging initialized (log_path={})",
            log_path.display()
        );
        Ok(())
    }
}

#[cfg(feature = "web")]
mod web {
    /// Route tracing output to the browser console
    pub fn init_logging_web() {
        tracing_wasm::set_as_global_default();
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::native::rotate_log_if_needed;
    use std::fs;

    #[test]
    fn test_rotation_skipped_for_small_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probviz.log");
        fs::write(&path, "line one\nline two\n").unwrap();

        assert!(!rotate_log_if_needed(&path, 1024, 8).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_rotation_keeps_whole_recent_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probviz.log");
        let content: String = (0..100).map(|i| format!("entry {i:03}\n")).collect();
        fs::write(&path, &content).unwrap();

        assert!(rotate_log_if_needed(&path, 500, 40).unwrap());

        let rotated = fs::read_to_string(&path).unwrap();
        let mut lines = rotated.lines();
        assert_eq!(lines.next(), Some("--- Log rotated (older entries removed) ---"));
        let kept: Vec<_> = lines.collect();
        assert!(kept.iter().all(|l| l.starts_with("entry ")));
        assert_eq!(kept.last(), Some(&"entry 099"));
        assert!(kept.len() < 10);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.log");
        assert!(!rotate_log_if_needed(&path, 10, 5).unwrap());
    }
}
