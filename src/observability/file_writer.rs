//! Rotating log file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] is the sink behind the fmt layer: it implements
//! [`MakeWriter`], handing out `&FileWriter` handles that append formatted
//! events to one file. The file rotates once it exceeds 10 MB, keeping the 3
//! newest backups.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 10MB, rotate:
///    - Rename current file to `<name>.<unix nanos>`, stepping past any
///      existing backup with the same stamp
///    - Open a new empty file
///    - Remove the oldest backups beyond 3
///
/// # Example
///
/// ```rust,ignore
/// let writer = FileWriter::new(PathBuf::from("/tmp/book-browser.log"));
/// writer.write_bytes(b"started\n")?;
/// ```
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer for `file_path`. Nothing is opened until the first
    /// write.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends `buf`, rotating first if the file has grown too large.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open or write errors, or if the lock is poisoned.
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(buf.len())
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn backup_prefix(&self) -> io::Result<String> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))
    }

    /// Renames the current file to `<name>.<timestamp>` and prunes backups.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0))
            .as_nanos();

        if self.file_path.exists() {
            let backup_path = self.free_backup_path(timestamp)?;
            fs::rename(&self.file_path, backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// First `<name>.<stamp>` at or after `stamp` that does not exist yet, so
    /// a rotation never replaces an earlier backup.
    fn free_backup_path(&self, mut stamp: u128) -> io::Result<PathBuf> {
        let prefix = self.backup_prefix()?;
        loop {
            let candidate = self.file_path.with_file_name(format!("{prefix}{stamp}"));
            if !candidate.exists() {
                return Ok(candidate);
            }
            stamp += 1;
        }
    }

    /// Removes all but the newest `MAX_BACKUP_FILES` backups. Individual
    /// deletion failures are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let prefix = self.backup_prefix()?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&prefix))
                    .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time).then_with(|| b.cmp(a))
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}
