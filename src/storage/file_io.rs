//! File I/O utilities for contact record files
//!
//! Record files hold one `name number` pair per line. Reading splits on ASCII
//! whitespace, so a record is simply the next two tokens in the file.
//! Rewrites go through a uniquely named temp file in the same directory that
//! is renamed over the original in one step.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::PhonebookError;
use crate::models::Contact;

/// Lazy iterator over the records of a contact file
///
/// Yields pairs of whitespace-delimited tokens until the input runs out. A
/// trailing token without a partner is ignored.
pub struct Records<R> {
    reader: Option<R>,
    tokens: VecDeque<String>,
    line: String,
}

impl<R: BufRead> Records<R> {
    /// Iterate over the records read from `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            tokens: VecDeque::new(),
            line: String::new(),
        }
    }

    /// An iterator that yields nothing
    pub fn empty() -> Self {
        Self {
            reader: None,
            tokens: VecDeque::new(),
            line: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Contact, PhonebookError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.tokens.len() >= 2 {
                let name = self.tokens.pop_front()?;
                let number = self.tokens.pop_front()?;
                return Some(Ok(Contact::new(name, number)));
            }

            let reader = self.reader.as_mut()?;
            self.line.clear();

            match reader.read_line(&mut self.line) {
                Ok(0) => {
                    self.reader = None;
                    self.tokens.clear();
                    return None;
                }
                Ok(_) => {
                    let tokens = self.line.split_ascii_whitespace().map(str::to_string);
                    self.tokens.extend(tokens);
                }
                Err(e) => {
                    self.reader = None;
                    return Some(Err(PhonebookError::Storage(format!(
                        "Failed to read record: {}",
                        e
                    ))));
                }
            }
        }
    }
}

/// Open a record file for reading
///
/// A missing file reads as an empty store. Any other failure to open is an error.
pub fn open_records<P: AsRef<Path>>(path: P) -> Result<Records<BufReader<File>>, PhonebookError> {
    let path = path.as_ref();

    match File::open(path) {
        Ok(file) => Ok(Records::new(BufReader::new(file))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Records::empty()),
        Err(e) => Err(PhonebookError::Storage(format!(
            "Failed to open {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write one record, with its line terminator
pub fn write_record<W: Write>(writer: &mut W, contact: &Contact) -> io::Result<()> {
    writeln!(writer, "{}", contact.to_record_line())
}

/// Whether a file has content whose last byte is not a line terminator
fn missing_final_newline(path: &Path) -> io::Result<bool> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Append records to the end of a file, creating it if needed
///
/// A file whose last record lacks its terminator gets one first, so the new
/// records never run into it.
pub fn append_records<P: AsRef<Path>>(path: P, contacts: &[Contact]) -> Result<(), PhonebookError> {
    let path = path.as_ref();

    let terminate_last = missing_final_newline(path).map_err(|e| {
        PhonebookError::Storage(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PhonebookError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;

    let mut writer = BufWriter::new(file);
    if terminate_last {
        writeln!(writer).map_err(|e| {
            PhonebookError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
    }
    for contact in contacts {
        write_record(&mut writer, contact).map_err(|e| {
            PhonebookError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
    }

    writer
        .flush()
        .map_err(|e| PhonebookError::Storage(format!("Failed to flush {}: {}", path.display(), e)))
}

/// Create a uniquely named temp file next to `path`
///
/// Keeping the temp file in the same directory is what makes the final rename atomic.
pub fn sibling_temp_file<P: AsRef<Path>>(path: P) -> Result<NamedTempFile, PhonebookError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|e| {
        PhonebookError::Storage(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    tempfile::Builder::new()
        .prefix(".phonebook-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| PhonebookError::Storage(format!("Failed to create temp file: {}", e)))
}

/// Sync a temp file and rename it over `path`
pub fn persist_over<P: AsRef<Path>>(temp: NamedTempFile, path: P) -> Result<(), PhonebookError> {
    let path = path.as_ref();

    temp.as_file()
        .sync_all()
        .map_err(|e| PhonebookError::Storage(format!("Failed to sync data: {}", e)))?;

    // On failure the temp file is handed back inside the error and removed when dropped
    temp.persist(path).map_err(|e| {
        PhonebookError::Storage(format!(
            "Failed to replace {}: {}",
            path.display(),
            e.error
        ))
    })?;

    Ok(())
}
