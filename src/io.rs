//! Input/Output functions: reading an operand in its entirety, choosing the
//! name of the output file, and writing it.
use anyhow::{Context, Result};
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::{
    fs,
    fs::{File, OpenOptions},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::error::UsageError;

/// Return the contents of the file at `path`. A file starting with a UTF-16
/// Byte Order Mark is translated to UTF-8, and a UTF-8 Byte Order Mark is
/// removed. Anything else is returned byte for byte, valid UTF-8 or not.
pub fn read_text(path: &Path) -> Result<Vec<u8>> {
    let not_found = || UsageError::FileNotFound(path.to_owned());
    let file = File::open(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "can't open file");
        not_found()
    })?;
    let mut reader = DecodeReaderBytesBuilder::new()
        .bom_sniffing(true) // Look at the BOM to detect UTF-16 files and convert to UTF-8
        .strip_bom(true) // Remove the BOM before sending data to us
        .utf8_passthru(true) // Don't enforce UTF-8 (BOM or no BOM)
        .build(file);
    let mut text = Vec::new();
    reader.read_to_end(&mut text).map_err(|e| {
        debug!(path = %path.display(), error = %e, "can't read file");
        not_found()
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read operand");
    Ok(text)
}

const PREFIX: &str = "output";
const SUFFIX: &str = ".txt";

/// The path in `dir` for the next output file: `output<N>.txt`, where `N` is
/// one more than the largest number already used by an `output<N>.txt` file
/// in `dir`, or 1 if there are none.
pub fn next_output_path(dir: &Path) -> Result<PathBuf> {
    let mut largest = 0_u64;
    let entries =
        fs::read_dir(dir).with_context(|| format!("Can't read directory: {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("Can't read directory: {}", dir.display()))?;
        if let Some(n) = entry.file_name().to_str().and_then(output_number) {
            largest = largest.max(n);
        }
    }
    let Some(next) = largest.checked_add(1) else {
        anyhow::bail!("No output file numbers left in {}", dir.display())
    };
    Ok(dir.join(format!("{PREFIX}{next}{SUFFIX}")))
}

/// `Some(n)` if `name` is `output<n>.txt`, with `n` all digits
fn output_number(name: &str) -> Option<u64> {
    let digits = name.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Creates a new file at `path` and lets `fill` write its contents, failing
/// rather than overwriting if the file already exists. If `fill` or the final
/// flush fails, the partly written file is removed.
pub fn write_new<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Can't create file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let written = fill(&mut out).and_then(|()| Ok(out.flush()?));
    if let Err(e) = written {
        drop(out);
        if let Err(rm) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %rm, "can't remove partial output");
        }
        return Err(e.context(format!("Error writing file: {}", path.display())));
    }
    Ok(())
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    const UTF8_BOM: &str = "\u{FEFF}";

    fn to_utf_16le(source: &str) -> Vec<u8> {
        let mut result = b"\xff\xfe".to_vec();
        for b in source.as_bytes().iter() {
            result.push(*b);
            result.push(0);
        }
        result
    }

    fn to_utf_16be(source: &str) -> Vec<u8> {
        let mut result = b"\xfe\xff".to_vec();
        for b in source.as_bytes().iter() {
            result.push(0);
            result.push(*b);
        }
        result
    }

    fn read_back(contents: &[u8]) -> Vec<u8> {
        let temp = TempDir::new().unwrap();
        let file = temp.child("operand.txt");
        file.write_binary(contents).unwrap();
        read_text(file.path()).unwrap()
    }

    const TEXT: &str = "The cute red crab\n jumps over the lazy blue gopher\n";

    #[test]
    fn utf_16le_is_translated_to_utf8() {
        assert_eq!(read_back(&to_utf_16le(TEXT)), TEXT.as_bytes());
    }

    #[test]
    fn utf_16be_is_translated_to_utf8() {
        assert_eq!(read_back(&to_utf_16be(TEXT)), TEXT.as_bytes());
    }

    #[test]
    fn utf8_bom_is_removed() {
        assert_eq!(read_back((UTF8_BOM.to_string() + TEXT).as_bytes()), TEXT.as_bytes());
    }

    #[test]
    fn other_bytes_pass_through() {
        let latin1 = b"caf\xe9 na\xefve";
        assert_eq!(read_back(latin1), latin1);
    }

    #[test]
    fn missing_files_are_reported_as_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.child("nope.txt");
        let err = read_text(path.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UsageError>(),
            Some(&UsageError::FileNotFound(path.path().to_owned()))
        );
    }

    #[test]
    fn output_numbers_need_digits_between_prefix_and_suffix() {
        assert_eq!(output_number("output1.txt"), Some(1));
        assert_eq!(output_number("output042.txt"), Some(42));
        assert_eq!(output_number("output.txt"), None);
        assert_eq!(output_number("output-3.txt"), None);
        assert_eq!(output_number("outputs7.txt"), None);
        assert_eq!(output_number("output7.txt.bak"), None);
    }

    #[test]
    fn first_output_file_is_number_one() {
        let temp = TempDir::new().unwrap();
        assert_eq!(next_output_path(temp.path()).unwrap(), temp.path().join("output1.txt"));
    }

    #[test]
    fn next_output_file_follows_the_largest_number() {
        let temp = TempDir::new().unwrap();
        for name in ["output1.txt", "output7.txt", "output_notes.txt", "output99.md"] {
            temp.child(name).touch().unwrap();
        }
        assert_eq!(next_output_path(temp.path()).unwrap(), temp.path().join("output8.txt"));
    }

    #[test]
    fn write_new_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.child("output1.txt");
        write_new(path.path(), |out| Ok(out.write_all(b"first")?)).unwrap();
        assert!(write_new(path.path(), |out| Ok(out.write_all(b"second")?)).is_err());
        path.assert("first");
    }

    #[test]
    fn a_failed_write_leaves_no_file_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.child("output1.txt");
        let err = write_new(path.path(), |out| {
            out.write_all(b"partial result")?;
            anyhow::bail!("disk full")
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Error writing file: "), "{err}");
        assert_eq!(err.root_cause().to_string(), "disk full");
        path.assert(predicates::path::missing());
        assert_eq!(next_output_path(temp.path()).unwrap(), path.path());
    }
}
