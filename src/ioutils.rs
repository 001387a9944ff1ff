use bstr::BString;
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::error::{Error, Result};

/// Reads a file into lines split on `\n`, keeping every other byte as is.
///
/// No encoding is assumed. The newline and a `\r` right before it are
/// dropped. A last line without a newline still counts; an empty file has no
/// lines.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<BString>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open { path: path.to_path_buf(), source })?;
    read_lines_from(BufReader::new(file), path)
}

fn read_lines_from<R: Read>(mut reader: BufReader<R>, path: &Path) -> Result<Vec<BString>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        lines.push(BString::from(std::mem::take(&mut buf)));
    }
    Ok(lines)
}

/// Replaces the file's content with `lines`, each followed by `\n`.
///
/// The file is truncated before writing, so a failure part way through leaves
/// it partially written.
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[BString]) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).map_err(|source| Error::Create { path: path.to_path_buf(), source })?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line)
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|source| Error::Write { path: path.to_path_buf(), source })?;
    }
    writer.flush().map_err(|source| Error::Flush { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_str(content: &[u8]) -> Result<Vec<BString>> {
        read_lines_from(BufReader::new(content), Path::new("mem.ts"))
    }

    #[test]
    fn splits_on_newlines_without_keeping_them() {
        let lines = read_str(b"// header\n\nconst x = 1;\n").unwrap();
        assert_eq!(lines, vec!["// header", "", "const x = 1;"]);
    }

    #[test]
    fn keeps_last_line_without_newline() {
        let lines = read_str(b"a\nb").unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(read_str(b"").unwrap().is_empty());
    }

    #[test]
    fn drops_carriage_returns_before_newline() {
        let lines = read_str(b"a\r\nb\r\n  c  \r").unwrap();
        assert_eq!(lines, vec!["a", "b", "  c  "]);
    }

    #[test]
    fn passes_non_utf8_bytes_through() {
        let lines = read_str(b"// caf\xe9\n\xff\xfe\r\n").unwrap();
        assert_eq!(lines, vec![BString::from(&b"// caf\xe9"[..]), BString::from(&b"\xff\xfe"[..])]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = TempDir::new().unwrap();
        let err = read_lines(dir.path().join("missing.ts")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }

    #[test]
    fn write_lines_terminates_every_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.ts");
        fs::write(&path, "old content that is longer than the new one\n").unwrap();

        let lines = vec![BString::from("first"), BString::from(""), BString::from(&b"l\xe4st"[..])];
        write_lines(&path, &lines).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"first\n\nl\xe4st\n");
        assert_eq!(read_lines(&path).unwrap(), lines);
    }

    #[test]
    fn write_into_directory_is_a_create_error() {
        let dir = TempDir::new().unwrap();
        let err = write_lines(dir.path(), &[BString::from("x")]).unwrap_err();
        assert!(matches!(err, Error::Create { .. }));
    }
}
