use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::HeaderError;

/// Lee un archivo con una lista de campos por línea y devuelve las líneas útiles.
///
/// Blank lines and `#` comments are skipped, trailing `\r` is dropped.
/// A path of `-` reads standard input.
pub fn read_header_lines(path: &Path) -> Result<Vec<String>, HeaderError> {
    let read_err = |source| HeaderError::Read {
        path: path.to_path_buf(),
        source,
    };

    let lines = if path == Path::new("-") {
        collect_header_lines(io::stdin().lock()).map_err(read_err)?
    } else {
        let file = File::open(path).map_err(read_err)?;
        collect_header_lines(BufReader::new(file)).map_err(read_err)?
    };

    if lines.is_empty() {
        return Err(HeaderError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), headers = lines.len(), "header list loaded");
    Ok(lines)
}

fn collect_header_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut headers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        headers.push(line.to_string());
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn skips_blank_and_comment_lines() {
        let input = "# traffic\nReceive Time, Serial Number\r\n\n   \n# threat\nType, Future_Use\n";
        let lines = collect_header_lines(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["Receive Time, Serial Number", "Type, Future_Use"]);
    }

    #[test]
    fn reads_lines_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Format: Receive Time, Serial Number").unwrap();
        writeln!(file, "Source Address").unwrap();

        let lines = read_header_lines(file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Format: Receive Time, Serial Number");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_header_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, HeaderError::Read { .. }));
    }

    #[test]
    fn file_without_headers_is_empty_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();

        let err = read_header_lines(file.path()).unwrap_err();
        assert!(matches!(err, HeaderError::EmptyInput { .. }));
    }
}
