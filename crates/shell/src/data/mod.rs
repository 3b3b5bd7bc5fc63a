//! Reading the sequences to align.

use std::path::Path;

/// Reads the two sequences to align from a text file.
///
/// The first line holds the first sequence and the second line the second.
/// See [`parse`] for the details.
pub fn read<P: AsRef<Path>>(path: P) -> Result<[String; 2], String> {
    let contents = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.as_ref().display()))?;
    parse(&contents).map_err(|e| format!("{}: {e}", path.as_ref().display()))
}

/// Parses the contents of a dataset file.
///
/// Surrounding whitespace is trimmed from each line. A missing second line
/// is read as an empty sequence. Any further non-blank line is an error.
pub fn parse(contents: &str) -> Result<[String; 2], String> {
    let mut lines = contents.lines().map(str::trim);

    let x = lines.next().ok_or_else(|| "the dataset is empty".to_string())?;
    let y = lines.next().unwrap_or_default();

    if let Some(extra) = lines.find(|line| !line.is_empty()) {
        return Err(format!("expected two sequences, found an extra line: {extra:?}"));
    }

    Ok([x.to_string(), y.to_string()])
}
