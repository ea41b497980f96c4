// src/tail.rs

use crate::error::{Result, TailError};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Reads `path` as UTF-8 and returns its last `n` lines, oldest first.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Terminators are kept exactly as
/// stored and a final line without one is returned as is, so concatenating the
/// result reproduces the tail of the file byte for byte. Only `n` lines are
/// held at any time.
pub fn read_tail(path: &Path, n: usize) -> Result<Vec<String>> {
    let read_err = |source: io::Error| TailError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut reader = BufReader::new(file);
    let mut tail = VecDeque::with_capacity(n + 1);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(read_err)? == 0 {
            break;
        }
        // 非 UTF-8 内容在这里以 InvalidData 返回
        let segment = std::str::from_utf8(&buf)
            .map_err(|e| read_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let mut start = 0;
        for (idx, _) in segment.match_indices('\r') {
            if segment[idx + 1..].starts_with('\n') {
                continue;
            }
            push_line(&mut tail, n, &segment[start..=idx]);
            start = idx + 1;
        }
        if start < segment.len() {
            push_line(&mut tail, n, &segment[start..]);
        }
    }

    Ok(tail.into())
}

fn push_line(tail: &mut VecDeque<String>, n: usize, line: &str) {
    tail.push_back(line.to_string());
    if tail.len() > n {
        tail.pop_front();
    }
}

/// Truncates `path` (creating it if needed) and writes `contents`.
///
/// The file is opened in place, so symlinks are followed and the existing
/// inode keeps its owner, mode and links.
pub fn replace_contents(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: io::Error| TailError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}
