use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{ExternalId, GraphError};

/// The classification of a single line of an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    /// A directed edge `u -> v`.
    Edge(ExternalId, ExternalId),
    /// An empty line or a line starting with `#`.
    Comment,
    /// Anything that is not exactly two integers.
    Malformed,
}

/// Classify a line of a whitespace separated edge list.
pub fn parse_line(line: &str) -> ParsedLine {
    let s = line.trim();
    if s.is_empty() || s.starts_with('#') {
        return ParsedLine::Comment;
    }
    let mut it = s.split_whitespace();
    let (Some(a), Some(b), None) = (it.next(), it.next(), it.next()) else {
        return ParsedLine::Malformed;
    };
    match (a.parse(), b.parse()) {
        (Ok(u), Ok(v)) => ParsedLine::Edge(u, v),
        _ => ParsedLine::Malformed,
    }
}

/// Parse a line into an edge, returning `None` for comments and malformed lines.
pub fn parse_edge(line: &str) -> Option<(ExternalId, ExternalId)> {
    match parse_line(line) {
        ParsedLine::Edge(u, v) => Some((u, v)),
        _ => None,
    }
}

/// A source of directed edges that can be scanned more than once.
///
/// Every call to [`edges`](EdgeSource::edges) starts a fresh scan and yields
/// the valid edges in source order; comments and malformed lines are skipped.
pub trait EdgeSource {
    type Edges<'a>: Iterator<Item = Result<(ExternalId, ExternalId), GraphError>>
    where
        Self: 'a;

    /// A human readable name used in logs and errors.
    fn name(&self) -> Cow<'_, str>;

    fn edges(&self) -> Result<Self::Edges<'_>, GraphError>;
}

/// Classify a raw line. Bytes that are not valid UTF-8 never form an edge.
pub fn parse_line_bytes(line: &[u8]) -> ParsedLine {
    match std::str::from_utf8(line) {
        Ok(text) => parse_line(text),
        Err(_) if line.trim_ascii_start().starts_with(b"#") => ParsedLine::Comment,
        Err(_) => ParsedLine::Malformed,
    }
}

/// Iterator over the edges of a line oriented reader.
///
/// Lines are read as raw bytes, so undecodable text is skipped like any other
/// malformed line. Only I/O failures are reported, after which the iterator
/// is exhausted.
pub struct EdgeLines<R> {
    reader: R,
    buffer: Vec<u8>,
    origin: String,
    line: usize,
    skipped: usize,
    failed: bool,
}

impl<R: BufRead> EdgeLines<R> {
    pub fn new(reader: R, origin: impl Into<String>) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            origin: origin.into(),
            line: 0,
            skipped: 0,
            failed: false,
        }
    }

    /// Number of malformed lines skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for EdgeLines<R> {
    type Item = Result<(ExternalId, ExternalId), GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(source) => {
                    self.failed = true;
                    return Some(Err(GraphError::Read {
                        origin: self.origin.clone(),
                        line: self.line + 1,
                        source,
                    }));
                }
            }
            match parse_line_bytes(&self.buffer) {
                ParsedLine::Edge(u, v) => return Some(Ok((u, v))),
                ParsedLine::Comment => {}
                ParsedLine::Malformed => {
                    self.skipped += 1;
                    log::debug!("{}:{}: skipping malformed line", self.origin, self.line);
                }
            }
        }
    }
}

/// An edge list stored in a text file, re-opened for every scan.
#[derive(Debug, Clone)]
pub struct EdgeListFile {
    path: PathBuf,
}

impl EdgeListFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EdgeSource for EdgeListFile {
    type Edges<'a>
        = EdgeLines<BufReader<File>>
    where
        Self: 'a;

    fn name(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }

    fn edges(&self) -> Result<Self::Edges<'_>, GraphError> {
        let file = File::open(&self.path).map_err(|source| GraphError::Open {
            path: self.path.clone(),
            source,
        })?;
        Ok(EdgeLines::new(
            BufReader::with_capacity(1 << 20, file),
            self.name(),
        ))
    }
}

impl EdgeSource for str {
    type Edges<'a>
        = EdgeLines<&'a [u8]>
    where
        Self: 'a;

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("<memory>")
    }

    fn edges(&self) -> Result<Self::Edges<'_>, GraphError> {
        Ok(EdgeLines::new(self.as_bytes(), self.name()))
    }
}

impl EdgeSource for String {
    type Edges<'a>
        = EdgeLines<&'a [u8]>
    where
        Self: 'a;

    fn name(&self) -> Cow<'_, str> {
        self.as_str().name()
    }

    fn edges(&self) -> Result<Self::Edges<'_>, GraphError> {
        self.as_str().edges()
    }
}
