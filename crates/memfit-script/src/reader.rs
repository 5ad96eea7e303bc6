//! Streaming script reader.

use std::io::BufRead;

use memfit_core::{Request, RequestId};

use crate::error::ScriptError;

/// Reads requests from a line-oriented script.
///
/// Generic over `R: BufRead` so tests can use byte slices and
/// production code can use `BufReader<File>`.
///
/// # Examples
///
/// ```
/// use memfit_script::ScriptReader;
/// use memfit_core::{Request, RequestId};
///
/// let script = "# warm-up\nalloc 1 100\nfree 1\n";
/// let mut reader = ScriptReader::new(script.as_bytes());
/// assert_eq!(
///     reader.next_request().unwrap(),
///     Some(Request::Allocate { id: RequestId(1), size: 100 })
/// );
/// assert_eq!(
///     reader.next_request().unwrap(),
///     Some(Request::Release { id: RequestId(1) })
/// );
/// assert_eq!(reader.next_request().unwrap(), None);
/// ```
pub struct ScriptReader<R: BufRead> {
    reader: R,
    line: u64,
    requests_read: u64,
}

impl<R: BufRead> ScriptReader<R> {
    /// Wrap a buffered source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            requests_read: 0,
        }
    }

    /// Read the next request, skipping comments and blank lines.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_request(&mut self) -> Result<Option<Request>, ScriptError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let text = buf.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let request = parse_line(text, self.line)?;
            self.requests_read += 1;
            return Ok(Some(request));
        }
    }

    /// Number of requests successfully read so far.
    pub fn requests_read(&self) -> u64 {
        self.requests_read
    }

    /// Convert into a request iterator.
    pub fn requests(self) -> Requests<R> {
        Requests {
            reader: self,
            done: false,
        }
    }
}

/// Iterator adapter over script requests.
///
/// Yields `Err` at most once; iteration stops after any error.
pub struct Requests<R: BufRead> {
    reader: ScriptReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Requests<R> {
    type Item = Result<Request, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_request() {
            Ok(Some(request)) => Some(Ok(request)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Parse an entire script into a request vector.
pub fn parse_script(reader: impl BufRead) -> Result<Vec<Request>, ScriptError> {
    ScriptReader::new(reader).requests().collect()
}

fn parse_line(text: &str, line: u64) -> Result<Request, ScriptError> {
    let mut fields = text.split_whitespace();
    // Non-empty by construction, so the directive is always present.
    let directive = fields.next().unwrap_or("");
    let request = match directive {
        "alloc" => {
            let id: u32 = parse_field(fields.next(), "id", line)?;
            let size: usize = parse_field(fields.next(), "size", line)?;
            Request::Allocate {
                id: RequestId(id),
                size,
            }
        }
        "free" => {
            let id: u32 = parse_field(fields.next(), "id", line)?;
            Request::Release { id: RequestId(id) }
        }
        other => {
            return Err(ScriptError::Parse {
                line,
                detail: format!("unknown directive '{other}' (expected alloc or free)"),
            })
        }
    };
    if let Some(extra) = fields.next() {
        return Err(ScriptError::Parse {
            line,
            detail: format!("unexpected trailing field '{extra}'"),
        });
    }
    Ok(request)
}

/// Parse one non-negative numeric field.
///
/// Negative numbers fail the unsigned parse, which is exactly the
/// contract: negative ids and sizes never reach the core.
fn parse_field<T: std::str::FromStr>(
    field: Option<&str>,
    name: &str,
    line: u64,
) -> Result<T, ScriptError> {
    let raw = field.ok_or_else(|| ScriptError::Parse {
        line,
        detail: format!("missing {name} field"),
    })?;
    raw.parse::<T>().map_err(|_| ScriptError::Parse {
        line,
        detail: format!("invalid {name} '{raw}' (expected a non-negative integer)"),
    })
}
