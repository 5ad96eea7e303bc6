//! Script serialization.

use std::io::Write;

use memfit_core::Request;

use crate::error::ScriptError;

/// Write a request sequence in the script text format.
///
/// Output round-trips exactly through
/// [`parse_script`](crate::parse_script).
///
/// # Examples
///
/// ```
/// use memfit_core::{Request, RequestId};
/// use memfit_script::{parse_script, write_script};
///
/// let requests = vec![
///     Request::Allocate { id: RequestId(1), size: 100 },
///     Request::Release { id: RequestId(1) },
/// ];
/// let mut buf = Vec::new();
/// write_script(&mut buf, &requests).unwrap();
/// assert_eq!(parse_script(buf.as_slice()).unwrap(), requests);
/// ```
pub fn write_script(mut sink: impl Write, requests: &[Request]) -> Result<(), ScriptError> {
    for request in requests {
        match request {
            Request::Allocate { id, size } => writeln!(sink, "alloc {id} {size}")?,
            Request::Release { id } => writeln!(sink, "free {id}")?,
        }
    }
    Ok(())
}
