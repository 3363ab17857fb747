/// Argument echoing
///
/// Writes each process argument on its own line as `argv[<index>]: <value>`,
/// starting from index 0 (the invocation name).
use std::ffi::OsStr;
use std::io::{self, Write};

/// Write one line per argument, in order, and return how many were written.
///
/// Arguments that are not valid UTF-8 are rendered lossily.
pub fn print_arguments<W, I, S>(out: &mut W, args: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut written = 0;
    for (index, arg) in args.into_iter().enumerate() {
        writeln!(out, "argv[{}]: {}", index, arg.as_ref().to_string_lossy())?;
        written += 1;
    }
    Ok(written)
}
