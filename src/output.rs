use anyhow::Result;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Render each boundary as 16 lowercase hex digits, one per line. Returns the line count.
pub fn write_splits<W, I>(out: &mut W, splits: I) -> std::io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = u64>,
{
    let mut lines = 0;
    for split in splits {
        writeln!(out, "{:016x}", split)?;
        lines += 1;
    }
    Ok(lines)
}

/// Write the boundaries to `dest`, or to stdout if it is `-`.
///
/// A file destination is only replaced once every line made it to disk, by way of a temporary
/// file next to it.
pub fn emit<I>(dest: &str, splits: I) -> Result<u64>
where
    I: IntoIterator<Item = u64>,
{
    if dest == "-" {
        debug!("writing splits to stdout");
        let stdout = stdout();
        let mut out = BufWriter::with_capacity(0x10000, stdout.lock());
        let lines = write_splits(&mut out, splits)?;
        out.flush()?;
        return Ok(lines);
    }

    let path = Path::new(dest);
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    debug!(path = %path.display(), "writing splits");

    let mut tmp = NamedTempFile::new_in(dir)?;
    let lines = {
        let mut out = BufWriter::with_capacity(0x10000, tmp.as_file_mut());
        let lines = write_splits(&mut out, splits)?;
        out.flush()?;
        lines
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path)?;
    Ok(lines)
}
