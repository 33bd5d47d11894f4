use crate::context::Context;
use crate::definition::{ScaffoldDefinition, validate_root};
use crate::error::Error;
use crate::result::Result;
use std::fs::{self, OpenOptions};
use std::io::{Seek, Write};
use std::path::PathBuf;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Archive file name for a given root directory name
pub fn archive_file_name(root: &str) -> String {
    format!("{}.zip", root)
}

/// Member path of an entry inside the archive
pub fn member_name(root: &str, path: &str) -> String {
    format!("{}/{}", root, path)
}

/// Write `definition` into `<output_dir>/<root>.zip` and return the archive path.
///
/// An existing archive is truncated, never appended to. If anything fails after
/// the file was opened, the file is removed before the error is returned.
pub fn write(ctx: &Context, root: &str, definition: &ScaffoldDefinition) -> Result<PathBuf> {
    validate_root(root)?;

    let archive_path = ctx.output_dir.join(archive_file_name(root));
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&archive_path)?;

    write_guarded(ctx, root, definition, file, archive_path)
}

/// Write the archive into `writer`, removing `archive_path` unless every step succeeds.
fn write_guarded<W: Write + Seek>(
    ctx: &Context,
    root: &str,
    definition: &ScaffoldDefinition,
    writer: W,
    archive_path: PathBuf,
) -> Result<PathBuf> {
    let guard = PartialArchive::new(archive_path);

    let mut writer = write_members(ctx, root, definition, writer)?;
    writer.flush()?;

    Ok(guard.commit())
}

fn write_members<W: Write + Seek>(
    ctx: &Context,
    root: &str,
    definition: &ScaffoldDefinition,
    writer: W,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for entry in definition.entries() {
        let name = member_name(root, &entry.path);
        if ctx.verbose {
            cliclack::log::step(format!("Adding {}", name))?;
        }

        let written = zip
            .start_file(name, options)
            .map_err(Error::from)
            .and_then(|_| zip.write_all(entry.content.as_bytes()).map_err(Error::from));

        if let Err(err) = written {
            // Drop the half-written member so the writer does not finalize it
            let _ = zip.abort_file();
            return Err(err);
        }
    }

    Ok(zip.finish()?)
}

/// Removes the archive file on drop unless committed
struct PartialArchive {
    path: PathBuf,
    committed: bool,
}

impl PartialArchive {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    /// Keep the archive and hand back its path
    fn commit(mut self) -> PathBuf {
        self.committed = true;
        std::mem::take(&mut self.path)
    }
}

impl Drop for PartialArchive {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}
