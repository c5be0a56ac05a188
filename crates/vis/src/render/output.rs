//! Output surfaces for the rendered page.

use std::fs::File;
use std::io;
use std::io::Stdout;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::render::OutputStream;
use crate::render::error::RenderError;

const FILE_NAME: &str = "index.html";

/// Writes the page to `index.html` inside a directory.
///
/// The file is created on the first write, so a render that fails before
/// writing leaves no file behind.
pub struct OutputFile {
    path: PathBuf,
    file: Option<File>,
}

impl OutputFile {
    /// Targets `index.html` inside the directory at `path`.
    pub fn new(path: &Path) -> OutputFile {
        Self {
            path: path.join(FILE_NAME),
            file: None,
        }
    }

    /// The path of the written file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        let file = match self.file {
            Some(ref mut file) => file,
            None => self.file.insert(File::create(&self.path)?),
        };

        file.write_all(data.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Writes the page to the standard output.
pub struct StdoutStream {
    stdout: Stdout,
}

impl StdoutStream {
    /// Targets the standard output of the process.
    pub fn new() -> StdoutStream {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdoutStream {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStream for StdoutStream {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        let mut stdout = self.stdout.lock();
        stdout.write_all(data.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
