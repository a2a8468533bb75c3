//! Timed external file preview.
//!
//! The viewer is a narrow seam: [`Viewer::launch`] spawns the configured
//! program on one file and returns a handle, [`ViewerHandle::stop`]
//! terminates it. [`Viewer::preview_all`] paces previews over a completed
//! scan's files.

use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Default seconds a preview stays open.
pub const DEFAULT_DELAY_SECS: f64 = 10.0;

/// Launches an external text viewer on matched files.
#[derive(Debug, Clone)]
pub struct Viewer {
    program: String,
    delay: Duration,
}

/// A running viewer process.
#[derive(Debug)]
pub struct ViewerHandle {
    child: Child,
}

impl Viewer {
    /// Create a viewer using `program` with a fixed per-file delay.
    pub fn new(program: impl Into<String>, delay: Duration) -> Self {
        Self {
            program: program.into(),
            delay,
        }
    }

    /// The platform's plain text viewer.
    pub fn platform_default() -> &'static str {
        if cfg!(target_os = "windows") {
            "notepad.exe"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }

    /// Spawn the viewer on one file.
    pub fn launch(&self, path: &Path) -> Result<ViewerHandle> {
        debug!(program = %self.program, path = %path.display(), "Launching viewer");
        let child = Command::new(&self.program)
            .arg(path)
            .spawn()
            .map_err(|e| ScanError::viewer_launch(self.program.clone(), e))?;
        Ok(ViewerHandle { child })
    }

    /// Preview each file in turn: launch, wait the delay, stop.
    ///
    /// A launch failure aborts the remaining previews; a stop failure is
    /// logged and skipped.
    pub fn preview_all(&self, files: &[PathBuf]) -> Result<()> {
        for file in files {
            let handle = self.launch(file)?;
            thread::sleep(self.delay);
            if let Err(e) = handle.stop() {
                warn!(path = %file.display(), error = %e, "Failed to stop viewer");
            }
        }
        Ok(())
    }
}

impl ViewerHandle {
    /// Terminate the viewer. A viewer that already exited on its own is
    /// reaped without error.
    pub fn stop(mut self) -> std::io::Result<()> {
        if self.child.try_wait()?.is_some() {
            return Ok(());
        }
        self.child.kill()?;
        self.child.wait()?;
        Ok(())
    }
}
