use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::ProviderError;

/// A revocable reference to synthesized audio.
///
/// The bytes live in a named temp file so any system player can read them.
/// Dropping the handle deletes the file and releases the resource, so
/// overwriting a held handle releases the previous one.
#[derive(Debug)]
pub struct AudioHandle {
    file: NamedTempFile,
    len: usize,
}

impl AudioHandle {
    /// Wraps a binary audio payload in a playable handle.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProviderError> {
        let mut file = tempfile::Builder::new()
            .prefix("koe-")
            .suffix(".mp3")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        Ok(Self {
            file,
            len: bytes.len(),
        })
    }

    /// Path a playback control can read the audio from. Valid only while
    /// the handle is alive.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Size of the audio payload in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies the audio out of the handle into a user-chosen file.
    pub fn save_to(&self, dest: &Path) -> anyhow::Result<()> {
        let bytes = std::fs::read(self.path())?;
        crate::fs::atomic_write_bytes(dest, &bytes)
    }
}
