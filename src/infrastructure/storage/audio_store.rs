use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local, LocalResult, TimeZone};

/// A freshly allocated slot for one synthesis result.
#[derive(Debug, Clone)]
pub struct AllocatedAudioPath {
    /// Where the backend writes the MP3 bytes.
    pub filepath: PathBuf,
    /// The externally servable URL, relative, forward-slash separated.
    pub url: String,
    pub filename: String,
}

/// Date-partitioned storage for generated audio files.
///
/// Filenames are `<YYYYMMDD>_<HHMMSS>_<microseconds>.mp3` under
/// `<root>/<YYYY>/<MM>/<DD>/`. A process-wide monotonic floor on the
/// microsecond timestamp keeps two allocations from ever sharing a name,
/// even when the clock ticks inside the same microsecond.
pub struct AudioStore {
    root: PathBuf,
    last_micros: Mutex<i64>,
}

impl AudioStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            last_micros: Mutex::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Allocate a unique file path and its public URL, creating the date
    /// directory chain if needed.
    pub async fn allocate(&self) -> std::io::Result<AllocatedAudioPath> {
        let when = self.next_timestamp();

        let year = when.format("%Y").to_string();
        let month = when.format("%m").to_string();
        let day = when.format("%d").to_string();

        let folder = self.root.join(&year).join(&month).join(&day);
        tokio::fs::create_dir_all(&folder).await?;

        let filename = format!(
            "{}_{:06}.mp3",
            when.format("%Y%m%d_%H%M%S"),
            when.timestamp_subsec_micros()
        );
        let filepath = folder.join(&filename);

        let root_name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        let url = format!("{root_name}/{year}/{month}/{day}/{filename}");

        Ok(AllocatedAudioPath {
            filepath,
            url,
            filename,
        })
    }

    /// Current local time, bumped past the last allocation when the clock
    /// has not advanced.
    fn next_timestamp(&self) -> DateTime<Local> {
        let now = Local::now();
        let mut micros = now.timestamp_micros();
        {
            let mut last = self.last_micros.lock().unwrap_or_else(|e| e.into_inner());
            if micros <= *last {
                micros = *last + 1;
            }
            *last = micros;
        }
        match Local.timestamp_micros(micros) {
            LocalResult::Single(dt) => dt,
            _ => now,
        }
    }
}
