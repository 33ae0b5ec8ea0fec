use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

/// Rewrites the playback tempo of an MP3 file in place by shelling out to
/// an ffmpeg `atempo` filter.
///
/// The tool writes to a `_tmp.mp3` sibling which then atomically replaces
/// the original. A failed or silent invocation leaves the original file
/// untouched; the caller keeps serving normal-tempo audio.
pub struct SpeedAdjuster {
    ffmpeg_bin: String,
}

impl SpeedAdjuster {
    pub fn new(ffmpeg_bin: impl Into<String>) -> Self {
        Self {
            ffmpeg_bin: ffmpeg_bin.into(),
        }
    }

    /// Apply `speed` to the file at `filepath`. Speed 1.0 is a no-op: no
    /// subprocess is spawned and the file is not touched.
    pub async fn adjust(&self, filepath: &Path, speed: f32) -> std::io::Result<()> {
        if (speed - 1.0).abs() < f32::EPSILON {
            return Ok(());
        }

        let temp_output = temp_sibling(filepath);

        let status = Command::new(&self.ffmpeg_bin)
            .arg("-i")
            .arg(filepath)
            .arg("-filter:a")
            .arg(format!("atempo={speed}"))
            .arg("-vn")
            .arg(&temp_output)
            .arg("-y")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(code) if code.success() && temp_output.exists() => {
                tokio::fs::rename(&temp_output, filepath).await?;
            }
            Ok(code) => {
                tracing::warn!(
                    file = %filepath.display(),
                    speed,
                    exit = ?code.code(),
                    "tempo adjustment produced no usable output, keeping original audio"
                );
                let _ = tokio::fs::remove_file(&temp_output).await;
            }
            Err(e) => {
                tracing::warn!(
                    file = %filepath.display(),
                    speed,
                    error = %e,
                    "failed to launch {}, keeping original audio",
                    self.ffmpeg_bin
                );
                let _ = tokio::fs::remove_file(&temp_output).await;
            }
        }

        Ok(())
    }
}

fn temp_sibling(filepath: &Path) -> std::path::PathBuf {
    let mut name = filepath
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str("_tmp.mp3");
    filepath.with_file_name(name)
}
