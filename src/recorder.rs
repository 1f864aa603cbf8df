use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use anyhow::{Context, Result};
use raylib::prelude::*;

/// Pipes raw RGBA frames into an external ffmpeg process that encodes the
/// output video. Dropping the recorder closes the pipe and waits for the
/// encoder to finish.
pub struct Recorder {
    process: Child,
    stdin: Option<ChildStdin>,
}

impl Recorder {
    pub fn spawn(width: i32, height: i32, fps: u32, output: &Path) -> Result<Recorder> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{width}x{height}")])
            .args(["-framerate", &format!("{fps}")])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .context("failed to start ffmpeg (is it installed and on PATH?)")?;
        let stdin = process
            .stdin
            .take()
            .context("failed to open ffmpeg stdin")?;
        Ok(Recorder { process, stdin: Some(stdin) })
    }

    /// Writes one framebuffer image. Rows are sent bottom-up because raylib
    /// render textures are stored flipped relative to what ffmpeg expects.
    pub fn write(&mut self, image: &Image) -> Result<()> {
        let stdin = self.stdin.as_mut().context("ffmpeg stdin already closed")?;
        let width = image.width() as usize;
        let height = image.height() as usize;
        let row_bytes = width * 4; // RGBA

        let pixels = unsafe {
            std::slice::from_raw_parts(image.data() as *const u8, row_bytes * height)
        };
        for y in (0..height).rev() {
            let row = &pixels[y * row_bytes..(y + 1) * row_bytes];
            stdin
                .write_all(row)
                .context("failed to write frame to ffmpeg")?;
        }
        Ok(())
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        self.stdin = None; // close the pipe so ffmpeg can flush
        if let Err(e) = self.process.wait() {
            eprintln!("warning: failed to wait for ffmpeg: {e}");
        }
    }
}
