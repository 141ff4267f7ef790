use console::style;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const FRAMES: [&str; 7] = ["▖", "▞", "▟", "█", "▙", "▚", "▗"];
const FRAME_INTERVAL: Duration = Duration::from_millis(200);

/// Animated status line, redrawn in place on a background thread until
/// stopped.
///
/// The render thread and its controller share nothing but a single boolean;
/// each loop iteration restores the cursor and clears to the end of the
/// screen before drawing, so one extra frame after [`ProgressIndicator::stop`]
/// cannot garble output.
pub struct ProgressIndicator {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressIndicator {
    pub fn new() -> Self {
        ProgressIndicator {
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Begin rendering `status` next to the spinner. No-op when already
    /// running.
    pub fn start(&mut self, status: impl Into<String>) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }
        let status = status.into();
        let running = Arc::clone(&self.running);
        self.handle = Some(
            thread::Builder::new()
                .name("progress-render".to_string())
                .spawn(move || render_loop(&running, &status))
                .expect("failed to spawn progress render thread"),
        );
    }

    /// Stop the animation and leave the cursor on a clean line. No-op when
    /// not running.
    ///
    /// Wakes the render thread out of its frame sleep and joins it, so no
    /// frame is drawn after this returns.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.running.store(false, Ordering::SeqCst);
        }
        let Some(handle) = self.handle.take() else {
            return;
        };
        handle.thread().unpark();
        let _ = handle.join();
        let mut err = io::stderr();
        let _ = write!(err, "\x1b[u\x1b[0J");
        let _ = err.flush();
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn render_loop(running: &AtomicBool, status: &str) {
    let mut frame = 0usize;
    let mut err = io::stderr();
    let _ = write!(err, "\x1b[s");
    while running.load(Ordering::SeqCst) {
        let _ = write!(
            err,
            "\x1b[u\x1b[0J{} {}",
            style(FRAMES[frame]).for_stderr().yellow(),
            status
        );
        let _ = err.flush();
        frame = (frame + 1) % FRAMES.len();
        // Interruptible sleep; stop() unparks us early.
        thread::park_timeout(FRAME_INTERVAL);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn start_then_stop_clears_running() {
        let mut indicator = ProgressIndicator::new();
        indicator.start("working...");
        assert!(indicator.is_running());
        indicator.stop();
        assert!(!indicator.is_running());
    }

    #[test]
    fn stop_without_start_is_noop() {
        let mut indicator = ProgressIndicator::new();
        indicator.stop();
        assert!(!indicator.is_running());
    }

    #[test]
    fn double_start_keeps_single_session() {
        let mut indicator = ProgressIndicator::new();
        indicator.start("one");
        indicator.start("two");
        assert!(indicator.is_running());
        // A single stop ends the single live session.
        indicator.stop();
        assert!(!indicator.is_running());
    }

    #[test]
    fn restartable_after_stop() {
        let mut indicator = ProgressIndicator::new();
        indicator.start("first");
        indicator.stop();
        indicator.start("second");
        assert!(indicator.is_running());
        indicator.stop();
        assert!(!indicator.is_running());
    }

    #[test]
    fn drop_joins_render_thread() {
        let mut indicator = ProgressIndicator::new();
        indicator.start("dropping...");
        drop(indicator);
    }
}
