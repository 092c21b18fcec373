use std::io::{self, Write};

use log::warn;

/// Single-line console progress bar, redrawn in place with `\r`.
///
/// Renders as `[=====>    ] 50 %`. The first failed write is logged and
/// the bar stays silent for the rest of the run.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    pub width: usize,
    disabled: bool,
}

impl ProgressBar {
    pub fn new(width: usize) -> Self {
        ProgressBar { width, disabled: false }
    }

    pub fn render(&self, progress: usize, total: usize) -> String {
        let ratio = if total == 0 { 1.0 } else { (progress as f64 / total as f64).min(1.0) };
        let pos = (self.width as f64 * ratio) as usize;

        let bar: String = (0..self.width)
            .map(|i| match i.cmp(&pos) {
                std::cmp::Ordering::Less => '=',
                std::cmp::Ordering::Equal => '>',
                std::cmp::Ordering::Greater => ' ',
            })
            .collect();
        format!("[{}] {} %", bar, (ratio * 100.0) as u32)
    }

    /// Redraws the bar on stdout without a trailing newline.
    pub fn draw(&mut self, progress: usize, total: usize) {
        self.draw_to(&mut io::stdout().lock(), progress, total);
    }

    pub fn draw_to<W: Write>(&mut self, out: &mut W, progress: usize, total: usize) {
        if self.disabled {
            return;
        }
        let written = write!(out, "{}\r", self.render(progress, total)).and_then(|_| out.flush());
        if let Err(e) = written {
            warn!("progress bar disabled: {e}");
            self.disabled = true;
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        ProgressBar::new(50)
    }
}
