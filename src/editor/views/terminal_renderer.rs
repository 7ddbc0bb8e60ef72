//! # Terminal Renderer
//!
//! Pure presentation: draws the editable surface, a status line, and the
//! event-log panel. Generic over the output stream so tests can render into
//! a byte buffer without a real terminal.

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::editor::view_models::EditorViewModel;

/// Terminal view over an arbitrary write stream
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: u16,
    height: u16,
    enhanced_keys: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer sized to the current terminal (80x24 fallback)
    pub fn new(out: W) -> Result<Self> {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        Ok(Self {
            out,
            width,
            height,
            enhanced_keys: false,
        })
    }

    /// Enter raw mode and the alternate screen; opt into key-release
    /// reporting where the terminal supports it
    pub fn initialize(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide)?;
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                self.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.enhanced_keys = true;
        }
        Ok(())
    }

    /// Restore the terminal to its original state
    pub fn cleanup(&mut self) -> Result<()> {
        if self.enhanced_keys {
            execute!(self.out, PopKeyboardEnhancementFlags)?;
        }
        execute!(self.out, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Redraw the whole surface from the view-model state
    pub fn render_full(&mut self, view_model: &EditorViewModel, now: Instant) -> Result<()> {
        let width = self.width as usize;
        let height = self.height as usize;

        let log_rows = (height / 3).clamp(3, 12);
        let editor_rows = height.saturating_sub(log_rows + 3).max(1);

        queue!(self.out, Hide, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            self.out,
            SetAttribute(Attribute::Reverse),
            Print(pad_line(" keyline ", width)),
            SetAttribute(Attribute::Reset)
        )?;

        for (i, line) in view_model.content().split('\n').take(editor_rows).enumerate() {
            queue!(
                self.out,
                MoveTo(0, (1 + i) as u16),
                Print(truncate(line, width))
            )?;
        }

        let status_row = (1 + editor_rows) as u16;
        let chord = if view_model.chord_armed(now) {
            "armed"
        } else {
            "-"
        };
        let status = format!(
            " history: {}  highlights: {}  chord: {} ",
            view_model.history_len(),
            view_model.highlight_count(),
            chord
        );
        queue!(
            self.out,
            MoveTo(0, status_row),
            SetAttribute(Attribute::Reverse),
            Print(pad_line(&status, width)),
            SetAttribute(Attribute::Reset)
        )?;

        queue!(
            self.out,
            MoveTo(0, status_row + 1),
            Print(truncate("Event Logs", width))
        )?;
        let visible = log_rows.saturating_sub(1);
        let logs = view_model.logs();
        let start = logs.len().saturating_sub(visible);
        for (i, entry) in logs[start..].iter().enumerate() {
            queue!(
                self.out,
                MoveTo(0, status_row + 2 + i as u16),
                Print(truncate(entry, width))
            )?;
        }

        let (line, column) = cursor_line_column(view_model.content(), view_model.selection_start());
        let cursor_row = 1 + line.min(editor_rows.saturating_sub(1));
        queue!(
            self.out,
            MoveTo(
                column.min(width.saturating_sub(1)) as u16,
                cursor_row as u16
            ),
            Show
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Resolve a char offset into an editor (line, column) pair
fn cursor_line_column(content: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut column = 0;
    for ch in content.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn pad_line(text: &str, width: usize) -> String {
    let mut line = truncate(text, width);
    let len = line.chars().count();
    line.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::events::Platform;
    use std::time::Duration;

    fn create_test_view_model() -> EditorViewModel {
        EditorViewModel::with_settings(Duration::from_millis(200), Platform::Other)
    }

    #[test]
    fn cursor_line_column_should_track_newlines() {
        assert_eq!(cursor_line_column("", 0), (0, 0));
        assert_eq!(cursor_line_column("ab\ncd", 2), (0, 2));
        assert_eq!(cursor_line_column("ab\ncd", 3), (1, 0));
        assert_eq!(cursor_line_column("ab\ncd", 5), (1, 2));
    }

    #[test]
    fn pad_line_should_fill_to_width() {
        assert_eq!(pad_line("ab", 4), "ab  ");
        assert_eq!(pad_line("abcdef", 4), "abcd");
    }

    #[test]
    fn render_full_should_include_content_and_log_entries() {
        let mut vm = create_test_view_model();
        let now = Instant::now();
        vm.apply_char_input('h', now);
        vm.apply_char_input('i', now);

        let mut renderer = TerminalRenderer::new(Vec::new()).unwrap();
        renderer.update_size(80, 24);
        renderer.render_full(&vm, now).unwrap();

        let output = String::from_utf8_lossy(&renderer.out);
        assert!(output.contains("hi"));
        assert!(output.contains("Event Logs"));
        assert!(output.contains("input: i"));
        assert!(output.contains("history: 3"));
    }

    #[test]
    fn render_full_should_show_only_most_recent_log_entries() {
        let mut vm = create_test_view_model();
        let now = Instant::now();
        for ch in "abcdefghijklmnop".chars() {
            vm.apply_char_input(ch, now);
        }

        let mut renderer = TerminalRenderer::new(Vec::new()).unwrap();
        renderer.update_size(80, 12);
        renderer.render_full(&vm, now).unwrap();

        let output = String::from_utf8_lossy(&renderer.out);
        assert!(output.contains("input: p"));
        assert!(!output.contains("input: a"));
    }
}
