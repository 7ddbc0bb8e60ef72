//! # Editor View Model
//!
//! The single coordination point for the editing command state machine. It
//! owns the content buffer, the undo/redo history, the event log, and both
//! timer slots, applies the request events produced by the command
//! dispatcher, and runs the input-change path for plain typing. All
//! mutations happen synchronously inside one event-handler turn; the two
//! timers fire between turns via [`EditorViewModel::tick`].

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::config::{self, INDENT_UNIT};
use crate::editor::commands::CommandEvent;
use crate::editor::events::{key_name, Platform};
use crate::editor::models::{transforms, BufferModel, EventLog, HistoryModel};
use crate::editor::services::{ChordTimer, HighlightDebouncer};

/// Editor state machine: buffer, history, log, and timer slots
pub struct EditorViewModel {
    buffer: BufferModel,
    history: HistoryModel,
    log: EventLog,
    highlighter: HighlightDebouncer,
    chord: ChordTimer,
    platform: Platform,
    dirty: bool,
}

impl EditorViewModel {
    /// Create a view model with the default debounce delay and the
    /// detected platform
    pub fn new() -> Self {
        Self::with_settings(config::get_debounce_delay(), Platform::detect())
    }

    /// Create a view model with an explicit debounce delay and platform
    pub fn with_settings(debounce_delay: std::time::Duration, platform: Platform) -> Self {
        Self {
            buffer: BufferModel::new(),
            history: HistoryModel::new(),
            log: EventLog::new(),
            highlighter: HighlightDebouncer::new(debounce_delay),
            chord: ChordTimer::new(config::chord_window()),
            platform,
            dirty: true,
        }
    }

    // ---- external interface -------------------------------------------

    /// The live content string
    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    /// Current selection-start char offset
    pub fn selection_start(&self) -> usize {
        self.buffer.cursor()
    }

    /// Number of snapshots in the undo history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of snapshots available for redo
    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }

    /// Count of settled highlight firings since session start
    pub fn highlight_count(&self) -> u64 {
        self.highlighter.invocation_count()
    }

    /// All event-log entries in append order
    pub fn logs(&self) -> &[String] {
        self.log.entries()
    }

    /// Whether the chord window is open at `now`
    pub fn chord_armed(&self, now: Instant) -> bool {
        self.chord.is_armed(now)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Take the dirty flag, clearing it; the renderer redraws when true
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ---- logging paths -------------------------------------------------

    /// Rule 1: every key-down appends a log entry before dispatch
    pub fn record_key_down(&mut self, event: &KeyEvent) {
        self.log.append(format!("keydown: {}", key_name(event)));
        self.dirty = true;
    }

    /// Key-up path: log entry only, no other mutation
    pub fn record_key_up(&mut self, event: &KeyEvent) {
        self.log.append(format!("keyup: {}", key_name(event)));
        self.dirty = true;
    }

    // ---- command application -------------------------------------------

    /// Apply one request event produced by the command dispatcher
    pub fn apply_command_event(&mut self, event: CommandEvent, now: Instant) {
        match event {
            CommandEvent::SaveRequested => {
                self.log.append("Action: Save");
            }
            CommandEvent::UndoRequested => {
                if let Some(content) = self.history.undo() {
                    self.buffer.set_content(content);
                }
            }
            CommandEvent::RedoRequested => {
                if let Some(content) = self.history.redo() {
                    self.buffer.set_content(content);
                }
            }
            CommandEvent::IndentRequested { offset } => {
                let new_content = transforms::insert_at(self.buffer.content(), offset, INDENT_UNIT);
                let new_cursor = offset + INDENT_UNIT.chars().count();
                self.buffer.replace(new_content, new_cursor);
                self.commit();
            }
            CommandEvent::OutdentRequested => {
                let before = self.buffer.char_len();
                let new_content = transforms::outdent(self.buffer.content());
                let removed = before - new_content.chars().count();
                let new_cursor = self.buffer.cursor().saturating_sub(removed);
                self.buffer.replace(new_content, new_cursor);
                self.commit();
            }
            CommandEvent::NewlineRequested => {
                let new_content = transforms::newline_with_indent(self.buffer.content());
                let end = new_content.chars().count();
                self.buffer.replace(new_content, end);
                self.commit();
            }
            CommandEvent::CommentToggleRequested { offset } => {
                let new_content = transforms::toggle_line_comment(self.buffer.content(), offset);
                self.buffer.set_content(new_content);
                self.commit();
            }
            CommandEvent::ChordArmRequested => {
                self.chord.arm(now);
            }
            CommandEvent::ChordCompleteRequested => {
                if self.chord.is_armed(now) {
                    self.log.append("Action: Chord Success");
                    self.chord.disarm();
                }
            }
        }
        self.dirty = true;
    }

    // ---- input-change path (plain typing) -------------------------------

    /// Apply a plain typed char: splice, commit, log, schedule highlight.
    ///
    /// This is the only path that drives the debounce.
    pub fn apply_char_input(&mut self, ch: char, now: Instant) {
        self.buffer.insert_char(ch);
        self.finish_input_change(now);
    }

    /// Apply a backspace as a content-changing input event. A backspace at
    /// offset 0 changes nothing and stays off the input path entirely.
    pub fn apply_backspace(&mut self, now: Instant) {
        if self.buffer.delete_before_cursor() {
            self.finish_input_change(now);
        }
    }

    /// Apply a forward delete as a content-changing input event. A delete
    /// at the end of the content changes nothing and stays off the input
    /// path entirely.
    pub fn apply_delete(&mut self, now: Instant) {
        if self.buffer.delete_at_cursor() {
            self.finish_input_change(now);
        }
    }

    fn finish_input_change(&mut self, now: Instant) {
        // A deadline that elapsed before this keystroke fires first, as its
        // own turn; rescheduling must not swallow a settled window.
        self.tick(now);
        self.commit();
        let last = self
            .buffer
            .content()
            .chars()
            .last()
            .map(String::from)
            .unwrap_or_default();
        self.log.append(format!("input: {last}"));
        self.highlighter.schedule(now);
        self.dirty = true;
    }

    // ---- selection-only keys --------------------------------------------

    pub fn move_selection_left(&mut self) {
        self.buffer.move_cursor_left();
        self.dirty = true;
    }

    pub fn move_selection_right(&mut self) {
        self.buffer.move_cursor_right();
        self.dirty = true;
    }

    pub fn move_selection_home(&mut self) {
        self.buffer.move_cursor_home();
        self.dirty = true;
    }

    pub fn move_selection_end(&mut self) {
        self.buffer.move_cursor_end();
        self.dirty = true;
    }

    // ---- timers ----------------------------------------------------------

    /// Fire due timers. Runs between handler turns; returns true when the
    /// highlight pass settled.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.highlighter.poll(now);
        if fired {
            tracing::debug!(
                "highlight pass settled (count: {})",
                self.highlighter.invocation_count()
            );
            self.dirty = true;
        }
        self.chord.poll(now);
        fired
    }

    fn commit(&mut self) {
        self.history.commit(self.buffer.content());
    }
}

impl Default for EditorViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(200);

    fn create_test_view_model() -> EditorViewModel {
        EditorViewModel::with_settings(DELAY, Platform::Other)
    }

    #[test]
    fn view_model_should_start_at_session_defaults() {
        let vm = create_test_view_model();
        assert_eq!(vm.content(), "");
        assert_eq!(vm.history_len(), 1);
        assert_eq!(vm.highlight_count(), 0);
        assert!(vm.logs().is_empty());
        assert!(!vm.chord_armed(Instant::now()));
    }

    #[test]
    fn char_input_should_commit_log_and_schedule_highlight() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_char_input('a', now);

        assert_eq!(vm.content(), "a");
        assert_eq!(vm.history_len(), 2);
        assert_eq!(vm.logs(), ["input: a"]);
        assert_eq!(vm.highlight_count(), 0);

        assert!(vm.tick(now + DELAY));
        assert_eq!(vm.highlight_count(), 1);
    }

    #[test]
    fn input_burst_should_settle_one_highlight() {
        let mut vm = create_test_view_model();
        let start = Instant::now();

        vm.apply_char_input('a', start);
        vm.apply_char_input('b', start + Duration::from_millis(50));
        vm.apply_char_input('c', start + Duration::from_millis(100));

        // First deadline superseded; nothing fires at start + DELAY
        assert!(!vm.tick(start + DELAY));
        assert!(vm.tick(start + Duration::from_millis(100) + DELAY));
        assert_eq!(vm.highlight_count(), 1);
    }

    #[test]
    fn separated_inputs_should_each_settle_without_intermediate_tick() {
        let mut vm = create_test_view_model();
        let start = Instant::now();

        vm.apply_char_input('a', start);

        // The second keystroke arrives after the first window elapsed but
        // before any tick ran; the due firing settles before rescheduling
        vm.apply_char_input('b', start + Duration::from_millis(250));
        assert_eq!(vm.highlight_count(), 1);

        assert!(vm.tick(start + Duration::from_millis(450)));
        assert_eq!(vm.highlight_count(), 2);
    }

    #[test]
    fn undo_should_restore_previous_snapshot() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_char_input('a', now);
        vm.apply_char_input('b', now);
        assert_eq!(vm.content(), "ab");

        vm.apply_command_event(CommandEvent::UndoRequested, now);
        assert_eq!(vm.content(), "a");
        assert_eq!(vm.history_len(), 2);
        assert_eq!(vm.redo_len(), 1);
    }

    #[test]
    fn undo_redo_should_round_trip_content_and_history_len() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_char_input('a', now);
        vm.apply_char_input('b', now);
        let len_before = vm.history_len();

        vm.apply_command_event(CommandEvent::UndoRequested, now);
        vm.apply_command_event(CommandEvent::RedoRequested, now);

        assert_eq!(vm.content(), "ab");
        assert_eq!(vm.history_len(), len_before);
        assert_eq!(vm.redo_len(), 0);
    }

    #[test]
    fn undo_should_saturate_at_initial_state() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_command_event(CommandEvent::UndoRequested, now);
        assert_eq!(vm.content(), "");
        assert_eq!(vm.history_len(), 1);
    }

    #[test]
    fn new_input_after_undo_should_clear_redo() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_char_input('a', now);
        vm.apply_char_input('b', now);
        vm.apply_command_event(CommandEvent::UndoRequested, now);
        assert_eq!(vm.redo_len(), 1);

        vm.apply_char_input('x', now);
        assert_eq!(vm.redo_len(), 0);

        vm.apply_command_event(CommandEvent::RedoRequested, now);
        assert_eq!(vm.content(), "ax");
    }

    #[test]
    fn indent_should_splice_at_offset_and_commit() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_char_input('a', now);
        vm.apply_char_input('b', now);
        vm.apply_command_event(CommandEvent::IndentRequested { offset: 1 }, now);

        assert_eq!(vm.content(), "a  b");
        assert_eq!(vm.selection_start(), 3);
        assert_eq!(vm.history_len(), 4);
    }

    #[test]
    fn outdent_should_strip_buffer_start_and_commit_unconditionally() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_command_event(CommandEvent::IndentRequested { offset: 0 }, now);
        assert_eq!(vm.content(), "  ");

        vm.apply_command_event(CommandEvent::OutdentRequested, now);
        assert_eq!(vm.content(), "");

        // Identity outdent still commits a snapshot
        let len_before = vm.history_len();
        vm.apply_command_event(CommandEvent::OutdentRequested, now);
        assert_eq!(vm.content(), "");
        assert_eq!(vm.history_len(), len_before + 1);
    }

    #[test]
    fn newline_should_carry_last_line_indent() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_command_event(CommandEvent::IndentRequested { offset: 0 }, now);
        vm.apply_char_input('x', now);
        assert_eq!(vm.content(), "  x");

        vm.apply_command_event(CommandEvent::NewlineRequested, now);
        assert_eq!(vm.content(), "  x\n  ");
        assert_eq!(vm.selection_start(), 6);
    }

    #[test]
    fn comment_toggle_should_round_trip() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        for ch in "hello".chars() {
            vm.apply_char_input(ch, now);
        }

        vm.apply_command_event(CommandEvent::CommentToggleRequested { offset: 0 }, now);
        assert_eq!(vm.content(), "// hello");

        vm.apply_command_event(CommandEvent::CommentToggleRequested { offset: 0 }, now);
        assert_eq!(vm.content(), "hello");
    }

    #[test]
    fn save_should_only_log() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_command_event(CommandEvent::SaveRequested, now);
        assert_eq!(vm.logs(), ["Action: Save"]);
        assert_eq!(vm.content(), "");
        assert_eq!(vm.history_len(), 1);
    }

    #[test]
    fn chord_completion_inside_window_should_log_once_and_disarm() {
        let mut vm = create_test_view_model();
        let start = Instant::now();

        vm.apply_command_event(CommandEvent::ChordArmRequested, start);
        assert!(vm.chord_armed(start));

        let complete_at = start + Duration::from_millis(500);
        vm.apply_command_event(CommandEvent::ChordCompleteRequested, complete_at);

        assert_eq!(vm.logs(), ["Action: Chord Success"]);
        assert!(!vm.chord_armed(complete_at));
    }

    #[test]
    fn chord_completion_after_window_should_do_nothing() {
        let mut vm = create_test_view_model();
        let start = Instant::now();

        vm.apply_command_event(CommandEvent::ChordArmRequested, start);
        let late = start + config::chord_window();
        vm.apply_command_event(CommandEvent::ChordCompleteRequested, late);

        assert!(vm.logs().is_empty());
    }

    #[test]
    fn backspace_should_commit_and_log_input() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_char_input('a', now);
        vm.apply_char_input('b', now);
        vm.apply_backspace(now);

        assert_eq!(vm.content(), "a");
        assert_eq!(vm.history_len(), 4);
        assert_eq!(vm.logs().last().map(String::as_str), Some("input: a"));
    }

    #[test]
    fn delete_should_commit_and_log_input() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_char_input('a', now);
        vm.apply_char_input('b', now);
        vm.move_selection_home();
        vm.apply_delete(now);

        assert_eq!(vm.content(), "b");
        assert_eq!(vm.history_len(), 4);
        assert_eq!(vm.logs().last().map(String::as_str), Some("input: b"));
        assert!(vm.tick(now + DELAY));
    }

    #[test]
    fn delete_at_content_end_should_be_noop() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_char_input('a', now);
        let history_before = vm.history_len();
        let logs_before = vm.logs().len();

        vm.apply_delete(now);
        assert_eq!(vm.content(), "a");
        assert_eq!(vm.history_len(), history_before);
        assert_eq!(vm.logs().len(), logs_before);
    }

    #[test]
    fn backspace_on_empty_content_should_be_noop() {
        let mut vm = create_test_view_model();
        let now = Instant::now();

        vm.apply_backspace(now);
        assert_eq!(vm.history_len(), 1);
        assert!(vm.logs().is_empty());
        assert_eq!(vm.highlight_count(), 0);
        assert!(!vm.tick(now + DELAY));
    }

    #[test]
    fn key_logging_should_preserve_order() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut vm = create_test_view_model();
        let event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);

        vm.record_key_down(&event);
        vm.apply_char_input('a', Instant::now());
        vm.record_key_up(&event);

        assert_eq!(vm.logs(), ["keydown: a", "input: a", "keyup: a"]);
    }
}
