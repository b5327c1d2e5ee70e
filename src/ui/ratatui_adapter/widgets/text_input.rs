//! Text input modal for the filter panel
//!
//! Edits the job title (one value) or collects tools to add (several
//! values separated by spaces). In tool mode the word being typed is
//! completed from the configured tool suggestions: Tab takes the
//! highlighted suggestion, Up/Down move the highlight.

use super::modal;
use crate::completions::matching_tools;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const MAX_SUGGESTIONS: usize = 8;
const MODAL_WIDTH: u16 = 60;

/// Buffer, cursor and completion state of the modal
#[derive(Debug, Clone)]
pub struct TextInputState {
    /// Title of the modal
    pub prompt: String,
    /// Text typed so far
    pub buffer: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the buffer holds space-separated values
    pub multi_value: bool,
    /// Completions for the word under the cursor
    pub suggestions: Vec<String>,
    /// Index of the highlighted suggestion
    pub highlighted: usize,
    candidates: Vec<String>,
    excluded: Vec<String>,
}

impl TextInputState {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            buffer: String::new(),
            cursor: 0,
            multi_value: false,
            suggestions: Vec::new(),
            highlighted: 0,
            candidates: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// Start with `text` in the buffer and the cursor after it
    #[must_use]
    pub fn with_initial(mut self, text: &str) -> Self {
        self.buffer = text.to_string();
        self.cursor_end();
        self.refresh_suggestions();
        self
    }

    #[must_use]
    pub fn with_multi_value(mut self, multi: bool) -> Self {
        self.multi_value = multi;
        self
    }

    /// Complete from `candidates`, never offering anything in `excluded`
    #[must_use]
    pub fn with_autocomplete(mut self, candidates: Vec<String>, excluded: Vec<String>) -> Self {
        self.candidates = candidates;
        self.excluded = excluded;
        self.refresh_suggestions();
        self
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of character position `pos`
    fn byte_at(&self, pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(pos)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Byte range of the partial word ending at the cursor
    fn word_range(&self) -> (usize, usize) {
        let end = self.byte_at(self.cursor);
        if !self.multi_value {
            return (0, end);
        }
        let start = self.buffer[..end]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        (start, end)
    }

    /// Recompute completions for the word under the cursor
    pub fn refresh_suggestions(&mut self) {
        let (start, end) = self.word_range();
        let typed: Vec<&str> = self.buffer.split_whitespace().collect();

        self.suggestions = matching_tools(&self.candidates, &self.buffer[start..end])
            .into_iter()
            .filter(|tool| !self.excluded.contains(tool) && !typed.contains(&tool.as_str()))
            .take(MAX_SUGGESTIONS)
            .collect();
        self.highlighted = self.highlighted.min(self.suggestions.len().saturating_sub(1));
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
        self.refresh_suggestions();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.buffer.remove(at);
        self.refresh_suggestions();
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_at(self.cursor);
            self.buffer.remove(at);
            self.refresh_suggestions();
        }
    }

    pub const fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Highlight the previous suggestion, wrapping to the last
    pub fn suggestion_up(&mut self) {
        let len = self.suggestions.len();
        if len > 0 {
            self.highlighted = (self.highlighted + len - 1) % len;
        }
    }

    /// Highlight the next suggestion, wrapping to the first
    pub fn suggestion_down(&mut self) {
        let len = self.suggestions.len();
        if len > 0 {
            self.highlighted = (self.highlighted + 1) % len;
        }
    }

    /// Replace the partial word with the highlighted suggestion
    pub fn accept_suggestion(&mut self) {
        let Some(choice) = self.suggestions.get(self.highlighted).cloned() else {
            return;
        };
        let (start, end) = self.word_range();
        let replacement = if self.multi_value {
            format!("{choice} ")
        } else {
            choice
        };

        self.buffer.replace_range(start..end, &replacement);
        self.cursor = self.buffer[..start + replacement.len()].chars().count();
        self.highlighted = 0;
        self.refresh_suggestions();
    }

    /// Values to submit: whitespace-split in multi-value mode, else the trimmed buffer
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        if self.multi_value {
            return self.buffer.split_whitespace().map(str::to_string).collect();
        }
        let value = self.buffer.trim();
        if value.is_empty() {
            Vec::new()
        } else {
            vec![value.to_string()]
        }
    }

    /// Ctrl+W
    pub fn delete_word_backwards(&mut self) {
        let end = self.byte_at(self.cursor);
        let kept = self.buffer[..end].trim_end();
        let start = kept.rfind(char::is_whitespace).map_or(0, |i| i + 1);

        self.buffer.replace_range(start..end, "");
        self.cursor = self.buffer[..start].chars().count();
        self.refresh_suggestions();
    }

    /// Ctrl+U
    pub fn clear_line(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.refresh_suggestions();
    }

    /// Characters that fit in `width` columns around the cursor, and the
    /// cursor position within them
    fn window(&self, width: usize) -> (Vec<char>, usize) {
        let chars: Vec<char> = self.buffer.chars().collect();
        // One extra column for the cursor block past the end
        let start = (self.cursor + 1).saturating_sub(width.max(1));
        let visible = chars.iter().skip(start).take(width).copied().collect();
        (visible, self.cursor - start)
    }
}

/// Centered modal rendering a [`TextInputState`]
pub struct TextInputModal<'a> {
    state: &'a TextInputState,
    theme: &'a Theme,
}

impl<'a> TextInputModal<'a> {
    #[must_use]
    pub const fn new(state: &'a TextInputState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn input_line(&self, width: usize) -> Line<'static> {
        let (visible, at) = self.state.window(width.saturating_sub(2));
        let before: String = visible[..at].iter().collect();
        let under = visible.get(at).map_or_else(|| " ".to_string(), char::to_string);
        let after: String = visible.iter().skip(at + 1).collect();

        Line::from(vec![
            Span::styled("> ", self.theme.muted_style()),
            Span::raw(before),
            Span::styled(under, self.theme.accent_style().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ])
    }

    fn suggestion_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("tab: ", self.theme.muted_style())];
        for (idx, tool) in self.state.suggestions.iter().enumerate() {
            let style = if idx == self.state.highlighted {
                self.theme.highlight_style()
            } else {
                self.theme.tool_style()
            };
            spans.push(Span::styled(format!(" {tool} "), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for TextInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = modal::frame(modal::centered(area, MODAL_WIDTH, 5), buf, &self.state.prompt, self.theme);

        let [input, suggestions, help] = Layout::vertical([Constraint::Length(1); 3]).areas(inner);

        Paragraph::new(self.input_line(input.width as usize)).render(input, buf);
        if !self.state.suggestions.is_empty() {
            Paragraph::new(self.suggestion_line()).render(suggestions, buf);
        }
        Paragraph::new("Enter: apply | Esc: cancel")
            .style(self.theme.muted_style())
            .alignment(Alignment::Right)
            .render(help, buf);
    }
}
