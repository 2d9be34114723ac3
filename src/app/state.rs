use std::path::{Path, PathBuf};

use fltk::{
    app::{self, Sender},
    dialog,
    frame::Frame,
    group::{Flex, Group, Tabs},
    input::Input,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    printer::Printer,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};
use syntect::parsing::SyntaxSet;

use super::ai::AiBridge;
use super::debounce::{Debouncer, QUIET_PERIOD_SECS};
use super::document::{Document, is_markdown_file, read_text, write_text};
use super::error::{AppError, Result};
use super::export;
use super::messages::Message;
use super::preview::render_markdown;
use super::styles::{StyleSheets, Theme, wrap_document};
use super::text_ops::find_in_text_wrapping;
use crate::ui::file_dialogs::{
    HTML_FILTER, MARKDOWN_FILTER, native_open_dialog, native_save_dialog,
};
use crate::ui::theme::{ThemeTargets, apply_theme};

/// Seconds a transient status message stays visible.
const STATUS_SECS: f64 = 3.0;
/// Height of the search row when visible.
const SEARCH_ROW_HEIGHT: i32 = 36;

/// Widgets assembled in main and handed to the coordinator.
pub struct UiParts {
    pub window: Window,
    pub menu: MenuBar,
    pub flex: Flex,
    pub search_row: Flex,
    pub search_input: Input,
    pub tabs: Tabs,
    pub ai_tab: Group,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub preview: HelpView,
    pub ai_input: TextDisplay,
    pub ai_input_buffer: TextBuffer,
    pub ai_output: TextDisplay,
    pub ai_output_buffer: TextBuffer,
    pub status: Frame,
}

pub struct AppState {
    ui: UiParts,
    sender: Sender<Message>,

    pub document: Document,
    pub theme: Theme,
    pub font_size: i32,
    pub debounce: Debouncer,
    pub ai: AiBridge,

    sheets: StyleSheets,
    syntaxes: SyntaxSet,
    /// Render state: last composed document. Derived, always recomputable
    /// from (editor text, theme).
    pub last_html: String,

    search_visible: bool,
    last_query: String,
    search_pos: usize,
    /// Distinguishes the display timers of successive status messages, so
    /// a stale timer can't clear a newer message early.
    status_epoch: Debouncer,
    /// Set before a programmatic buffer rewrite so the resulting change
    /// event re-renders without marking the document dirty.
    loading: bool,
}

impl AppState {
    pub fn new(
        ui: UiParts,
        sender: Sender<Message>,
        sheets: StyleSheets,
        syntaxes: SyntaxSet,
        font_size: i32,
    ) -> Self {
        Self {
            ui,
            sender,
            document: Document::untitled(),
            theme: Theme::Light,
            font_size,
            debounce: Debouncer::new(),
            ai: AiBridge::new(),
            sheets,
            syntaxes,
            last_html: String::new(),
            search_visible: false,
            last_query: String::new(),
            search_pos: 0,
            status_epoch: Debouncer::new(),
            loading: false,
        }
    }

    pub fn update_window_title(&mut self) {
        let prefix = if self.document.dirty { "*" } else { "" };
        self.ui
            .window
            .set_label(&format!("{}{} - MarkPad", prefix, self.document.display_name));
    }

    // --- Status line ---

    pub fn set_status(&mut self, message: &str) {
        self.ui.status.set_label(message);
        let generation = self.status_epoch.bump();
        let s = self.sender;
        app::add_timeout3(STATUS_SECS, move |_| {
            s.send(Message::ClearStatus(generation));
        });
    }

    /// Clear immediately and invalidate any pending display timer.
    pub fn clear_status(&mut self) {
        self.status_epoch.bump();
        self.ui.status.set_label("");
    }

    /// A display timer elapsed; clear only if no newer message replaced
    /// the one it was armed for.
    pub fn expire_status(&mut self, generation: u64) {
        if self.status_epoch.is_current(generation) {
            self.ui.status.set_label("");
        }
    }

    // --- Render pipeline ---

    /// An edit arrived: mark dirty (unless this was a programmatic rewrite)
    /// and restart the debounce countdown.
    pub fn on_editor_changed(&mut self) {
        if self.loading {
            self.loading = false;
        } else {
            self.document.mark_dirty();
            self.update_window_title();
        }
        let generation = self.debounce.bump();
        let s = self.sender;
        app::add_timeout3(QUIET_PERIOD_SECS, move |_| {
            s.send(Message::PreviewTick(generation));
        });
    }

    /// A debounce timer fired; render only if no later edit superseded it.
    pub fn preview_tick(&mut self, generation: u64) {
        if self.debounce.is_current(generation) {
            self.update_preview();
        }
    }

    /// Run the full pipeline on the current text and refresh the preview.
    pub fn update_preview(&mut self) {
        let text = self.ui.buffer.text();
        let content = render_markdown(&text, &self.syntaxes);
        self.last_html = wrap_document(&content, &self.sheets.compose_css(self.theme));
        self.ui
            .preview
            .set_value(&wrap_for_preview(&content, self.theme));
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        let Some(path) = native_open_dialog("Open Markdown File", MARKDOWN_FILTER) else {
            return;
        };
        match read_text(Path::new(&path)) {
            Ok(content) => {
                self.loading = true;
                self.ui.buffer.set_text(&content);
                self.document.set_path(PathBuf::from(&path));
                self.document.mark_clean();
                self.update_window_title();
                self.update_preview();
                self.set_status(&format!("Opened {}", path));
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    pub fn file_save(&mut self) {
        let Some(path) = self.document.file_path.clone() else {
            self.file_save_as();
            return;
        };
        match write_text(&path, &self.ui.buffer.text()) {
            Ok(()) => {
                self.document.mark_clean();
                self.update_window_title();
                self.set_status(&format!("Saved to {}", path.display()));
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(mut path) = native_save_dialog("Save Markdown File", MARKDOWN_FILTER, ".") else {
            return;
        };
        if !is_markdown_file(&path) {
            path.push_str(".md");
        }
        self.document.set_path(PathBuf::from(&path));
        self.file_save();
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn confirm_quit(&mut self) -> bool {
        if !self.document.dirty {
            return true;
        }
        let choice = dialog::choice2_default(
            "You have unsaved changes.",
            "Save",
            "Quit Without Saving",
            "Cancel",
        );
        match choice {
            Some(0) => {
                self.file_save();
                !self.document.dirty
            }
            Some(1) => true,
            _ => false,
        }
    }

    // --- View ---

    pub fn toggle_dark_mode(&mut self) {
        self.theme = self.theme.toggled();
        self.apply_current_theme();
        self.update_preview();
    }

    /// Recolor every themed widget for the active theme.
    pub fn apply_current_theme(&mut self) {
        let is_dark = self.theme.is_dark();
        apply_theme(
            &mut ThemeTargets {
                editor: &mut self.ui.editor,
                preview: &mut self.ui.preview,
                ai_input: &mut self.ui.ai_input,
                ai_output: &mut self.ui.ai_output,
                window: &mut self.ui.window,
                menu: &mut self.ui.menu,
                status: &mut self.ui.status,
            },
            is_dark,
        );
    }

    pub fn adjust_font_size(&mut self, delta: i32) {
        let new_size = self.font_size + delta;
        // Prevent the font from getting unreadably small
        if new_size < 6 {
            return;
        }
        self.font_size = new_size;
        self.ui.editor.set_text_size(new_size);
        self.ui.ai_input.set_text_size(new_size);
        self.ui.ai_output.set_text_size(new_size);
        self.ui.preview.set_text_size(new_size);
        self.ui.editor.redraw();
        self.ui.ai_input.redraw();
        self.ui.ai_output.redraw();
        self.ui.preview.redraw();
    }

    // --- Search ---

    pub fn toggle_search_bar(&mut self) {
        self.search_visible = !self.search_visible;
        if self.search_visible {
            self.ui.flex.fixed(&self.ui.search_row, SEARCH_ROW_HEIGHT);
            self.ui.search_row.show();
            let _ = self.ui.search_input.take_focus();
        } else {
            self.ui.flex.fixed(&self.ui.search_row, 0);
            self.ui.search_row.hide();
        }
        self.ui.window.redraw();
    }

    pub fn find_next(&mut self) {
        let query = self.ui.search_input.value();
        if query.is_empty() {
            return;
        }

        let text = self.ui.buffer.text();
        // A fresh query starts from the cursor; repeats continue forward.
        if query != self.last_query {
            self.last_query = query.clone();
            self.search_pos = self.ui.editor.insert_position().max(0) as usize;
        }

        match find_in_text_wrapping(&text, &query, self.search_pos, false) {
            Some((start, end)) => {
                self.ui.buffer.select(start as i32, end as i32);
                self.ui.editor.set_insert_position(end as i32);
                self.ui.editor.show_insert_position();
                self.ui.editor.redraw();
                self.search_pos = end;
            }
            None => {
                self.set_status(&format!("\"{}\" not found", query));
            }
        }
    }

    // --- Export ---

    pub fn export_html(&mut self) {
        let suggested = export::suggest_html_path(self.document.file_path.as_deref());
        let Some(path) =
            native_save_dialog("Export to HTML", HTML_FILTER, &suggested.to_string_lossy())
        else {
            return;
        };
        let text = self.ui.buffer.text();
        match export::export_html(
            Path::new(&path),
            &text,
            self.theme,
            &self.sheets,
            &self.syntaxes,
        ) {
            Ok(()) => self.set_status(&format!("Exported to {}", path)),
            Err(e) => dialog::alert_default(&format!("Could not export HTML: {}", e)),
        }
    }

    /// Print the rendered preview through the toolkit's print facility
    /// (the print dialog offers print-to-PDF). Success is reported only
    /// after the whole job went through.
    pub fn export_pdf(&mut self) {
        self.update_preview();
        match self.print_preview() {
            Ok(()) => self.set_status("Print job finished."),
            Err(e) => dialog::alert_default(&format!("Could not export PDF: {}", e)),
        }
    }

    fn print_preview(&mut self) -> Result<()> {
        let mut printer = Printer::default();
        printer
            .begin_job(0)
            .map_err(|e| AppError::Print(e.to_string()))?;

        // Paginate by scrolling the preview one viewport per page.
        self.ui.preview.set_top_line(0);
        loop {
            printer
                .begin_page()
                .map_err(|e| AppError::Print(e.to_string()))?;
            printer.print_widget(&self.ui.preview, 0, 0);
            printer
                .end_page()
                .map_err(|e| AppError::Print(e.to_string()))?;

            let before = self.ui.preview.top_line();
            self.ui.preview.set_top_line(before + self.ui.preview.h());
            if self.ui.preview.top_line() <= before {
                break;
            }
        }
        printer.end_job();
        self.ui.preview.set_top_line(0);
        Ok(())
    }

    // --- AI assistant ---

    /// Copy the editor selection into the AI input pane and switch tabs.
    pub fn prepare_ai(&mut self) {
        let selection = self.ui.buffer.selection_text();
        if selection.is_empty() {
            dialog::message_default("Please select some text in the Editor tab first.");
            return;
        }
        self.ui.ai_input_buffer.set_text(&selection);
        self.ui.ai_output_buffer.set_text("");
        let _ = self.ui.tabs.set_value(&self.ui.ai_tab);
        self.ui.tabs.redraw();
    }

    /// Run the blocking summarize round trip, prompting for a key first if
    /// none is cached. The UI stalls for the call's duration.
    pub fn run_ai(&mut self) {
        let content = self.ui.ai_input_buffer.text();
        if content.trim().is_empty() {
            dialog::message_default(
                "There is no content to analyze. Please send some text from the editor first.",
            );
            return;
        }

        if !self.ai.has_key() && !self.prompt_for_key() {
            return;
        }

        self.set_status("Sending request to Gemini AI...");
        app::check();

        match self.ai.summarize(&content) {
            Ok(text) => {
                self.clear_status();
                self.ui.ai_output_buffer.set_text(&text);
            }
            Err(e) => {
                self.clear_status();
                dialog::alert_default(&format!(
                    "An error occurred while contacting the AI service: {}",
                    e
                ));
            }
        }
    }

    /// Modal key prompt + live validation. Returns true once a key is
    /// cached; a rejected key leaves the bridge empty so the next attempt
    /// prompts again.
    fn prompt_for_key(&mut self) -> bool {
        let Some(key) = dialog::input_default("Please enter your Google Gemini API key:", "")
        else {
            return false;
        };
        if key.is_empty() {
            return false;
        }

        self.set_status("Validating API key...");
        app::check();

        match self.ai.set_key(key) {
            Ok(()) => {
                self.clear_status();
                true
            }
            Err(e) => {
                self.clear_status();
                dialog::alert_default(&format!(
                    "The API key seems to be invalid.\nPlease check it and try again.\nError: {}",
                    e
                ));
                false
            }
        }
    }
}

/// Wrap the content fragment for the FLTK preview surface, which takes its
/// page colors from body attributes rather than CSS.
fn wrap_for_preview(content: &str, theme: Theme) -> String {
    let (bg, fg) = match theme {
        Theme::Light => ("#fdfdfd", "#333333"),
        Theme::Dark => ("#2b2b2b", "#dcdcdc"),
    };
    format!(
        "<html><body bgcolor=\"{bg}\" text=\"{fg}\"><font face=\"Helvetica\">{content}</font></body></html>"
    )
}
