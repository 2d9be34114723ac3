use fltk::{
    app,
    button::Button,
    dialog,
    enums::{Align, CallbackTrigger, Font},
    frame::Frame,
    group::{Flex, Group, Tabs},
    input::Input,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};
use syntect::parsing::SyntaxSet;

use mark_pad::app::state::{AppState, UiParts};
use mark_pad::app::{Message, StyleSheets};
use mark_pad::ui::menu::build_menu;

const WINDOW_WIDTH: i32 = 1200;
const WINDOW_HEIGHT: i32 = 800;
const MENU_HEIGHT: i32 = 30;
const STATUS_HEIGHT: i32 = 24;
const DEFAULT_FONT_SIZE: i32 = 14;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let sheets = match StyleSheets::generate() {
        Ok(sheets) => sheets,
        Err(e) => {
            dialog::alert_default(&format!("Failed to build preview styles: {}", e));
            return;
        }
    };
    let syntaxes = SyntaxSet::load_defaults_newlines();

    let mut window = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "Untitled - MarkPad");

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None).column();

    let mut menu = MenuBar::default();
    flex.fixed(&menu, MENU_HEIGHT);
    build_menu(&mut menu, &sender);

    // Search row, collapsed until Edit/Find
    let mut search_row = Flex::default().row();
    let search_label = Frame::default().with_label("Find:");
    search_row.fixed(&search_label, 50);
    let mut search_input = Input::default();
    let mut find_button = Button::default().with_label("Find Next");
    search_row.fixed(&find_button, 90);
    let mut close_button = Button::default().with_label("Close");
    search_row.fixed(&close_button, 70);
    search_row.end();
    flex.fixed(&search_row, 0);
    search_row.hide();

    search_input.set_trigger(CallbackTrigger::EnterKeyAlways);
    search_input.emit(sender, Message::FindNext);
    find_button.emit(sender, Message::FindNext);
    close_button.emit(sender, Message::ToggleSearchBar);

    let tabs_h = WINDOW_HEIGHT - MENU_HEIGHT - STATUS_HEIGHT;
    let mut tabs = Tabs::new(0, MENU_HEIGHT, WINDOW_WIDTH, tabs_h, None);
    let client_y = MENU_HEIGHT + 25;
    let client_h = tabs_h - 25;

    // Tab 1: Markdown editor
    let mut editor_tab = Group::new(0, client_y, WINDOW_WIDTH, client_h, "Editor\t");
    let buffer = TextBuffer::default();
    let mut editor = TextEditor::new(0, client_y, WINDOW_WIDTH, client_h, "");
    editor.set_buffer(buffer.clone());
    editor.set_text_font(Font::Courier);
    editor.set_text_size(DEFAULT_FONT_SIZE);
    editor_tab.resizable(&editor);
    editor_tab.end();

    // Tab 2: HTML preview
    let mut preview_tab = Group::new(0, client_y, WINDOW_WIDTH, client_h, "Preview\t");
    let mut preview = HelpView::new(0, client_y, WINDOW_WIDTH, client_h, "");
    preview.set_text_size(DEFAULT_FONT_SIZE);
    preview_tab.resizable(&preview);
    preview_tab.end();

    // Tab 3: AI assistant
    let mut ai_tab = Group::new(0, client_y, WINDOW_WIDTH, client_h, "AI Assistant\t");
    let mut ai_flex = Flex::new(0, client_y, WINDOW_WIDTH, client_h, None).column();
    let input_label = Frame::default()
        .with_label("Content to Analyze:")
        .with_align(Align::Inside | Align::Left);
    ai_flex.fixed(&input_label, 24);
    let ai_input_buffer = TextBuffer::default();
    let mut ai_input = TextDisplay::default();
    ai_input.set_buffer(ai_input_buffer.clone());
    ai_input.set_text_size(DEFAULT_FONT_SIZE);
    let mut ai_button = Button::default().with_label("Summarize / Explain Content Above");
    ai_flex.fixed(&ai_button, 32);
    let output_label = Frame::default()
        .with_label("AI Response:")
        .with_align(Align::Inside | Align::Left);
    ai_flex.fixed(&output_label, 24);
    let ai_output_buffer = TextBuffer::default();
    let mut ai_output = TextDisplay::default();
    ai_output.set_buffer(ai_output_buffer.clone());
    ai_output.set_text_size(DEFAULT_FONT_SIZE);
    ai_flex.end();
    ai_tab.resizable(&ai_flex);
    ai_tab.end();

    ai_button.emit(sender, Message::AiGenerate);

    tabs.end();
    tabs.auto_layout();

    let mut status = Frame::default().with_align(Align::Inside | Align::Left);
    flex.fixed(&status, STATUS_HEIGHT);
    status.set_label("");

    flex.end();
    window.end();
    window.resizable(&flex);
    window.show();

    // Keystrokes feed the debounce through the channel.
    {
        let s = sender;
        let mut change_buffer = buffer.clone();
        change_buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::EditorChanged);
            }
        });
    }

    // Closing the window goes through the same quit path as File/Quit.
    window.set_callback({
        let s = sender;
        move |_| s.send(Message::FileQuit)
    });

    let mut state = AppState::new(
        UiParts {
            window,
            menu,
            flex,
            search_row,
            search_input,
            tabs,
            ai_tab,
            editor,
            buffer,
            preview,
            ai_input,
            ai_input_buffer,
            ai_output,
            ai_output_buffer,
            status,
        },
        sender,
        sheets,
        syntaxes,
        DEFAULT_FONT_SIZE,
    );

    state.apply_current_theme();
    state.update_window_title();
    // Initial empty preview
    state.update_preview();

    while fltk_app.wait() {
        if let Some(message) = receiver.recv() {
            match message {
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit => {
                    if state.confirm_quit() {
                        app::quit();
                    }
                }
                Message::ToggleSearchBar => state.toggle_search_bar(),
                Message::FindNext => state.find_next(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::FontIncrease => state.adjust_font_size(2),
                Message::FontDecrease => state.adjust_font_size(-2),
                Message::ExportHtml => state.export_html(),
                Message::ExportPdf => state.export_pdf(),
                Message::AiPrepare => state.prepare_ai(),
                Message::AiGenerate => state.run_ai(),
                Message::EditorChanged => state.on_editor_changed(),
                Message::PreviewTick(generation) => state.preview_tick(generation),
                Message::ClearStatus(generation) => state.expire_status(generation),
            }
        }
    }
}
