use fltk::{
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextDisplay, TextEditor},
    window::Window,
};

/// Borrowed widgets recolored on a theme change.
pub struct ThemeTargets<'a> {
    pub editor: &'a mut TextEditor,
    pub preview: &'a mut HelpView,
    pub ai_input: &'a mut TextDisplay,
    pub ai_output: &'a mut TextDisplay,
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub status: &'a mut Frame,
}

pub fn apply_theme(t: &mut ThemeTargets, is_dark: bool) {
    if is_dark {
        // Dark mode colors
        t.editor.set_color(Color::from_rgb(43, 43, 43));
        t.editor.set_text_color(Color::from_rgb(220, 220, 220));
        t.editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        t.editor.set_selection_color(Color::from_rgb(70, 70, 100));
        for pane in [&mut *t.ai_input, &mut *t.ai_output] {
            pane.set_color(Color::from_rgb(43, 43, 43));
            pane.set_text_color(Color::from_rgb(220, 220, 220));
        }
        t.preview.set_color(Color::from_rgb(43, 43, 43));
        t.window.set_color(Color::from_rgb(25, 25, 25));
        t.window.set_label_color(Color::from_rgb(220, 220, 220));
        t.menu.set_color(Color::from_rgb(35, 35, 35));
        t.menu.set_text_color(Color::from_rgb(220, 220, 220));
        t.menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        t.status.set_label_color(Color::from_rgb(180, 180, 180));
    } else {
        // Light mode colors
        t.editor.set_color(Color::from_rgb(253, 253, 253));
        t.editor.set_text_color(Color::from_rgb(51, 51, 51));
        t.editor.set_cursor_color(Color::Black);
        t.editor.set_selection_color(Color::from_rgb(173, 216, 230));
        for pane in [&mut *t.ai_input, &mut *t.ai_output] {
            pane.set_color(Color::from_rgb(253, 253, 253));
            pane.set_text_color(Color::from_rgb(51, 51, 51));
        }
        t.preview.set_color(Color::White);
        t.window.set_color(Color::from_rgb(240, 240, 240));
        t.window.set_label_color(Color::Black);
        t.menu.set_color(Color::from_rgb(240, 240, 240));
        t.menu.set_text_color(Color::Black);
        t.menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        t.status.set_label_color(Color::from_rgb(80, 80, 80));
    }

    t.editor.redraw();
    t.preview.redraw();
    t.ai_input.redraw();
    t.ai_output.redraw();
    t.window.redraw();
    t.menu.redraw();
}
