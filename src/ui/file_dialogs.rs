use fltk::dialog;

pub const MARKDOWN_FILTER: &str = "*.{md,markdown,mdown}";
pub const HTML_FILTER: &str = "*.{html,htm}";

pub fn native_open_dialog(title: &str, filter: &str) -> Option<String> {
    dialog::file_chooser(title, filter, ".", false)
}

/// `default` is the preselected file name shown in the chooser.
pub fn native_save_dialog(title: &str, filter: &str, default: &str) -> Option<String> {
    dialog::file_chooser(title, filter, default, false)
}
