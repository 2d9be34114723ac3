pub mod file_dialogs;
pub mod menu;
pub mod theme;
