use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Find...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleSearchBar) });

    // View
    menu.add("View/Toggle Dark Mode", Shortcut::None, MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    menu.add("View/Font Size/Increase", Shortcut::Ctrl | '=', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FontIncrease) });
    menu.add("View/Font Size/Decrease", Shortcut::Ctrl | '-', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FontDecrease) });

    // Export
    menu.add("Export/Export to HTML...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportHtml) });
    menu.add("Export/Export to PDF...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportPdf) });

    // AI Tools
    menu.add("AI Tools/Send Selection to AI Assistant", Shortcut::Ctrl | Shortcut::Shift | 'a', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::AiPrepare) });
}
