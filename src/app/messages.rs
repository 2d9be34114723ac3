/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,

    // Edit
    ToggleSearchBar,
    FindNext,

    // View
    ToggleDarkMode,
    FontIncrease,
    FontDecrease,

    // Export
    ExportHtml,
    ExportPdf,

    // AI assistant
    AiPrepare,
    AiGenerate,

    // Render pipeline
    EditorChanged,
    /// Debounce timer fired. Carries the generation it was scheduled for;
    /// stale generations are ignored.
    PreviewTick(u64),

    // Status line
    /// Status display timer elapsed. Carries the status generation it was
    /// armed for; a timer from an earlier message must not clear a newer one.
    ClearStatus(u64),
}
