//! Platform-specific configuration

/// Submit shortcut display for the status bar help text
/// Ctrl+S works on all platforms (Cmd+S is not interceptable in most
/// terminal emulators)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Quit hint display (double Ctrl+C)
pub const QUIT_HINT: &str = "^C^C:quit";
