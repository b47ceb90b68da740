//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy/submit shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Generate shortcut display for help text
/// Ctrl+G works on all platforms (Cmd+G also works on macOS)
pub const GENERATE_SHORTCUT: &str = "Ctrl+G";

/// Modify shortcut display
pub const MODIFY_SHORTCUT: &str = "Ctrl+R";

/// Copy-download-link shortcut display
/// - macOS: "Cmd+Y"
/// - Linux/Windows: "Ctrl+Y"
#[cfg(target_os = "macos")]
pub const COPY_LINK_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_LINK_SHORTCUT: &str = "Ctrl+Y";
