//! Clipboard support for the TUI.
//!
//! Used by the map view to hand a marker's link to the user: a terminal
//! cannot open a browser tab, so "open link" becomes "copy link". Only copy
//! is needed; rqlens never pastes.

use arboard::Clipboard;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Mutex;

/// Global clipboard instance wrapped in a mutex for thread safety.
static CLIPBOARD: Mutex<Option<Clipboard>> = Mutex::new(None);

/// Initializes the clipboard. Non-fatal on failure: copy falls back to
/// spawning a platform clipboard command.
pub fn init() -> Result<(), ClipboardError> {
    let clipboard = Clipboard::new().map_err(|e| ClipboardError::Init(e.to_string()))?;
    let mut guard = CLIPBOARD.lock().map_err(|_| ClipboardError::Lock)?;
    *guard = Some(clipboard);
    Ok(())
}

/// Copies text to the clipboard.
///
/// Prefers arboard when initialized; otherwise tries the platform copy
/// command (`pbcopy` on macOS, `xclip` then `xsel` on Linux).
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    if copy_arboard(text).is_ok() {
        return Ok(());
    }
    copy_command(text)
}

fn copy_arboard(text: &str) -> Result<(), ClipboardError> {
    let mut guard = CLIPBOARD.lock().map_err(|_| ClipboardError::Lock)?;
    let clipboard = guard.as_mut().ok_or(ClipboardError::NotInitialized)?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Copy(e.to_string()))
}

fn copy_command(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "macos")]
    let candidates: &[(&str, &[&str])] = &[("pbcopy", &[])];
    #[cfg(target_os = "linux")]
    let candidates: &[(&str, &[&str])] = &[
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    let candidates: &[(&str, &[&str])] = &[];

    for (cmd, args) in candidates {
        if let Ok(mut child) = Command::new(cmd)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            if let Some(mut stdin) = child.stdin.take() {
                if stdin.write_all(text.as_bytes()).is_err() {
                    continue;
                }
            }
            if child.wait().map(|s| s.success()).unwrap_or(false) {
                return Ok(());
            }
        }
    }

    Err(ClipboardError::Copy(
        "no clipboard backend available".to_string(),
    ))
}

/// Clipboard operation errors.
#[derive(Debug, Clone)]
pub enum ClipboardError {
    /// Failed to initialize clipboard.
    Init(String),
    /// Failed to acquire lock.
    Lock,
    /// Clipboard not initialized.
    NotInitialized,
    /// Failed to copy to clipboard.
    Copy(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init(e) => write!(f, "Failed to initialize clipboard: {e}"),
            Self::Lock => write!(f, "Failed to acquire clipboard lock"),
            Self::NotInitialized => write!(f, "Clipboard not initialized"),
            Self::Copy(e) => write!(f, "Failed to copy to clipboard: {e}"),
        }
    }
}

impl std::error::Error for ClipboardError {}
