//! System clipboard access for copying recipes as text
//!
//! A fresh `arboard::Clipboard` is opened per copy. It fails on headless
//! Linux without a display server, which callers report with a toast.

use anyhow::{Context, Result};
use arboard::Clipboard;

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text.to_owned())
        .context("Failed to set clipboard text")
}
