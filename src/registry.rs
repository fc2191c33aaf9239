//! Supported-extension list and registry-entry assembly.
//!
//! `SUPPORTED_EXTENSIONS` mirrors the formats the viewer opens; its order is
//! the order blocks appear in the installer script. Assembly renders one
//! block per extension and can join the blocks into the document that goes
//! to stdout, a file, or the clipboard.

use crate::template::{ENTRY_TEMPLATE, render};

/// File extensions the application registers itself for, in emission order.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "bmp", "jpg", "jpeg", "png", "gif", "svg", "webp", "ico", "tga", "tif", "tiff", "jp2",
];

/// Render one registry-entry block per extension, in slice order.
///
/// Extensions must be non-empty ASCII letters/digits; anything else would
/// land unescaped inside the emitted script, so the first offender aborts
/// with `Err`. Duplicates are kept and yield duplicate blocks.
///
/// Returns
/// - `Ok(Vec<String>)` with one newline-terminated block per extension.
/// - `Err(String)` naming the first rejected extension.
pub fn registry_entries(extensions: &[&str]) -> Result<Vec<String>, String> {
    for ext in extensions {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!(
                "invalid extension {:?}: expected ASCII letters and digits",
                ext
            ));
        }
    }
    Ok(extensions
        .iter()
        .map(|ext| render(ENTRY_TEMPLATE, ext))
        .collect())
}

/// Join rendered blocks into the emitted document: each block followed by a
/// blank line, byte-identical to what the stdout path prints.
pub fn section_text(entries: &[String]) -> String {
    let mut text = String::new();
    for block in entries {
        text.push_str(block);
        text.push('\n');
    }
    text
}
