/// Copy `s` to the system clipboard.
///
/// Thin wrapper around the `arboard` crate, used by `--clipboard` so the
/// emitted registry entries can be pasted straight into the `[Registry]`
/// section of the installer's `.iss` file. On some platforms or in headless
/// CI environments clipboard initialization may fail; callers should treat
/// errors as non-fatal (the CLI prints a warning on failure).
///
/// Returns `Ok(())` on success or `Err(String)` describing the failure.
pub fn copy_to_clipboard(s: &str) -> Result<(), String> {
    let mut ctx = arboard::Clipboard::new().map_err(|e| format!("clipboard init: {}", e))?;
    ctx.set_text(s.to_owned())
        .map_err(|e| format!("clipboard set: {}", e))
}
