//! Registry-entry template and placeholder substitution.
//!
//! The template is the body of an Inno Setup `[Registry]` block for one file
//! extension: file type registration, default icon, open command, and the
//! SupportedTypes/OpenWithProgIds shell entries. `{#MyAppExeName}` and
//! `{app}` are Inno Setup constants and pass through untouched; only the two
//! placeholder tokens are substituted here.
//!
//! Rendering is plain substring replacement, so outside the substitution
//! sites the emitted bytes match the template exactly (the doubled quotes in
//! the open-command line are Inno Setup's escaped quotes, not ours, and the
//! stray double spaces in the last two lines are part of the shipped
//! installer script).

/// Replaced with the extension exactly as given.
pub const EXTENSION_TOKEN: &str = "[EXTENSION]";

/// Replaced with the ASCII-uppercase form of the extension.
pub const NAME_TOKEN: &str = "[NAME]";

/// One extension's worth of `[Registry]` entries, newline-terminated.
pub const ENTRY_TEMPLATE: &str = r#"Root: HKCR; Subkey: "{#MyAppExeName}.[EXTENSION]"; Flags: uninsdeletekey
Root: HKCR; Subkey: "{#MyAppExeName}.[EXTENSION]"; ValueType: string; ValueName: ""; ValueData: "[NAME] file"
Root: HKCR; Subkey: "{#MyAppExeName}.[EXTENSION]\DefaultIcon"; Flags: uninsdeletekey
Root: HKCR; Subkey: "{#MyAppExeName}.[EXTENSION]\DefaultIcon"; ValueType: string; ValueName: ""; ValueData: "{app}\bin\{#MyAppExeName}"
Root: HKCR; Subkey: "{#MyAppExeName}.[EXTENSION]\shell\open\command"; Flags: uninsdeletekey
Root: HKCR; Subkey: "{#MyAppExeName}.[EXTENSION]\shell\open\command"; ValueType: string; ValueName: ""; ValueData: """{app}\bin\{#MyAppExeName}"" ""%1"""
Root: HKCR; Subkey: "Applications\{#MyAppExeName}\SupportedTypes"; ValueType: string; ValueName: ".[EXTENSION]"  ; ValueData: ""
Root: HKCR; Subkey: ".[EXTENSION]\OpenWithProgIds"; ValueType: string; ValueName: "{#MyAppExeName}.[EXTENSION]"  ; ValueData: ""
"#;

/// Render one registry-entry block for `extension`.
///
/// Every literal `[EXTENSION]` in `template` is replaced with `extension` as
/// given, then every literal `[NAME]` with its ASCII-uppercase form. No
/// escaping and no partial-match guards; a template without the tokens comes
/// back unchanged.
pub fn render(template: &str, extension: &str) -> String {
    template
        .replace(EXTENSION_TOKEN, extension)
        .replace(NAME_TOKEN, &extension.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_consumes_every_token() {
        let block = render(ENTRY_TEMPLATE, "png");
        assert!(!block.contains(EXTENSION_TOKEN));
        assert!(!block.contains(NAME_TOKEN));
    }

    #[test]
    fn test_block_has_eight_terminated_lines() {
        let block = render(ENTRY_TEMPLATE, "bmp");
        assert_eq!(block.lines().count(), 8);
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn test_png_file_type_line() {
        let block = render(ENTRY_TEMPLATE, "png");
        assert_eq!(
            block.lines().nth(1).unwrap(),
            r#"Root: HKCR; Subkey: "{#MyAppExeName}.png"; ValueType: string; ValueName: ""; ValueData: "PNG file""#
        );
    }

    #[test]
    fn test_jp2_uppercases_digits_untouched() {
        let block = render(ENTRY_TEMPLATE, "jp2");
        assert!(block.contains(r#"ValueData: "JP2 file""#));
        assert!(block.contains(r#"Subkey: "{#MyAppExeName}.jp2""#));
    }

    #[test]
    fn test_gif_block_byte_exact() {
        let expected = r#"Root: HKCR; Subkey: "{#MyAppExeName}.gif"; Flags: uninsdeletekey
Root: HKCR; Subkey: "{#MyAppExeName}.gif"; ValueType: string; ValueName: ""; ValueData: "GIF file"
Root: HKCR; Subkey: "{#MyAppExeName}.gif\DefaultIcon"; Flags: uninsdeletekey
Root: HKCR; Subkey: "{#MyAppExeName}.gif\DefaultIcon"; ValueType: string; ValueName: ""; ValueData: "{app}\bin\{#MyAppExeName}"
Root: HKCR; Subkey: "{#MyAppExeName}.gif\shell\open\command"; Flags: uninsdeletekey
Root: HKCR; Subkey: "{#MyAppExeName}.gif\shell\open\command"; ValueType: string; ValueName: ""; ValueData: """{app}\bin\{#MyAppExeName}"" ""%1"""
Root: HKCR; Subkey: "Applications\{#MyAppExeName}\SupportedTypes"; ValueType: string; ValueName: ".gif"  ; ValueData: ""
Root: HKCR; Subkey: ".gif\OpenWithProgIds"; ValueType: string; ValueName: "{#MyAppExeName}.gif"  ; ValueData: ""
"#;
        assert_eq!(render(ENTRY_TEMPLATE, "gif"), expected);
    }

    #[test]
    fn test_tokenless_template_is_a_no_op() {
        let plain = "Root: HKCR; Flags: uninsdeletekey\n";
        assert_eq!(render(plain, "png"), plain);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(ENTRY_TEMPLATE, "webp"), render(ENTRY_TEMPLATE, "webp"));
    }
}
