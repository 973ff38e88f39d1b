//! ANSI styling for the help screen and error messages.
use clap::ValueEnum;
use once_cell::sync::Lazy;

/// When to color output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color if standard output supports it
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct StyleSheet {
    app_start: &'static str,
    item_start: &'static str,
    title_start: &'static str,
    end: &'static str,
}

impl StyleSheet {
    pub(crate) fn app_name(&self, s: &str) -> String {
        format!("{}{}{}", self.app_start, s, self.end)
    }
    pub(crate) fn item(&self, s: &str) -> String {
        format!("{}{}{}", self.item_start, s, self.end)
    }
    pub(crate) fn title(&self, s: &str) -> String {
        format!("{}{}{}", self.title_start, s, self.end)
    }
}

const ESC: u8 = b'\x1B';
const GREEN: &str = "\x1B[32m";
const BOLD_GREEN: &str = "\x1B[32;1m";
const YELLOW: &str = "\x1B[33m";
const RESET: &str = "\x1B[m";
const ALWAYS: StyleSheet =
    StyleSheet { app_start: BOLD_GREEN, item_start: GREEN, title_start: YELLOW, end: RESET };
const NEVER: StyleSheet = StyleSheet { app_start: "", item_start: "", title_start: "", end: "" };
static AUTO: Lazy<StyleSheet> = Lazy::new(|| {
    use enable_ansi_support::enable_ansi_support;
    use supports_color::Stream;
    let use_color = enable_ansi_support().is_ok() && supports_color::on(Stream::Stdout).is_some();
    if use_color {
        ALWAYS
    } else {
        NEVER
    }
});

pub(crate) fn colored(cc: ColorChoice) -> &'static StyleSheet {
    match cc {
        ColorChoice::Always => &ALWAYS,
        ColorChoice::Never => &NEVER,
        ColorChoice::Auto => Lazy::force(&AUTO),
    }
}

/// The number of columns `s` takes up on screen, not counting the escape
/// sequences added by a `StyleSheet`.
pub(crate) fn display_width(s: &str) -> usize {
    use bstr::ByteSlice;
    let s = s.as_bytes();
    if s.len() < GREEN.len() + RESET.len() {
        return s.len();
    }
    if s[0] == ESC && s[1] == b'[' && s.ends_with_str(RESET) {
        match s.find_byte(b'm') {
            Some(m) => s.len() - (m + 1 + RESET.len()),
            None => s.len(),
        }
    } else {
        s.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn styling_does_not_change_display_width() {
        let contents = "abc";
        for choice in [ALWAYS, NEVER] {
            assert_eq!(display_width(&choice.app_name(contents)), contents.len());
            assert_eq!(display_width(&choice.item(contents)), contents.len());
            assert_eq!(display_width(&choice.title(contents)), contents.len());
        }
    }

    #[test]
    fn never_adds_no_escapes() {
        let sheet = colored(ColorChoice::Never);
        assert_eq!(sheet.title("Error:"), "Error:");
        assert!(colored(ColorChoice::Always).title("Error:").starts_with(YELLOW));
    }
}
