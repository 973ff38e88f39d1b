use crate::style::{colored, display_width, ColorChoice, StyleSheet};
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use terminal_size::{terminal_size, Height, Width};
use textwrap::{self, wrap};

enum HelpItem<'a> {
    Usage(&'a str),
    Paragraph(&'a str),
    Section(Section<'a>),
}
struct Section<'a> {
    title: &'a str,
    entries: Vec<Entry<'a>>,
}
struct Entry<'a> {
    item: &'a str,
    caption: &'a str,
}

pub(crate) fn version(style: &StyleSheet) -> String {
    let version = std::env!("CARGO_PKG_VERSION");
    format!("{} {version}", style.app_name("setops"))
}

pub(crate) fn print(color_choice: ColorChoice) -> Result<()> {
    let style = colored(color_choice);
    let mut stdout = std::io::stdout().lock();
    match fallable_print(&mut stdout, style, C.line_width) {
        Err(e) => bail!("failed printing to stdout: {e}"),
        Ok(()) => Ok(()),
    }
}

fn fallable_print(
    stdout: &mut dyn std::io::Write,
    style: &StyleSheet,
    line_width: usize,
) -> std::io::Result<()> {
    let input = include_str!("help.txt");
    let wrap_options = textwrap::Options::new(line_width);
    writeln!(stdout, "{}", version(style))?;
    for help_item in parse(input) {
        match help_item {
            HelpItem::Paragraph(text) => {
                for line in wrap(text, &wrap_options) {
                    writeln!(stdout, "{line}")?;
                }
            }
            HelpItem::Usage(args) => {
                writeln!(stdout, "{}{}{}", style.title("Usage: "), style.app_name("setops"), args)?;
            }
            HelpItem::Section(s) => {
                writeln!(stdout, "{}", style.title(s.title))?;
                s.print_entries(stdout, style, line_width)?;
            }
        };
    }
    Ok(())
}

fn parse(text: &str) -> Vec<HelpItem<'_>> {
    const USAGE: &str = "Usage: ";
    let mut help = Vec::new();
    let mut lines = text.lines().fuse();
    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix(USAGE) {
            let (_, args) = rest.split_at(rest.find(' ').unwrap_or(rest.len()));
            help.push(HelpItem::Usage(args));
        } else if line.ends_with(':') {
            let title = line;
            let mut entries = Vec::new();
            let result = loop {
                let Some(entry) = lines.next() else { break None };
                let entry = entry.trim_end();
                if entry.is_empty() {
                    break Some(HelpItem::Paragraph(""));
                }
                let (item, caption) = match entry.rfind("  ") {
                    Some(sp_sp) => entry.split_at(sp_sp + 2),
                    None => (entry, ""),
                };
                entries.push(Entry { item, caption });
            };
            help.push(HelpItem::Section(Section { title, entries }));
            if let Some(part) = result {
                help.push(part);
            }
        } else {
            help.push(HelpItem::Paragraph(line));
        }
    }
    help
}

const BLANKS: &str = "                                                        ";

impl<'a> Section<'a> {
    fn print_entries(
        self,
        stdout: &mut dyn std::io::Write,
        style: &StyleSheet,
        line_width: usize,
    ) -> std::io::Result<()> {
        if self.entries.iter().all(|e| e.fits_in(line_width)) {
            for entry in &self.entries {
                writeln!(stdout, "{}{}", style.item(entry.item), entry.caption)?;
            }
            return Ok(());
        }
        // Too narrow: put each caption, indented, on the lines after its item
        let indent = self.next_line_indent();
        let options =
            textwrap::Options::new(line_width).initial_indent(indent).subsequent_indent(indent);
        for entry in &self.entries {
            writeln!(stdout, "{}", style.item(entry.item.trim_end()))?;
            for line in wrap(entry.caption, &options) {
                writeln!(stdout, "{line}")?;
            }
        }
        Ok(())
    }
    fn next_line_indent(&self) -> &'static str {
        let max_indent = self.entries.iter().map(Entry::indented_by).fold(0, std::cmp::Ord::max);
        &BLANKS[..(max_indent + 4).min(BLANKS.len())]
    }
}

impl<'a> Entry<'a> {
    fn fits_in(&self, line_width: usize) -> bool {
        display_width(self.item) + self.caption.len() <= line_width
    }
    fn indented_by(&self) -> usize {
        self.item.len() - self.item.trim_start().len()
    }
}

struct Constants {
    line_width: usize,
}
static C: Lazy<Constants> = Lazy::new(|| {
    fn from_env() -> Option<usize> {
        std::env::var_os("COLUMNS")?.to_str()?.parse::<usize>().ok()
    }
    let line_width = if let Some((Width(width), Height(_))) = terminal_size() {
        width as usize
    } else {
        from_env().unwrap_or(100)
    };
    Constants { line_width }
});
