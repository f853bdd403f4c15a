//! Terminal rendering for markdown output
//!
//! Uses termimad for rich display with a plain-text fallback for pipes and
//! `--no-color`.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.table.set_fg(Color::Grey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        // Table rows only lay out when rendered together
        let mut table = String::new();
        for line in markdown.lines() {
            if line.starts_with('|') {
                table.push_str(line);
                table.push('\n');
                continue;
            }
            self.flush_table(&mut table);

            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        self.flush_table(&mut table);

        Ok(())
    }

    fn flush_table(&self, table: &mut String) {
        if !table.is_empty() {
            self.skin.print_text(table.as_str());
            table.clear();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
