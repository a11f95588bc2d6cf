use anyhow::Result;
use careerconnect::Post;
use clap::ValueEnum;
use colored::{Color, Colorize};
use comfy_table::{Attribute, Cell, Color as TableColor, Table};
use serde::Serialize;

use crate::theme::{ICONS, THEME};

/// Output formats supported by every command.
#[derive(Clone, Debug, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    /// Formatted table output (default)
    #[default]
    Table,
    /// JSON output for scripting
    Json,
    /// Compact single-line output
    Compact,
}

/// Options shared by every command.
#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// Formats and prints everything the binary shows.
pub struct OutputManager {
    pub options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    pub fn is_json(&self) -> bool {
        self.options.output_format == OutputFormat::Json
    }

    pub fn is_compact(&self) -> bool {
        self.options.output_format == OutputFormat::Compact
    }

    fn icon_line(&self, icon: &str, color: Color, message: &str) -> String {
        if self.options.no_color {
            format!("{icon} {message}")
        } else {
            format!("{} {}", icon.color(color), message.color(color))
        }
    }

    /// Print any serializable value as pretty JSON.
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        if !self.options.quiet {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(())
    }

    pub fn success(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", self.icon_line(ICONS.success, THEME.success, message));
        }
    }

    /// Errors go to stderr and ignore quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.icon_line(ICONS.error, THEME.error, message));
    }

    pub fn warning(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", self.icon_line(ICONS.warning, THEME.warning, message));
        }
    }

    pub fn info(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", self.icon_line(ICONS.info, THEME.info, message));
        }
    }

    /// Diagnostics shown only with `--verbose`, on stderr.
    pub fn verbose(&self, message: &str) {
        if self.options.verbose && !self.options.quiet {
            eprintln!("{}", self.icon_line(ICONS.arrow, THEME.muted, message));
        }
    }

    pub fn heading(&self, text: &str) {
        if self.options.quiet {
            return;
        }
        if self.options.no_color {
            println!("\n{text}\n{}", "=".repeat(text.len()));
        } else {
            println!("\n{}", text.color(THEME.primary).bold());
        }
    }

    pub fn subheading(&self, text: &str) {
        if self.options.quiet {
            return;
        }
        if self.options.no_color {
            println!("\n{text}\n{}", "-".repeat(text.len()));
        } else {
            println!("\n{}", text.color(THEME.secondary).underline());
        }
    }

    pub fn key_value(&self, key: &str, value: &str) {
        if self.options.quiet {
            return;
        }
        if self.options.no_color {
            println!("{key}: {value}");
        } else {
            println!("{}: {}", key.color(THEME.key).bold(), value.color(THEME.value));
        }
    }

    pub fn bullet(&self, text: &str) {
        if self.options.quiet {
            return;
        }
        if self.options.no_color {
            println!("  {} {text}", ICONS.bullet);
        } else {
            println!("  {} {text}", ICONS.bullet.color(THEME.muted));
        }
    }

    /// Render one post: content line, attribution with like tally, then
    /// comments in arrival order.
    pub fn post_block(&self, post: &Post) {
        if self.options.quiet {
            return;
        }
        let attribution = format!("{} ({})", post.author.display_name, post.author.role_label);
        if self.options.no_color {
            println!("  #{} \"{}\"", post.id, post.content);
            println!("     - {attribution} | {} {}", ICONS.star, post.likes);
            for comment in &post.comments {
                println!("       {} {}: {}", ICONS.bullet, comment.author_name, comment.content);
            }
        } else {
            println!(
                "  {} {}",
                format!("#{}", post.id).color(THEME.highlight).bold(),
                format!("\"{}\"", post.content).color(THEME.value)
            );
            println!(
                "     {} {}",
                attribution.color(THEME.muted),
                format!("{} {}", ICONS.star, post.likes).color(THEME.warning)
            );
            for comment in &post.comments {
                println!(
                    "       {} {} {}",
                    ICONS.bullet.color(THEME.muted),
                    format!("{}:", comment.author_name).color(THEME.key),
                    comment.content.color(THEME.value)
                );
            }
        }
    }

    pub fn create_table(&self) -> Table {
        let mut table = Table::new();
        let preset = if self.options.no_color {
            comfy_table::presets::ASCII_FULL
        } else {
            comfy_table::presets::UTF8_FULL_CONDENSED
        };
        table.load_preset(preset);
        table
    }

    pub fn add_table_header(&self, table: &mut Table, headers: Vec<&str>) {
        let cells = headers.into_iter().map(|header| {
            let cell = Cell::new(header).add_attribute(Attribute::Bold);
            if self.options.no_color {
                cell
            } else {
                cell.fg(TableColor::Cyan)
            }
        });
        table.set_header(cells);
    }
}
