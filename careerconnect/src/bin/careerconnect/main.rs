mod commands;
mod examples;
mod output;
mod prompt;
mod seed;
mod theme;

use anyhow::Result;
use clap::{
    builder::{
        styling::{AnsiColor, Color as ClapColor, Style},
        Styles,
    },
    error::ErrorKind,
    ColorChoice, Command, CommandFactory, FromArgMatches, Parser, Subcommand,
};

use colored::{control, Color as ThemeColor, Colorize};
use std::io::{self, Write as IoWrite};

use commands::{
    demo::handle_demo,
    interactive::{handle_interactive, InteractiveArgs},
};
use examples::{command_examples, ExampleGroup};
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::{ICONS, THEME};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("CAREERCONNECT_SEED_FILE", "TOML file with starter profiles and posts"),
    ("RUST_LOG", "Log filter for diagnostics (e.g. 'careerconnect=debug')"),
];

#[derive(Parser)]
#[command(name = "careerconnect")]
#[command(author = "CareerConnect Team")]
#[command(version = "0.1.0")]
#[command(
    about = "An in-memory professional network simulation for your terminal",
    long_about = r#"An interactive, in-memory professional network simulation:

• Register profiles for students, professionals, engineers, doctors, and artists
• Grow your network through connection requests and approvals
• Publish posts, like and comment, and read your personal news feed
• Everything lives in process memory; closing the session forgets it all

Commands:
  interactive   Menu-driven console session (default)
  demo          Scripted walkthrough of the main features
"#
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn parse_with_styles() -> Self {
        match build_cli_command().try_get_matches() {
            Ok(matches) => Cli::from_arg_matches(&matches).expect("Failed to parse CLI arguments"),
            Err(err) => exit_with_clap_message(err),
        }
    }
}

/// Prints a clap-generated message (help, version, or a usage error) with
/// the binary's blank-line padding, then exits with the matching code.
fn exit_with_clap_message(err: clap::error::Error) -> ! {
    let help = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    let blank = || {
        if help {
            print_blank_line(io::stdout())
        } else {
            print_blank_line(io::stderr())
        }
    };

    let _ = blank();
    if let Err(print_err) = err.print()
        && print_err.kind() != io::ErrorKind::BrokenPipe
    {
        eprintln!("Failed to render usage output: {print_err}");
    }
    let _ = blank();

    std::process::exit(if help { 0 } else { err.exit_code() });
}

fn build_cli_command() -> Command {
    let use_color = detect_color_support();
    let mut command = Cli::command()
        .after_long_help(render_top_level_appendix(use_color))
        .styles(help_styles())
        .color(if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        });
    attach_command_examples(&mut command, use_color);
    command
}

fn attach_command_examples(command: &mut Command, use_color: bool) {
    for example in command_examples() {
        if let Some(subcommand) = command.find_subcommand_mut(example.name) {
            *subcommand = subcommand
                .clone()
                .after_long_help(render_examples(example.groups, use_color));
        }
    }
}

fn render_examples(groups: &[ExampleGroup], use_color: bool) -> String {
    let mut lines = vec![stylize("Examples:", THEME.highlight, true, use_color)];
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("  {}", stylize(group.title, THEME.primary, true, use_color)));
        for command in group.commands {
            lines.push(format!(
                "    {} {}",
                stylize(ICONS.arrow, THEME.secondary, false, use_color),
                stylize(command, THEME.secondary, false, use_color)
            ));
        }
    }
    lines.join("\n") + "\n"
}

fn render_top_level_appendix(use_color: bool) -> String {
    let mut lines = vec![stylize("Environment Variables:", THEME.highlight, true, use_color)];
    for (key, description) in ENVIRONMENT_VARIABLES {
        lines.push(format!(
            "  {}  {}",
            stylize(key, THEME.key, true, use_color),
            stylize(description, THEME.value, false, use_color)
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        stylize("Tip:", THEME.highlight, true, use_color),
        stylize(
            "Use 'careerconnect <command> --help' to view examples for each command.",
            THEME.secondary,
            false,
            use_color
        )
    ));
    lines.join("\n") + "\n"
}

fn print_blank_line(mut writer: impl IoWrite) -> io::Result<()> {
    writer.write_all(b"\n")?;
    writer.flush()
}

fn stylize(text: &str, color: ThemeColor, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let styled = text.color(color);
    if bold {
        styled.bold().to_string()
    } else {
        styled.to_string()
    }
}

fn detect_color_support() -> bool {
    control::ShouldColorize::from_env().should_colorize()
}

fn help_styles() -> Styles {
    Styles::styled()
        .usage(ansi_style(AnsiColor::BrightBlue).bold())
        .header(ansi_style(AnsiColor::Cyan).bold())
        .literal(ansi_style(AnsiColor::Magenta))
        .placeholder(ansi_style(AnsiColor::BrightBlack))
        .valid(ansi_style(AnsiColor::Green))
        .invalid(ansi_style(AnsiColor::Yellow))
        .error(ansi_style(AnsiColor::Red).bold())
}

fn ansi_style(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(ClapColor::Ansi(color)))
}

#[derive(Subcommand)]
enum Commands {
    /// Run the menu-driven console session (default)
    Interactive(InteractiveArgs),

    /// Run the scripted walkthrough of the main features
    Demo,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse_with_styles();

    let _ = print_blank_line(io::stdout());

    match execute(cli) {
        Ok(()) => {
            let _ = print_blank_line(io::stdout());
        }
        Err(err) => {
            eprintln!("Error: {err}");
            let _ = print_blank_line(io::stdout());
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    if cli.no_color {
        control::set_override(false);
    }

    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });

    match cli.command {
        Some(Commands::Interactive(args)) => handle_interactive(args, &output)?,
        Some(Commands::Demo) => handle_demo(&output)?,
        None => handle_interactive(InteractiveArgs::from_env(), &output)?,
    }

    Ok(())
}
