use std::io::BufRead;
use std::process;

use clap::{CommandFactory, Parser};
use i3_instant_layout::common::log;
use i3_instant_layout::driver;
use i3_instant_layout::layout_engine::Registry;

#[derive(Parser)]
#[command(name = "i3-instant-layout")]
#[command(about = "Apply ready-made layouts to the current i3 workspace, \
based on the numerical position of the windows")]
#[command(after_help = "To integrate into i3, add this to your i3/config:

    bindsym $mod+Escape exec \"i3-instant-layout --list | rofi -dmenu -i | i3-instant-layout -\"
")]
struct Cli {
    /// Layout name or alias to apply; use '-' to read it from stdin
    layout: Option<String>,

    /// List available layouts (and their aliases), most used first
    #[arg(long)]
    list: bool,

    /// Print detailed information about every available layout
    #[arg(long)]
    desc: bool,

    /// Print the generated append_layout JSON instead of applying it
    #[arg(long)]
    dry_run: bool,
}

fn print_descriptions(registry: &Registry) {
    for descriptor in registry.iter() {
        println!("Layout: {}", descriptor.name);
        println!("Aliases: {:?}", descriptor.aliases);
        for line in descriptor.description.lines() {
            println!("\t{line}");
        }
        println!();
        println!("{}", "-".repeat(80));
        println!();
    }
}

/// The layout token: either the positional argument or, for '-', the first
/// line of stdin (the rofi handoff). Returns `None` for an empty stdin
/// token, e.g. a cancelled rofi prompt.
fn resolve_token(raw: &str) -> anyhow::Result<Option<String>> {
    let raw = if raw == "-" {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        line
    } else {
        raw.to_string()
    };
    // only the first whitespace-delimited word counts
    Ok(raw.split_whitespace().next().map(str::to_string))
}

fn main() {
    sigpipe::reset();
    log::init();
    let cli = Cli::parse();
    let registry = Registry::builtin();

    if cli.list {
        for line in driver::list_layouts() {
            println!("{line}");
        }
        return;
    }
    if cli.desc {
        print_descriptions(registry);
        return;
    }

    let Some(raw) = cli.layout.as_deref() else {
        let _ = Cli::command().print_help();
        return;
    };

    let token = match resolve_token(raw) {
        Ok(Some(token)) => token,
        Ok(None) => return,
        Err(err) => {
            eprintln!("i3-instant-layout: {err:#}");
            process::exit(1);
        }
    };

    let Some(descriptor) = registry.resolve(&token) else {
        eprintln!("could not find the requested layout: '{token}'");
        process::exit(1);
    };

    if let Err(err) = driver::apply_layout(descriptor, cli.dry_run) {
        eprintln!("i3-instant-layout: {err:#}");
        process::exit(1);
    }
    driver::record_usage(&token);
}
