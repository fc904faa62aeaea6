use colored::Colorize;
use interfaces::{run_section, DemoConfig, DemoError, Section};
use std::io::{self, Write};
use std::process;

fn run_with_banners(config: &DemoConfig) -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for section in Section::ALL {
        // Banners go to stderr so stdout stays the plain demo lines
        eprintln!("{}", format!("== {} ==", section.title()).bold().cyan());
        run_section(section, &mut out, config)?;
        out.flush()?;
    }
    Ok(())
}

fn main() {
    let config = DemoConfig::default();
    if let Err(err) = run_with_banners(&config) {
        eprintln!("{} {}", "error:".bold().red(), err);
        process::exit(1);
    }
}
