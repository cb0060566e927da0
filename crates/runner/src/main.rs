use alien_clock_runner::{ClockConfig, ClockRunner};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

fn print_help() {
    eprintln!(
        r#"Alien Clock - terminal clock for the 18-month alien calendar

USAGE:
    alien-clock [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

KEYS:
    S                   Set the current alien time
    A                   Set an alarm, in alien minutes from now
    C                   Clear the alarm
    Q, Ctrl-C           Quit

    Prompt answers are typed and confirmed with Enter; Esc cancels.

ENVIRONMENT VARIABLES:
    ALIEN_CLOCK_TICK_MS      Real milliseconds per alien second (default: 500)
    ALIEN_CLOCK_MAX_TICKS    Exit after this many ticks
    RUST_LOG                 Log level filter (default: warn)

EXAMPLES:
    # Run with defaults, starting at the epoch
    alien-clock

    # Run with config file
    alien-clock --config clock.json

    # Run ten times faster
    ALIEN_CLOCK_TICK_MS=50 alien-clock
"#
    );
}

/// Raw mode and the alternate screen for as long as the clock runs
struct Terminal;

impl Terminal {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(std::io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            ClockConfig::from_file(&path)?
        }
        None => {
            log::info!("Using default configuration");
            ClockConfig::default()
        }
    }
    .with_env_overrides()?;
    config.validate()?;

    let summary = {
        let _terminal = Terminal::enter()?;
        ClockRunner::new(config)
            .run(EventStream::new(), std::io::stdout())
            .await?
    };

    log::info!(
        "Stopped at {} after {} alien seconds ({:?})",
        summary.final_time,
        summary.clock_ticks,
        summary.stop_reason
    );

    Ok(())
}
