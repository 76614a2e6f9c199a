mod app;
mod config;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::AppConfig;
use starrate::{ColorToken, RatingProps, StarDescriptor, StarSize};

#[derive(Parser, Debug)]
#[command(name = "starrate")]
#[command(version)]
#[command(about = "A clickable star rating for the terminal")]
struct Args {
    /// Number of filled stars to start with
    #[arg(long)]
    value: Option<u32>,

    /// Total number of stars
    #[arg(long)]
    star_count: Option<u32>,

    /// Color of filled stars (name or #hex)
    #[arg(long)]
    filled_color: Option<ColorToken>,

    /// Color of empty stars (name or #hex)
    #[arg(long)]
    empty_color: Option<ColorToken>,

    /// Star size class (1x-10x, xs, sm, lg, xl, ...)
    #[arg(long)]
    size: Option<StarSize>,

    /// Print the star descriptors as JSON and exit
    #[arg(short, long)]
    describe: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// CLI flags take precedence over the config file
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(value) = self.value {
            config.value = value;
        }
        if let Some(star_count) = self.star_count {
            config.star_count = star_count;
        }
        if let Some(ref color) = self.filled_color {
            config.filled_color = color.clone();
        }
        if let Some(ref color) = self.empty_color {
            config.empty_color = color.clone();
        }
        if let Some(ref size) = self.size {
            config.size = size.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cli_only = args.describe || args.init_config;

    // Initialize logging
    init_logging(cli_only);

    let config = args.apply(AppConfig::load());
    let props = config.to_props();

    // Handle CLI-only commands
    if args.init_config {
        let path = config.save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if args.describe {
        return print_descriptors(&props);
    }

    // Run TUI
    run_tui(props)
}

/// Log to stderr for one-shot commands, to a file while the TUI owns the screen
fn init_logging(cli_only: bool) {
    let filter = tracing_subscriber::EnvFilter::from_default_env();

    if cli_only {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
        return;
    }

    let log_file = AppConfig::config_path().and_then(|path| {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        open_log_file(dir).map_err(anyhow::Error::from)
    });

    match log_file {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .init();
        }
        // Printed before the alternate screen, so it is still there on exit
        Err(e) => eprintln!("starrate: logging disabled: {}", e),
    }
}

fn open_log_file(dir: &Path) -> io::Result<File> {
    std::fs::create_dir_all(dir)?;
    File::create(dir.join("starrate.log"))
}

/// A descriptor plus the ids and class a host page would expose
#[derive(Serialize)]
struct StarJson<'a> {
    id: String,
    group: String,
    class: String,
    #[serde(flatten)]
    star: &'a StarDescriptor,
}

fn descriptors_json(props: &RatingProps) -> serde_json::Result<serde_json::Value> {
    let stars = props.describe();
    let view: Vec<StarJson> = stars
        .iter()
        .map(|star| StarJson {
            id: star.test_id(),
            group: star.group_id(),
            class: star.class_name(),
            star,
        })
        .collect();

    serde_json::to_value(view)
}

fn print_descriptors(props: &RatingProps) -> Result<()> {
    let stars = descriptors_json(props)?;
    println!("{}", serde_json::to_string_pretty(&stars)?);
    Ok(())
}

fn run_tui(props: RatingProps) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(props);
    tracing::info!(value = app.value(), "Starting starrate");

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if result.is_ok() {
        println!("{}", app.value());
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    _ => app.handle_key(key),
                },
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = ui::rating_area(Rect::new(0, 0, size.width, size.height), app);
                    app.handle_mouse(mouse, area);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["starrate", "--star-count", "3", "--filled-color", "blue"]);
        let config = AppConfig {
            star_count: 7,
            size: "2x".parse().unwrap(),
            ..AppConfig::default()
        };

        let config = args.apply(config);
        assert_eq!(config.star_count, 3);
        assert_eq!(config.filled_color.as_str(), "blue");
        // Absent flags keep the config values
        assert_eq!(config.size.as_str(), "2x");
        assert_eq!(config.empty_color.as_str(), "#bbb");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["starrate"]);
        let config = AppConfig {
            star_count: 7,
            ..AppConfig::default()
        };
        assert_eq!(args.apply(config.clone()), config);
    }

    #[test]
    fn test_invalid_flag_tokens_rejected() {
        assert!(Args::try_parse_from(["starrate", "--size", "huge"]).is_err());
        assert!(Args::try_parse_from(["starrate", "--empty-color", "#12"]).is_err());
    }

    #[test]
    fn test_descriptors_json() {
        let json = descriptors_json(&RatingProps::new(2)).unwrap();
        let stars = json.as_array().unwrap();
        assert_eq!(stars.len(), 5);

        assert_eq!(stars[1]["id"], "star-1");
        assert_eq!(stars[1]["group"], "star-is-filled-1");
        assert_eq!(stars[1]["class"], "fa-1x");
        assert_eq!(stars[1]["color"], "yellow");
        assert_eq!(stars[1]["filled"], true);

        assert_eq!(stars[2]["id"], "star-2");
        assert_eq!(stars[2]["group"], "star-is-filled-0");
        assert_eq!(stars[2]["color"], "#bbb");
        assert_eq!(stars[2]["index"], 2);
        assert_eq!(stars[2]["size"], "1x");
    }

    #[test]
    fn test_log_file_errors_are_reported() {
        let blocker = std::env::temp_dir().join(format!("starrate-log-{}", std::process::id()));
        std::fs::write(&blocker, "").unwrap();

        // A file where the log directory should be
        assert!(open_log_file(&blocker.join("logs")).is_err());

        std::fs::remove_file(&blocker).unwrap();
        assert!(open_log_file(&blocker).is_ok());
        assert!(blocker.join("starrate.log").exists());
        std::fs::remove_dir_all(&blocker).unwrap();
    }
}
