use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    time::{Duration, Instant},
};
use stepview_config::Config;
use stepview_engine::ReplayScript;

mod app;
mod lines;

use app::App;

const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let script_path = if args.len() == 2 {
        PathBuf::from(&args[1])
    } else if args.len() == 1 {
        match config.script_path.clone() {
            Some(path) => path,
            None => {
                eprintln!("Error: No replay script provided and none configured");
                eprintln!("Usage: {} <script.json>", args[0]);
                eprintln!(
                    "Or set script_path in the config file at {}",
                    config_path.display()
                );
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [script.json]", args[0]);
        process::exit(1);
    };

    let script = match ReplayScript::load(&script_path) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(script, &config, Instant::now());

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code, Instant::now())
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    if app.visible {
        let content = Paragraph::new(lines::view_lines(&app.view()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        app.heading.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .title_bottom(Line::from(" d: minimize ").right_aligned()),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(content, chunks[0]);
    } else {
        let hint = Paragraph::new(Line::from("Minimized - press any key to show the sequence"))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, chunks[0]);
    }

    let (played, total) = app.progress();
    let auto = if app.auto_advance { "on" } else { "off" };
    let help_text = Line::from(vec![
        Span::raw(format!("frame {played}/{total} | auto: {auto} | ")),
        Span::raw("n/Space: Next | a: Toggle auto | d/Esc: Minimize | q: Quit"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[1]);
}
