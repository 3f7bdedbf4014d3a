//! simple-calc: four-function running-total calculator
//!
//! ## Usage
//!
//! ```bash
//! simple-calc                          # Interactive keypad
//! simple-calc tui --scrollback 200     # Keep 200 scrollback lines
//! simple-calc eval "5+3="              # Print the result of a key sequence
//! simple-calc eval "9+2/" --format json
//! ```

use std::io::{self, Stdout};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use simple_calculator::{
    core::CalculatorEngine,
    logging::{self, LogTarget},
    output::EvalReport,
    tui::{keypad_area, render, CalculatorApp, InputHandler},
    AppConfig, Cli, CliResult, Commands, EvalArgs,
};
use tracing::{info, warn};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);

    match cli.command {
        Some(Commands::Eval(args)) => {
            logging::init(&config, LogTarget::for_mode(&config, false))?;
            run_eval(&config, &args)
        }
        Some(Commands::Tui(_)) | None => {
            logging::init(&config, LogTarget::for_mode(&config, true))?;
            run_tui(&config)
        }
    }
}

fn run_eval(config: &AppConfig, args: &EvalArgs) -> CliResult<()> {
    let report = EvalReport::run(&args.keys, config.scrollback_capacity);
    println!("{}", report.render(args.format)?);
    Ok(())
}

fn run_tui(config: &AppConfig) -> CliResult<()> {
    info!(scrollback = config.scrollback_capacity, "starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            // Raw mode is already on; undo it before reporting the setup error
            if let Err(restore_err) = restore_terminal() {
                warn!(%restore_err, "terminal restore failed");
            }
            return Err(err.into());
        }
    };

    let mut app =
        CalculatorApp::with_engine(CalculatorEngine::with_scrollback_capacity(config.scrollback_capacity));
    let result = run_app(&mut terminal, &mut app);

    restore_terminal()?;
    terminal.show_cursor()?;

    info!(
        lines = app.engine().scrollback().len(),
        "terminal UI closed"
    );
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> CliResult<()> {
    let input_handler = InputHandler::new();
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            render(app, f);
        })?;

        match event::read()? {
            Event::Key(key) => app.apply(input_handler.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                // Errors land in the app's last_error for the status line
                app.click(keypad_area(area), column, row);
            }
            _ => {}
        }
    }

    Ok(())
}
