use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use marketer_core::{update, AppState, Effect, Msg};
use marketer_logging::{marketer_debug, marketer_info};

use super::args::CliArgs;
use super::effects::EffectRunner;
use super::ui::commands::{self, Command, HELP};
use super::ui::render::render;
use super::ui::toasts::ToastBoard;

const TICK_INTERVAL: Duration = Duration::from_millis(250);
const PROMPT: &str = "> ";

/// Everything the dispatch loop reacts to.
pub enum AppEvent {
    Core(Msg),
    Line(String),
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_app(args: &CliArgs) -> anyhow::Result<()> {
    let (app_tx, app_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(&args.service_settings(), app_tx.clone())?;

    spawn_input_reader(app_tx.clone());
    // Background tick to expire notifications.
    thread::spawn(move || {
        while app_tx.send(AppEvent::Core(Msg::Tick)).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let mut app = App::new(effects, io::stdout());
    app.redraw()?;
    app.prompt()?;
    while let Ok(event) = app_rx.recv() {
        if app.handle(event)? == Flow::Quit {
            break;
        }
    }
    marketer_info!("Exiting");
    Ok(())
}

fn spawn_input_reader(app_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if app_tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = app_tx.send(AppEvent::InputClosed);
    });
}

struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    toasts: ToastBoard,
    out: W,
}

impl<W: Write> App<W> {
    fn new(effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            effects,
            toasts: ToastBoard::new(),
            out,
        }
    }

    fn handle(&mut self, event: AppEvent) -> io::Result<Flow> {
        match event {
            AppEvent::Core(msg) => {
                let expired = matches!(msg, Msg::Tick) && self.toasts.prune(Instant::now());
                let redrawn = self.dispatch(msg)?;
                if expired && !redrawn {
                    self.redraw()?;
                }
                // The page was printed over the prompt.
                if expired || redrawn {
                    self.prompt()?;
                }
            }
            AppEvent::Line(line) => {
                let flow = self.handle_line(&line)?;
                if flow == Flow::Quit {
                    return Ok(flow);
                }
                self.prompt()?;
            }
            AppEvent::InputClosed => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let command = match commands::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                writeln!(self.out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        marketer_debug!("Command {:?}", command);

        match command {
            Command::SetUrl(url) => {
                self.dispatch(Msg::InputChanged(url))?;
            }
            Command::Scan(url) => {
                if let Some(url) = url {
                    self.dispatch(Msg::InputChanged(url))?;
                }
                self.dispatch(Msg::ScanSubmitted)?;
            }
            Command::CopyKeyword(index) => match self.state.keywords().get(index).cloned() {
                Some(text) => {
                    self.dispatch(Msg::CopyRequested(text))?;
                }
                None => writeln!(self.out, "No keyword {}", index + 1)?,
            },
            Command::CopySentence(slot) => match self.state.sentences().get(slot).cloned() {
                Some(text) => {
                    self.dispatch(Msg::CopyRequested(text))?;
                }
                None => writeln!(self.out, "No sentence {}", slot + 1)?,
            },
            Command::Regenerate(slot) => {
                if slot < self.state.sentences().len() {
                    self.dispatch(Msg::RegenerateClicked { slot })?;
                } else {
                    writeln!(self.out, "No sentence {}", slot + 1)?;
                }
            }
            Command::Show => self.redraw()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Applies `msg` and runs its effects. Returns whether the page was redrawn.
    fn dispatch(&mut self, msg: Msg) -> io::Result<bool> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let mut notified = false;
        for effect in effects {
            match effect {
                Effect::Notify(notification) => {
                    self.toasts.push(notification, Instant::now());
                    notified = true;
                }
                other => self.effects.run(other),
            }
        }

        let redraw = was_dirty || notified;
        if redraw {
            self.redraw()?;
        }
        Ok(redraw)
    }

    fn redraw(&mut self) -> io::Result<()> {
        let page = render(&self.state.view(), self.toasts.active());
        write!(self.out, "\n{page}")?;
        self.out.flush()
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()
    }
}
