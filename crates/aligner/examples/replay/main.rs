mod fixture;
mod renderer;

use std::time::{Duration, Instant};

use aligner::{ScriptTracker, TranscriptEvent};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use cue_script::ReferenceScript;
use fixture::Fixture;
use ratatui::DefaultTerminal;

#[derive(clap::Parser)]
#[command(name = "replay", about = "Replay a recognizer fixture against its script")]
struct Args {
    #[arg(short, long, default_value_t = Fixture::Gettysburg)]
    fixture: Fixture,

    #[arg(short, long, default_value_t = 400)]
    speed: u64,
}

struct App {
    events: Vec<TranscriptEvent>,
    position: usize,
    paused: bool,
    speed_ms: u64,
    tracker: ScriptTracker,
    script_text: &'static str,
    fixture_name: String,
}

impl App {
    fn new(
        events: Vec<TranscriptEvent>,
        script_text: &'static str,
        speed_ms: u64,
        fixture_name: String,
    ) -> Self {
        Self {
            events,
            position: 0,
            paused: false,
            speed_ms,
            tracker: ScriptTracker::new(ReferenceScript::build(script_text)),
            script_text,
            fixture_name,
        }
    }

    fn total(&self) -> usize {
        self.events.len()
    }

    fn last_event(&self) -> Option<&TranscriptEvent> {
        self.position.checked_sub(1).and_then(|i| self.events.get(i))
    }

    fn seek_to(&mut self, target: usize) {
        let target = target.min(self.total());
        self.tracker = ScriptTracker::new(ReferenceScript::build(self.script_text));
        for event in &self.events[..target] {
            self.tracker.process(event);
        }
        self.position = target;
    }

    fn advance(&mut self) -> bool {
        if self.position >= self.total() {
            return false;
        }
        self.tracker.process(&self.events[self.position]);
        self.position += 1;
        true
    }

    fn is_done(&self) -> bool {
        self.position >= self.total()
    }
}

fn main() {
    use clap::Parser;
    let args = Args::parse();
    let fixture = args.fixture;
    let speed_ms = args.speed;
    let fixture_name = fixture.to_string();

    let events: Vec<TranscriptEvent> = serde_json::from_str(fixture.events_json())
        .expect("fixture must parse as TranscriptEvent[]");

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, events, fixture.script(), speed_ms, fixture_name.clone());
    ratatui::restore();

    match result {
        Ok(app) => {
            println!(
                "Done. Cursor {}/{} after {} events ({} fixture).",
                app.tracker.cursor(),
                app.tracker.script().len(),
                app.total(),
                fixture_name,
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(
    terminal: &mut DefaultTerminal,
    events: Vec<TranscriptEvent>,
    script_text: &'static str,
    speed_ms: u64,
    fixture_name: String,
) -> std::io::Result<App> {
    let mut app = App::new(events, script_text, speed_ms, fixture_name);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &app))?;

        let tick_duration = Duration::from_millis(app.speed_ms);
        let elapsed = last_tick.elapsed();
        let timeout = tick_duration.saturating_sub(elapsed);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => {
                        app.paused = !app.paused;
                        last_tick = Instant::now();
                    }
                    KeyCode::Right => {
                        app.seek_to(app.position + 1);
                    }
                    KeyCode::Left => {
                        app.seek_to(app.position.saturating_sub(1));
                    }
                    KeyCode::Up => {
                        app.speed_ms = app.speed_ms.saturating_sub(50).max(25);
                    }
                    KeyCode::Down => {
                        app.speed_ms += 50;
                    }
                    KeyCode::Home => {
                        app.seek_to(0);
                    }
                    KeyCode::End => {
                        let total = app.total();
                        app.seek_to(total);
                    }
                    _ => {}
                }
            }
        } else if !app.paused {
            if last_tick.elapsed() >= tick_duration {
                app.advance();
                last_tick = Instant::now();

                if app.is_done() {
                    terminal.draw(|frame| renderer::render(frame, &app))?;
                    app.paused = true;
                }
            }
        }
    }

    Ok(app)
}
