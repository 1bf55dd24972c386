use std::fs::File;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::style::{Color as CtColor, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use scroll_shadow::fade::mix;
use scroll_shadow::{
    apply_event_with, shade, Chrome, Orientation, OverflowWatcher, Rgb, ScrollElement,
    ShadowConfig, StyleMap,
};

const SURFACE: Rgb = Rgb::new(24, 24, 32);
const SHADOW: Rgb = Rgb::new(120, 120, 160);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const SHADOW_CELLS: u16 = 3;
const CHROME: Chrome = Chrome::new(0, 1);

/// Raw-mode terminal that restores itself on drop.
struct Screen {
    stdout: Stdout,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("shadow.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let lines: Vec<String> = (0..200)
        .map(|i| format!("{i:>4} | {}", "the quick brown fox jumps over the lazy dog ".repeat(4)))
        .collect();
    let content_width = lines.iter().map(|l| l.len()).max().unwrap_or(0);

    let mut screen = Screen::new()?;
    let (width, height) = terminal::size()?;
    let element = Rc::new(
        ScrollElement::new(f64::from(width), f64::from(height.saturating_sub(CHROME.rows)))
            .with_content(content_width as f64, lines.len() as f64),
    );

    let mut config = ShadowConfig::default()
        .orientation(Orientation::Both)
        .size(f64::from(SHADOW_CELLS));
    let mut watcher = OverflowWatcher::new(config);
    watcher.mount(&element);

    loop {
        draw(&mut screen.stdout, &element, &watcher, &lines)?;

        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        for ev in &events {
            if let CrosstermEvent::Key(key) = ev {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('t') => {
                        config = config.enabled(!config.enabled);
                        watcher.update(config);
                    }
                    KeyCode::Char('+') => {
                        config = config.offset(config.offset + 1.0);
                        watcher.update(config);
                    }
                    KeyCode::Char('-') => {
                        config = config.offset(config.offset - 1.0);
                        watcher.update(config);
                    }
                    _ => {}
                }
            }
            apply_event_with(&element, ev, CHROME);
        }

        watcher.tick();
    }
}

fn draw(
    out: &mut Stdout,
    element: &ScrollElement,
    watcher: &OverflowWatcher<ScrollElement>,
    lines: &[String],
) -> io::Result<()> {
    let (vw, vh) = element.viewport();
    let (ox, oy) = element.scroll_offset();
    let viewport = (vw as u16, vh as u16);
    let state = watcher.state();

    for y in 0..viewport.1 {
        queue!(out, cursor::MoveTo(0, y))?;
        let line = lines.get(oy as usize + y as usize).map(String::as_str).unwrap_or("");
        let mut chars = line.chars().skip(ox as usize);
        for x in 0..viewport.0 {
            let bg = mix(SURFACE, SHADOW, shade(state, viewport, SHADOW_CELLS, x, y));
            let ch = chars.next().unwrap_or(' ');
            queue!(
                out,
                SetBackgroundColor(ct(bg)),
                SetForegroundColor(ct(TEXT)),
                Print(ch)
            )?;
        }
    }

    let fragment = watcher.style(&StyleMap::new());
    let status = format!(
        " edges {} | {:?} | {} | offset {} | q quit, t toggle, +/- offset ",
        state,
        watcher.phase(),
        fragment.css_text(),
        watcher.config().offset,
    );
    queue!(
        out,
        cursor::MoveTo(0, viewport.1),
        SetBackgroundColor(CtColor::Reset),
        SetForegroundColor(CtColor::Reset),
        terminal::Clear(terminal::ClearType::CurrentLine),
        Print(status)
    )?;
    out.flush()
}

fn ct(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
