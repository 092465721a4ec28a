//! The interactive terminal view.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rcellular_lib::{Config, Kind, Simulate, DEAD};
use std::{
    error::Error,
    io::{self, Write},
    time::{Duration, Instant},
};

/// How long to wait for input while paused.
const IDLE_POLL: Duration = Duration::from_millis(500);

const HELP: &str = "[space] run/pause  [n] step  [arrows] move  [t] toggle  \
                    [+/-] rule  [r] reset  [tab] 1d/2d  [q] quit";

/// One automaton, and the configuration it was built from.
struct View {
    config: Config,
    world: Box<dyn Simulate>,
}

impl View {
    fn new(config: Config) -> Result<Self, rcellular_lib::Error> {
        let world = config.world()?;
        Ok(View { config, world })
    }
}

struct App {
    /// The elementary automaton and the Game of Life, in this order.
    ///
    /// They share nothing; only the visible one advances.
    views: [View; 2],
    active: usize,
    cursor: (usize, usize),
    last_tick: Instant,
    message: Option<String>,
}

impl App {
    fn new(config: Config) -> Result<Self, rcellular_lib::Error> {
        let active = match config.kind {
            Kind::Elementary => 0,
            Kind::Life => 1,
        };
        let elementary = config.clone().set_kind(Kind::Elementary);
        let life = config.set_kind(Kind::Life);
        Ok(App {
            views: [View::new(elementary)?, View::new(life)?],
            active,
            cursor: (0, 0),
            last_tick: Instant::now(),
            message: None,
        })
    }

    fn view(&self) -> &View {
        &self.views[self.active]
    }

    fn world(&mut self) -> &mut dyn Simulate {
        self.views[self.active].world.as_mut()
    }

    fn advance(&mut self) {
        self.last_tick = Instant::now();
        if let Err(e) = self.world().tick() {
            self.message = Some(format!("Halted: {}", e));
        }
    }

    fn start_or_pause(&mut self) {
        if self.world().is_running() {
            self.world().pause();
        } else if let Err(e) = self.world().start() {
            self.message = Some(format!("Cannot start: {}", e));
        } else {
            self.message = None;
            self.last_tick = Instant::now();
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let (width, height) = self.view().config.dimensions();
        let (x, y) = self.cursor;
        let x = (x as isize + dx).clamp(0, width as isize - 1) as usize;
        let y = (y as isize + dy).clamp(0, height as isize - 1) as usize;
        self.cursor = (x, y);
    }

    fn toggle(&mut self) {
        let cursor = self.cursor;
        if self.world().is_running() {
            self.message = Some(String::from("Pause to edit cells."));
        } else {
            self.world().toggle(cursor);
        }
    }

    /// Switches to the neighboring elementary rule, restarting from the seed.
    fn change_rule(&mut self, delta: i64) {
        let view = &mut self.views[self.active];
        if view.config.kind != Kind::Elementary || view.world.is_running() {
            return;
        }
        let rule = (view.config.rule as i64 + delta).rem_euclid(256) as u32;
        let config = view.config.clone().set_rule(rule);
        match config.world() {
            Ok(world) => {
                view.world = world;
                view.config = config;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn switch_view(&mut self) {
        for view in self.views.iter_mut() {
            view.world.pause();
        }
        self.active = 1 - self.active;
        self.cursor = (0, 0);
        self.message = None;
    }

    /// Returns `false` when asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char(' ') => self.start_or_pause(),
            KeyCode::Char('n') => {
                if !self.world().is_running() {
                    self.advance();
                }
            }
            KeyCode::Char('t') | KeyCode::Enter => self.toggle(),
            KeyCode::Char('r') => {
                self.world().reset();
                self.message = None;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_rule(1),
            KeyCode::Char('-') => self.change_rule(-1),
            KeyCode::Tab => self.switch_view(),
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            _ => (),
        }
        true
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let (cols, lines) = terminal::size()?;
        let (cols, lines) = (cols as usize, lines as usize);
        let world = &self.view().world;
        let running = world.is_running();

        queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let top = format!(
            "{} {}  Gen: {}  Cells: {}  Cursor: {:?}  {}",
            self.view().config.kind,
            world.rule_string(),
            world.generation(),
            world.population(),
            self.cursor,
            if running { "Running" } else { "Paused" },
        );
        queue!(out, PrintStyledContent(fit(&top, cols).reverse()))?;

        // Shows the latest rows when the history does not fit.
        let rows = world.rows();
        let height = lines.saturating_sub(2);
        let skip = rows.len().saturating_sub(height);
        for (i, row) in rows.iter().skip(skip).enumerate() {
            let y = i + skip;
            queue!(out, cursor::MoveTo(0, (i + 1) as u16))?;
            for (x, &state) in row.iter().take(cols).enumerate() {
                let c = if state == DEAD { '.' } else { 'o' };
                if !running && (x, y) == self.cursor {
                    queue!(out, PrintStyledContent(c.reverse()))?;
                } else {
                    queue!(out, Print(c))?;
                }
            }
        }

        let bottom = self.message.as_deref().unwrap_or(HELP);
        queue!(
            out,
            cursor::MoveTo(0, lines.saturating_sub(1) as u16),
            PrintStyledContent(fit(bottom, cols).reverse())
        )?;
        out.flush()
    }

    fn event_loop<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        loop {
            self.draw(out)?;
            let interval = self.view().config.interval();
            let timeout = if self.view().world.is_running() {
                interval.saturating_sub(self.last_tick.elapsed())
            } else {
                IDLE_POLL
            };
            if event::poll(timeout)? {
                if let Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) = event::read()?
                {
                    if !self.handle_key(code) {
                        return Ok(());
                    }
                }
            }
            if self.view().world.is_running() && self.last_tick.elapsed() >= interval {
                self.advance();
            }
        }
    }
}

/// Pads or truncates a line to exactly `width` characters.
fn fit(s: &str, width: usize) -> String {
    format!("{:<width$.width$}", s, width = width)
}

/// Runs the interactive view until the user quits,
/// then prints the visible world.
pub(crate) fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(config)?;
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let result = app.event_loop(&mut stdout);
    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;
    print!("{}", app.view().world.plaintext());
    Ok(())
}
