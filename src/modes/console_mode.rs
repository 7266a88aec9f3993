use crossterm::{
    cursor::{self, Hide, Show},
    event::{
        poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    queue,
    style::{Color, Print, Stylize},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use fps_clock::FpsClock;

use std::{
    io::{stdout, Stdout, Write},
    time::Duration,
};

use crate::{
    data::{error::AppResult, Command, Program},
    graphics::{blend::Argb, Pixel},
    math::Point,
    modes::Mode,
    scene::input::to_canvas,
};

pub type Flusher = fn(&Program, &mut Stdout, (u16, u16));

const CHARSET_OPAC_EXP: &[u8] = b" `.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ\
    5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";

/// A run of characters sharing the same colors. Grouping them keeps
/// the number of escape sequences per line down.
struct ColoredString {
    pub string: String,
    pub fg: Argb,
    pub bg: Argb,
}

impl ColoredString {
    pub fn new(ch: char, fg: Argb, bg: Argb) -> Self {
        Self {
            string: ch.to_string(),
            fg,
            bg,
        }
    }

    pub fn append(&mut self, ch: char, fg: Argb, bg: Argb) -> bool {
        if self.fg == fg && self.bg == bg {
            self.string.push(ch);
            return true;
        }

        false
    }
}

#[derive(Default)]
struct StyledLine(Vec<ColoredString>);

impl StyledLine {
    fn push_pixel(&mut self, ch: char, fg: Argb, bg: Argb) {
        if let Some(last) = self.0.last_mut() {
            if last.append(ch, fg, bg) {
                return;
            }
        }

        self.0.push(ColoredString::new(ch, fg, bg));
    }

    fn queue_print(&mut self, stdout: &mut Stdout) {
        for ColoredString { string, fg, bg } in self.0.drain(..) {
            let _ = queue!(stdout, Print(string.with(to_color(fg)).on(to_color(bg))));
        }
    }
}

fn to_color(c: Argb) -> Color {
    let [_, r, g, b] = c.decompose();
    Color::Rgb { r, g, b }
}

fn to_ascii_art(table: &[u8], x: usize) -> char {
    table[(x * table.len()) >> 8] as char
}

impl Mode {
    pub fn get_flusher(&self) -> Flusher {
        match *self {
            Mode::ConAscii => Program::print_ascii,
            _ => Program::print_block,
        }
    }
}

impl Program {
    /// Canvas pixel under sub-cell `(x, y)` of a `(w, h)` grid.
    fn sample(&self, x: u16, y: u16, w: u16, h: u16) -> (usize, usize) {
        let (cw, ch) = (self.pix.width(), self.pix.height());
        (
            x as usize * cw / (w as usize).max(1),
            y as usize * ch / (h as usize).max(1),
        )
    }

    pub fn print_block(&self, stdout: &mut Stdout, (cols, rows): (u16, u16)) {
        let mut line = StyledLine::default();

        for row in 0..rows {
            let _ = queue!(stdout, cursor::MoveTo(0, row));

            for col in 0..cols {
                let upper = self.sample(col, row * 2, cols, rows * 2);
                let lower = self.sample(col, row * 2 + 1, cols, rows * 2);

                let fg = self.pix.pixel_on_background(upper.0, upper.1);
                let bg = self.pix.pixel_on_background(lower.0, lower.1);

                line.push_pixel('▀', fg, bg);
            }

            line.queue_print(stdout);
        }
    }

    pub fn print_ascii(&self, stdout: &mut Stdout, (cols, rows): (u16, u16)) {
        let mut line = StyledLine::default();
        let background = self.pix.background();

        for row in 0..rows {
            let _ = queue!(stdout, cursor::MoveTo(0, row));

            for col in 0..cols {
                let (x, y) = self.sample(col, row, cols, rows);
                let raw = self.pix.pixel(y * self.pix.width() + x);

                let ch = to_ascii_art(CHARSET_OPAC_EXP, raw.alpha() as usize);
                let fg = self.pix.pixel_on_background(x, y).set_alpha(0xFF);

                line.push_pixel(ch, fg, background);
            }

            line.queue_print(stdout);
        }
    }
}

/// Maps a terminal cell onto the canvas, aiming at the cell's middle.
fn cell_to_canvas(prog: &Program, col: u16, row: u16, (cols, rows): (u16, u16)) -> Point {
    let p = Point::new(col as f32 + 0.5, row as f32 + 0.5);
    to_canvas(p, (cols as f32, rows as f32), prog.canvas_size())
}

fn control_events_con(prog: &mut Program, console_size: &mut (u16, u16)) -> AppResult<()> {
    while poll(Duration::ZERO)? {
        match read()? {
            Event::Key(event) if event.kind == KeyEventKind::Press => match event.code {
                KeyCode::Char('q') | KeyCode::Esc => prog.push_command(Command::Close),

                KeyCode::Char('r') => prog.push_command(Command::Regenerate),

                KeyCode::Char('.') => prog.push_command(Command::SwitchConMode),

                _ => {}
            },

            Event::Mouse(event) if event.kind == MouseEventKind::Down(MouseButton::Left) => {
                let p = cell_to_canvas(prog, event.column, event.row, *console_size);
                prog.push_command(Command::Click(p));
            }

            Event::Resize(w, h) => {
                *console_size = (w, h);
                let _ = queue!(stdout(), Clear(ClearType::All));
            }

            _ => {}
        }
    }

    Ok(())
}

pub fn con_main(mut prog: Program) -> AppResult<()> {
    let mut stdout = stdout();

    let fps = (prog.get_milli_hz() / 1000).max(1);
    let mut clock = FpsClock::new(fps);

    let mut console_size = size()?;

    enable_raw_mode()?;
    queue!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
    stdout.flush()?;

    let result = (|| -> AppResult<()> {
        loop {
            control_events_con(&mut prog, &mut console_size)?;

            if prog.frame() {
                return Ok(());
            }

            (prog.mode().get_flusher())(&prog, &mut stdout, console_size);
            stdout.flush()?;

            clock.tick();
        }
    })();

    queue!(stdout, DisableMouseCapture, LeaveAlternateScreen, Show)?;
    stdout.flush()?;
    disable_raw_mode()?;

    log::debug!("Rendered {} frames", prog.frames());

    result
}
