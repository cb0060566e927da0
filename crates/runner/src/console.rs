//! Console rendering
//!
//! Builds the text frames the runner writes to the terminal. Rendering is
//! pure string building so frames can be checked in tests; [`Console::draw`]
//! puts a frame on a raw-mode terminal.

use std::io::Write;

use alien_clock::AlienClock;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::session::Session;

const BELL: &str = "\x07";

/// Format for the Earth projection
pub const EARTH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const PANEL_TOP: &str = "╔════════════ ALIEN CLOCK ════════════╗";
const PANEL_BOTTOM: &str = "╚═════════════════════════════════════╝";
/// Characters between the two vertical borders
const PANEL_WIDTH: usize = 37;

const HELP: &str = "Press 'S' to set time\nPress 'A' to set alarm\nPress 'C' to clear alarm\nPress 'Q' to quit";

/// Terminal output settings
#[derive(Debug, Clone, Copy)]
pub struct Console {
    clear_screen: bool,
    bell: bool,
}

impl Console {
    pub fn new(clear_screen: bool, bell: bool) -> Self {
        Self { clear_screen, bell }
    }

    /// Full frame for the current session state
    pub fn frame(&self, session: &Session) -> String {
        let mut out = String::new();

        match session.prompt_text() {
            Some(question) => {
                if let Some(notice) = session.notice() {
                    out.push_str(notice);
                    out.push('\n');
                }
                out.push_str(question);
                out.push_str(session.input());
            }
            None => {
                out.push_str(&render_clock(session.clock()));
                if let Some(notice) = session.notice() {
                    out.push('\n');
                    out.push_str(notice);
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(HELP);
                out.push('\n');
            }
        }

        out
    }

    /// Write `prefix` and the frame, clearing the screen first when configured
    ///
    /// Raw mode turns off newline translation, so line breaks go out as `\r\n`.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        session: &Session,
        prefix: &str,
    ) -> std::io::Result<()> {
        out.write_all(prefix.as_bytes())?;
        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        out.write_all(self.frame(session).replace('\n', "\r\n").as_bytes())?;
        out.flush()
    }

    /// Text that announces a fired alarm
    pub fn alarm_signal(&self) -> &'static str {
        if self.bell { BELL } else { "" }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// The boxed clock panel with the Earth projection and pending alarm
pub fn render_clock(clock: &AlienClock) -> String {
    let now = clock.current();

    let mut lines = vec![
        PANEL_TOP.to_string(),
        panel_line(&format!("Year: {}", now.year())),
        panel_line(&format!("Month: {}/18", now.month())),
        panel_line(&format!("Day: {}", now.day())),
        panel_line(&format!(
            "Time: {:02}:{:02}:{:02}",
            now.hour(),
            now.minute(),
            now.second()
        )),
        PANEL_BOTTOM.to_string(),
        String::new(),
        "Earth Time:".to_string(),
    ];

    lines.push(match clock.earth_time() {
        Ok(earth) => earth.format(EARTH_TIME_FORMAT).to_string(),
        Err(e) => e.to_string(),
    });

    if let Some(alarm) = clock.alarm() {
        lines.push(String::new());
        lines.push(format!("Alarm: {alarm}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn panel_line(content: &str) -> String {
    format!("║ {:<width$}║", content, width = PANEL_WIDTH - 1)
}
