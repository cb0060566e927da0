//! Session - Key commands on top of the clock
//!
//! Turns terminal key presses into clock operations:
//! - `S` walks through six prompts and sets the current time
//! - `A` asks for an offset in alien minutes and sets the alarm
//! - `C` clears a pending alarm
//! - `Q` (or Ctrl-C) quits
//!
//! Prompt answers are typed into a line buffer and submitted with Enter;
//! Backspace edits it and Esc abandons the prompt. While a prompt is open the
//! clock is paused, so the time being typed in does not drift underneath the
//! user.

use alien_calendar::AlienDateTime;
use alien_clock::{AlarmEvent, AlienClock};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const SET_TIME_PROMPTS: [&str; 6] = [
    "Enter Year: ",
    "Enter Month (1-18): ",
    "Enter Day: ",
    "Enter Hour (0-35): ",
    "Enter Minute (0-89): ",
    "Enter Second (0-89): ",
];

pub(crate) const ALARM_PROMPT: &str = "Enter alien minutes from now for alarm: ";

/// What the user is currently being asked for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Prompt {
    #[default]
    Idle,
    /// Collecting year, month, day, hour, minute, second in order
    SetTime { fields: Vec<i32> },
    SetAlarm,
}

/// Whether the loop should keep going after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Clock plus the interactive state around it
#[derive(Debug, Clone)]
pub struct Session {
    clock: AlienClock,
    prompt: Prompt,
    /// Answer typed so far for the open prompt
    input: String,
    /// Message shown under the clock until the next command
    notice: Option<String>,
}

impl Session {
    pub fn new(clock: AlienClock) -> Self {
        Self {
            clock,
            prompt: Prompt::Idle,
            input: String::new(),
            notice: None,
        }
    }

    pub fn clock(&self) -> &AlienClock {
        &self.clock
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt != Prompt::Idle
    }

    /// Question to show for the open prompt
    pub fn prompt_text(&self) -> Option<&'static str> {
        match &self.prompt {
            Prompt::Idle => None,
            Prompt::SetTime { fields } => SET_TIME_PROMPTS.get(fields.len()).copied(),
            Prompt::SetAlarm => Some(ALARM_PROMPT),
        }
    }

    /// Advance the clock one second unless a prompt is open
    pub fn tick(&mut self) -> Option<AlarmEvent> {
        if self.is_prompting() {
            return None;
        }

        let event = self.clock.tick()?;
        self.notice = Some(format!("Alarm! It is {}", event.fired_at));
        Some(event)
    }

    /// Drop any half-answered prompt
    pub fn cancel_prompt(&mut self) {
        if self.is_prompting() {
            log::debug!("Prompt {:?} cancelled", self.prompt);
            self.prompt = Prompt::Idle;
            self.input.clear();
        }
    }

    /// Handle one key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind == KeyEventKind::Release {
            return Flow::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        if !self.is_prompting() {
            return self.handle_command(key.code);
        }

        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.submit(line.trim());
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.cancel_prompt(),
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }

        Flow::Continue
    }

    fn handle_command(&mut self, code: KeyCode) -> Flow {
        let KeyCode::Char(c) = code else {
            return Flow::Continue;
        };

        match c.to_ascii_lowercase() {
            's' => {
                self.notice = None;
                self.prompt = Prompt::SetTime { fields: Vec::new() };
            }
            'a' => {
                self.notice = None;
                self.prompt = Prompt::SetAlarm;
            }
            'c' => {
                self.notice = Some(match self.clock.clear_alarm() {
                    Some(alarm) => format!("Alarm for {alarm} cleared"),
                    None => "No alarm set".to_string(),
                });
            }
            'q' => return Flow::Quit,
            other => {
                log::debug!("Unknown key: {other:?}");
                self.notice = Some(format!("Unknown key '{other}'"));
            }
        }

        Flow::Continue
    }

    fn submit(&mut self, line: &str) {
        match std::mem::take(&mut self.prompt) {
            Prompt::Idle => {}
            Prompt::SetTime { fields } => self.answer_set_time(fields, line),
            Prompt::SetAlarm => self.answer_alarm(line),
        }
    }

    fn answer_set_time(&mut self, mut fields: Vec<i32>, line: &str) {
        let Ok(value) = line.parse::<i32>() else {
            log::info!("Non-numeric time field: {line:?}");
            self.notice =
                Some("Invalid input format! Please enter numeric values.".to_string());
            return;
        };

        fields.push(value);
        let Ok([year, month, day, hour, minute, second]) = <[i32; 6]>::try_from(fields.as_slice())
        else {
            self.prompt = Prompt::SetTime { fields };
            return;
        };

        self.notice = match self.clock.set_time(year, month, day, hour, minute, second) {
            Ok(_) => None,
            Err(e) => {
                log::info!("Rejected time {fields:?}: {e}");
                Some(e.to_string())
            }
        };
    }

    fn answer_alarm(&mut self, line: &str) {
        let Ok(minutes) = line.parse::<i32>() else {
            log::info!("Non-numeric alarm offset: {line:?}");
            self.notice = Some("Invalid input format! Please enter a numeric value.".to_string());
            return;
        };

        self.notice = Some(match self.clock.set_alarm_in(minutes) {
            Ok(alarm) => format!("Alarm set for {alarm}"),
            Err(e) => {
                log::info!("Rejected alarm offset {minutes}: {e}");
                "Invalid alarm time!".to_string()
            }
        });
    }

    /// Current time, for callers that only need the value
    pub fn current(&self) -> AlienDateTime {
        self.clock.current()
    }
}
