//! Runtime - The ticking loop
//!
//! Multiplexes two sources on one task:
//! - A timer that advances the clock once per tick period
//! - Terminal events, key presses handed to the session
//!
//! The session (and the clock inside it) is owned by the loop; nothing is
//! shared across tasks.

use std::io::Write;

use alien_calendar::AlienDateTime;
use alien_clock::AlienClock;
use crossterm::event::Event;
use futures_util::{Stream, StreamExt};
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::config::ClockConfig;
use crate::console::Console;
use crate::error::RunnerError;
use crate::session::{Flow, Session};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// User pressed `Q` or Ctrl-C
    Quit,
    /// `max_ticks` timer ticks elapsed
    TickLimit,
    /// Input closed and the clock has no timer
    InputClosed,
}

/// Run summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Timer ticks that elapsed (including ticks paused by a prompt)
    pub timer_ticks: u64,
    /// Alien seconds the clock actually advanced
    pub clock_ticks: u64,
    pub alarms_fired: u64,
    pub final_time: AlienDateTime,
    pub stop_reason: StopReason,
}

/// Drives a [`Session`] from a timer and a terminal event stream
pub struct ClockRunner {
    config: ClockConfig,
    session: Session,
    console: Console,
}

impl ClockRunner {
    pub fn new(config: ClockConfig) -> Self {
        let session = Session::new(AlienClock::new(config.start));
        let console = Console::new(config.clear_screen, config.bell);

        Self {
            config,
            session,
            console,
        }
    }

    /// Run until quit, tick limit, or closed input with no timer
    ///
    /// `events` is normally crossterm's `EventStream`; any stream of
    /// terminal events works, which is how the loop is driven in tests.
    pub async fn run<E, W>(
        mut self,
        mut events: E,
        mut output: W,
    ) -> Result<RunSummary, RunnerError>
    where
        E: Stream<Item = std::io::Result<Event>> + Unpin,
        W: Write,
    {
        let mut ticker = self.config.tick_period().map(|period| {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        log::info!(
            "Clock started at {} (period {:?}, limit {:?})",
            self.session.current(),
            self.config.tick_period(),
            self.config.max_ticks
        );

        let mut input_open = true;
        let mut timer_ticks = 0u64;
        let mut alarms_fired = 0u64;

        self.draw(&mut output, "")?;

        let stop_reason = loop {
            if self.config.max_ticks.is_some_and(|max| timer_ticks >= max) {
                break StopReason::TickLimit;
            }
            if !input_open && ticker.is_none() {
                break StopReason::InputClosed;
            }

            tokio::select! {
                _ = next_tick(&mut ticker) => {
                    timer_ticks += 1;
                    // The prompt frame stays put until the user answers
                    if self.session.is_prompting() {
                        continue;
                    }
                    let signal = match self.session.tick() {
                        Some(_) => {
                            alarms_fired += 1;
                            self.console.alarm_signal()
                        }
                        None => "",
                    };
                    self.draw(&mut output, signal)?;
                }
                event = events.next(), if input_open => {
                    match event.transpose()? {
                        Some(Event::Key(key)) => {
                            if self.session.handle_key(key) == Flow::Quit {
                                break StopReason::Quit;
                            }
                        }
                        Some(Event::Resize(..)) => {}
                        Some(_) => continue,
                        None => {
                            log::debug!("Input closed");
                            input_open = false;
                            self.session.cancel_prompt();
                        }
                    }
                    self.draw(&mut output, "")?;
                }
            }
        };

        let clock = self.session.clock();
        let summary = RunSummary {
            timer_ticks,
            clock_ticks: clock.ticks(),
            alarms_fired,
            final_time: clock.current(),
            stop_reason,
        };
        log::info!("Clock stopped: {summary:?}");

        Ok(summary)
    }

    fn draw<W: Write>(&self, output: &mut W, prefix: &str) -> Result<(), RunnerError> {
        self.console.draw(output, &self.session, prefix)?;
        Ok(())
    }
}

/// Wait for the next timer tick, forever if there is no timer
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
