//! Calculator session: feeds key scripts into the state machine
//!
//! Owns the single `CalculatorState` and processes events strictly in the
//! order they were typed.

use crate::config::{AppConfig, DisplayConfig};
use crate::render::display_line;
use anyhow::{Context, Result};
use calc_core::{CalculatorState, KeyMap};
use std::io::{BufRead, Write};

pub struct Session {
    state: CalculatorState,
    keys: KeyMap,
    display: DisplayConfig,
    /// Print the display after every event instead of once per script
    trace: bool,
}

impl Session {
    pub fn new(config: &AppConfig, trace: bool) -> Self {
        Self {
            state: CalculatorState::new(),
            keys: config.key_map(),
            display: config.display.clone(),
            trace,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    /// Apply a whole key script and print the resulting display line
    ///
    /// Unknown keys reject the script before any event is applied.
    pub fn run_script<W: Write>(&mut self, script: &str, out: &mut W) -> Result<()> {
        let events = self
            .keys
            .events_for_script(script)
            .with_context(|| format!("Invalid key script: {:?}", script))?;
        log::debug!("script {:?} -> {} event(s)", script, events.len());

        for event in events {
            self.state.apply(event);
            if self.trace {
                writeln!(out, "{:<10} {}", event.to_string(), display_line(&self.state, &self.display))?;
            }
        }

        if !self.trace {
            writeln!(out, "{}", display_line(&self.state, &self.display))?;
        }
        Ok(())
    }

    /// Read key scripts line by line until EOF, `quit` or `exit`
    ///
    /// A bad line is reported and skipped; the session keeps its state.
    pub fn run_interactive<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", display_line(&self.state, &self.display))?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.display.prompt)?;
            out.flush()?;

            let line = match lines.next() {
                Some(line) => line.context("Failed to read input")?,
                None => break,
            };
            let line = line.trim();

            match line {
                "" => continue,
                "quit" | "exit" => break,
                _ => {}
            }

            if let Err(e) = self.run_script(line, out) {
                log::warn!("{:#}", e);
                writeln!(out, "error: {}", e.root_cause())?;
            }
        }

        Ok(())
    }
}
