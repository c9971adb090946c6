//! Interactive physics LFO demo.
//!
//! A 220 Hz tone whose amplitude follows the physics LFO.
//!
//! Keys:
//! - 0-5: physics type
//! - SPACE: trigger (restart the cycle / fire an envelope)
//! - L: toggle looping / envelope mode
//! - UP/DOWN: LFO rate
//! - LEFT/RIGHT: physics parameter
//! - [ / ]: damping
//! - Q or ESC: quit

mod common;

use anyhow::Result;
use common::{DemoAudioState, KeyAction, is_quit_key, run_interactive_demo};
use crossterm::{ExecutableCommand, event::KeyCode};
use physlfo::{Inlet, PhysicsLfo, PhysicsType, Pitched, Signal};
use std::f64::consts::TAU;
use std::io::{Write, stdout};

const TONE_FREQUENCY: f64 = 220.0;

struct AudioState {
    lfo: PhysicsLfo,
    tone_phase: f64,
    tone_increment: f64,
}

impl AudioState {
    fn new(sample_rate: f64) -> Result<Self> {
        Ok(Self {
            lfo: PhysicsLfo::new(sample_rate)?,
            tone_phase: 0.0,
            tone_increment: TONE_FREQUENCY / sample_rate,
        })
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '0'..='5') => {
                let index = c as i64 - '0' as i64;
                self.lfo.set_physics_type(PhysicsType::from_index(index));
            }
            KeyCode::Char(' ') => self.lfo.trigger(),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let looping = self.lfo.is_looping();
                self.lfo.set_looping(!looping);
            }
            KeyCode::Up => {
                let rate = self.lfo.frequency();
                self.lfo.set_frequency(rate * 1.25);
            }
            KeyCode::Down => {
                let rate = self.lfo.frequency();
                self.lfo.set_frequency(rate / 1.25);
            }
            KeyCode::Right => self.nudge(Inlet::PhysicsParam, 0.05),
            KeyCode::Left => self.nudge(Inlet::PhysicsParam, -0.05),
            KeyCode::Char(']') => self.nudge(Inlet::Damping, 0.05),
            KeyCode::Char('[') => self.nudge(Inlet::Damping, -0.05),
            _ => {}
        }
    }

    fn nudge(&mut self, inlet: Inlet, amount: f64) {
        let value = self.lfo.scalar(inlet);
        self.lfo.set_scalar(inlet, value + amount);
    }
}

impl DemoAudioState for AudioState {
    fn next_sample(&mut self) -> f64 {
        let level = self.lfo.next_sample().clamp(0.0, 1.2);
        let tone = (self.tone_phase * TAU).sin();
        self.tone_phase = (self.tone_phase + self.tone_increment).fract();
        tone * level * 0.25
    }
}

fn draw_ui(state: &AudioState) -> Result<()> {
    let lfo = &state.lfo;
    let physics_type = lfo.physics_type();
    let mode = if lfo.is_looping() {
        "looping"
    } else if lfo.is_envelope_active() {
        "envelope (running)"
    } else {
        "envelope (idle)"
    };

    let mut stdout = stdout();
    stdout.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::All,
    ))?;
    stdout.execute(crossterm::cursor::MoveTo(0, 0))?;
    write!(
        stdout,
        "Physics LFO | type {} ({}) | {:.2} Hz | param {:.2} | damping {:.2} | {}\r\n",
        physics_type.index(),
        physics_type.name(),
        lfo.frequency(),
        lfo.scalar(Inlet::PhysicsParam),
        lfo.scalar(Inlet::Damping),
        mode,
    )?;
    write!(stdout, "{}\r\n", physics_type.description())?;
    write!(
        stdout,
        "0-5=type  SPACE=trigger  L=mode  UP/DOWN=rate  LEFT/RIGHT=param  [/]=damping  Q=quit"
    )?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    run_interactive_demo(AudioState::new, draw_ui, |state, key_event| {
        if is_quit_key(key_event.code) {
            return KeyAction::Exit;
        }
        state.handle_key(key_event.code);
        KeyAction::Continue
    })?;

    println!("\nGoodbye!");
    Ok(())
}
