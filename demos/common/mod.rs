//! Shared audio and terminal plumbing for the interactive demo.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;
use std::panic;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Audio state that renders one output sample at a time.
pub trait DemoAudioState: Send + 'static {
    fn next_sample(&mut self) -> f64;
}

/// Whether the event loop keeps running.
pub enum KeyAction {
    Continue,
    Exit,
}

/// Opens the default output device, builds the state for its sample rate and
/// runs a key-driven event loop in the alternate screen until the handler
/// returns [`KeyAction::Exit`].
pub fn run_interactive_demo<S, B, D, K>(build_state: B, draw: D, key_handler: K) -> Result<()>
where
    S: DemoAudioState,
    B: FnOnce(f64) -> Result<S>,
    D: Fn(&S) -> Result<()>,
    K: Fn(&mut S, &KeyEvent) -> KeyAction,
{
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0 as f64;
    let state = Arc::new(Mutex::new(build_state(sample_rate)?));

    let _stream = match config.sample_format() {
        SampleFormat::F32 => build_stream::<f32, S>(&device, &config.into(), state.clone())?,
        SampleFormat::I16 => build_stream::<i16, S>(&device, &config.into(), state.clone())?,
        SampleFormat::U16 => build_stream::<u16, S>(&device, &config.into(), state.clone())?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    draw(&state.lock().unwrap())?;

    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key_event) = event::read()?
        {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            let mut guard = state.lock().unwrap();
            match key_handler(&mut guard, &key_event) {
                KeyAction::Continue => draw(&guard)?,
                KeyAction::Exit => break,
            }
        }
    }

    restore_terminal();
    Ok(())
}

fn build_stream<T, S>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: Arc<Mutex<S>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
    S: DemoAudioState,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut state = state.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                let value: T = T::from_sample(state.next_sample());
                frame.fill(value);
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

fn restore_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Q or ESC.
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
