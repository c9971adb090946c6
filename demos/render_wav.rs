//! Renders every physics type to a WAV file.
//!
//! Each file holds four seconds of the LFO in looping mode at 1 Hz followed
//! by a single triggered envelope left to settle for four more seconds.
//!
//! ```text
//! cargo run --example render_wav -- [output-dir]
//! ```

use anyhow::{Context, Result};
use physlfo::{PhysicsLfo, PhysicsLfoConfig, PhysicsType, Signal};
use std::path::PathBuf;

const SAMPLE_RATE: u32 = 48000;
const SECONDS_PER_SECTION: usize = 4;

fn render(physics_type: PhysicsType) -> Result<Vec<f64>> {
    let config = PhysicsLfoConfig::new()
        .with_physics_type(physics_type)
        .with_physics_param(0.5)
        .with_damping(0.3)
        .with_frequency(1.0);
    let mut lfo = PhysicsLfo::with_config(SAMPLE_RATE as f64, config)?;

    let section = SAMPLE_RATE as usize * SECONDS_PER_SECTION;
    let mut samples = vec![0.0; section * 2];

    let (looping, envelope) = samples.split_at_mut(section);
    lfo.process(looping);

    lfo.set_looping(false);
    lfo.trigger();
    lfo.process(envelope);

    Ok(samples)
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    for physics_type in PhysicsType::ALL {
        let samples = render(physics_type)?;
        let file_name = format!(
            "physics_lfo_{}_{}.wav",
            physics_type.index(),
            physics_type.name().replace([' ', '+', '-'], "_")
        );
        let path = out_dir.join(file_name);

        let mut writer = hound::WavWriter::create(&path, spec)
            .with_context(|| format!("creating {}", path.display()))?;
        for sample in &samples {
            writer.write_sample(*sample as f32)?;
        }
        writer.finalize()?;

        let peak = samples.iter().cloned().fold(f64::MIN, f64::max);
        println!("{} -> {} (peak {:.3})", physics_type.name(), path.display(), peak);
    }

    Ok(())
}
