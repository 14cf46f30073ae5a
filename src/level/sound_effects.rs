use std::f32::consts::TAU;
use std::time::Duration;

use bevy::audio::AudioSource;
use bevy::prelude::*;

use crate::core::GameEvent;
use crate::level::common::LevelSet;

pub const SAMPLE_RATE: u32 = 44_100;

/// A plain sine tone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Beep {
    pub frequency: f32,
    pub duration: Duration,
    pub volume: f32,
}

pub const LOCK_BEEP: Beep = Beep {
    frequency: 300.,
    duration: Duration::from_millis(100),
    volume: 0.5,
};

pub const CLEAR_BEEP: Beep = Beep {
    frequency: 600.,
    duration: Duration::from_millis(150),
    volume: 0.5,
};

#[derive(Resource)]
struct Beeps {
    lock: Handle<AudioSource>,
    clear: Handle<AudioSource>,
}

pub struct SoundEffectsPlugin;

impl Plugin for SoundEffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(load_beeps)
            .add_system(play_beeps.in_set(LevelSet::Present));
    }
}

fn load_beeps(mut commands: Commands, mut sources: ResMut<Assets<AudioSource>>) {
    let mut synth = |beep: Beep| {
        let wav = wav_bytes(&generate_beep(beep, SAMPLE_RATE), SAMPLE_RATE);
        sources.add(AudioSource { bytes: wav.into() })
    };

    commands.insert_resource(Beeps {
        lock: synth(LOCK_BEEP),
        clear: synth(CLEAR_BEEP),
    });
    debug!("beeps synthesized");
}

fn play_beeps(mut ev_game: EventReader<GameEvent>, beeps: Res<Beeps>, audio: Res<Audio>) {
    for ev in ev_game.iter() {
        match ev {
            GameEvent::Locked(_) => {
                audio.play(beeps.lock.clone());
            }
            GameEvent::LinesCleared { .. } => {
                audio.play(beeps.clear.clone());
            }
            _ => {}
        }
    }
}

/// 16-bit mono samples of `beep`.
pub fn generate_beep(beep: Beep, sample_rate: u32) -> Vec<i16> {
    let count = (beep.duration.as_secs_f64() * sample_rate as f64).round() as usize;
    let amplitude = beep.volume.clamp(0., 1.) * i16::MAX as f32;

    (0..count)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (amplitude * (TAU * beep.frequency * t).sin()) as i16
        })
        .collect()
}

/// Wraps PCM samples in a minimal RIFF/WAVE container.
pub fn wav_bytes(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    const CHANNELS: u16 = 1;
    const BITS: u16 = 16;

    let block_align = CHANNELS * BITS / 8;
    let data_len = (samples.len() * block_align as usize) as u32;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&CHANNELS.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&BITS.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}
