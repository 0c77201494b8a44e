//! Pitch helpers and the one-shot feedback sounds handed to the audio engine.

use crate::constants::{CHANNEL_COUNT, CHANNEL_MIDI_NOTES};

/// Basic oscillator shape used by synths in the web front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundKind {
    Bounce,
    Score,
}

/// Gain envelope of a one-shot: linear rise to `peak_gain` over
/// `attack_sec`, then exponential fall to silence by the end of the note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub attack_sec: f32,
    pub peak_gain: f32,
}

/// A discrete "fire and forget" sound request.
///
/// Fields:
/// - `kind`: which game event produced it
/// - `waveform`: oscillator type
/// - `frequency_hz`: pitch in Hertz
/// - `duration_sec`: total length including the release
/// - `envelope`: attack/peak description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OneShot {
    pub kind: SoundKind,
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub duration_sec: f32,
    pub envelope: Envelope,
}

impl OneShot {
    /// Dull thud for a wall bounce; louder for harder impacts.
    pub fn bounce(impact_speed: f32) -> Self {
        let loudness = (impact_speed / 20.0).clamp(0.1, 1.0);
        Self {
            kind: SoundKind::Bounce,
            waveform: Waveform::Triangle,
            frequency_hz: 180.0,
            duration_sec: 0.12,
            envelope: Envelope {
                attack_sec: 0.005,
                peak_gain: 0.25 * loudness,
            },
        }
    }

    pub fn score() -> Self {
        Self {
            kind: SoundKind::Score,
            waveform: Waveform::Sine,
            frequency_hz: midi_to_hz(81.0),
            duration_sec: 0.45,
            envelope: Envelope {
                attack_sec: 0.02,
                peak_gain: 0.3,
            },
        }
    }
}

/// Resting pitch of a channel before depth modulation.
#[inline]
pub fn channel_base_pitch(channel: usize) -> f32 {
    midi_to_hz(CHANNEL_MIDI_NOTES[channel % CHANNEL_COUNT] as f32)
}

/// Convert a MIDI note number to Hertz (A4=440 Hz).
///
/// Monotonic and exhibits octave symmetry: +12 semitones doubles the frequency.
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
