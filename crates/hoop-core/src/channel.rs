//! The ten finger-driven control channels and their smoothed audio parameters.

use crate::constants::{
    ACTIVE_GAIN, CHANNEL_COUNT, FREQUENCY_TAU_SEC, GAIN_TAU_SEC, PITCH_DEPTH_FACTOR,
};
use crate::gesture::{self, FingerSignal};
use crate::hand::HandObservation;
use crate::music::channel_base_pitch;
use crate::smoothing::Smoothed;

/// Mutable runtime state per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub is_active: bool,
    pub control_value: f32,
    pub frequency: Smoothed,
    pub gain: Smoothed,
}

impl Channel {
    fn new(index: usize) -> Self {
        Self {
            is_active: false,
            control_value: 0.0,
            frequency: Smoothed::new(channel_base_pitch(index), FREQUENCY_TAU_SEC),
            gain: Smoothed::new(0.0, GAIN_TAU_SEC),
        }
    }
}

/// Per-channel targets handed to the audio engine every frame.
///
/// `frequency_target` is `None` while the channel is inactive: the engine
/// keeps the oscillator where it is so releasing a finger never snaps pitch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelTarget {
    pub frequency_target: Option<f32>,
    pub gain_target: f32,
    pub frequency_tau_sec: f32,
    pub gain_tau_sec: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioFrame {
    pub channels: [ChannelTarget; CHANNEL_COUNT],
}

#[derive(Clone, Debug)]
pub struct ChannelBank {
    channels: Vec<Channel>,
}

impl Default for ChannelBank {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelBank {
    pub fn new() -> Self {
        Self {
            channels: (0..CHANNEL_COUNT).map(Channel::new).collect(),
        }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn get(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    /// Start a detection frame: every channel goes inactive until a hand in
    /// this frame re-activates it.
    pub fn begin_detection(&mut self) {
        for ch in &mut self.channels {
            ch.is_active = false;
        }
    }

    /// Fold one hand's extension readings into the bank.
    pub fn apply_hand(&mut self, hand: &HandObservation) {
        for signal in gesture::extract(hand) {
            self.apply_signal(signal);
        }
    }

    pub fn apply_signal(&mut self, signal: FingerSignal) {
        let Some(ch) = self.channels.get_mut(signal.channel) else {
            return;
        };
        if signal.extended {
            ch.is_active = true;
            ch.control_value = signal.control_value;
        }
    }

    #[inline]
    pub fn frequency_target(&self, index: usize) -> Option<f32> {
        let ch = self.channels.get(index)?;
        ch.is_active
            .then(|| channel_base_pitch(index) * (1.0 + PITCH_DEPTH_FACTOR * ch.control_value))
    }

    /// Advance both smoothers of every channel by `dt_sec`.
    pub fn advance(&mut self, dt_sec: f32) {
        for i in 0..self.channels.len() {
            let freq_target = self.frequency_target(i);
            let ch = &mut self.channels[i];
            let gain_target = if ch.is_active { ACTIVE_GAIN } else { 0.0 };
            ch.gain.update(gain_target, dt_sec);
            if let Some(f) = freq_target {
                ch.frequency.update(f, dt_sec);
            }
        }
    }

    /// Immediate mute used on session stop.
    pub fn silence(&mut self) {
        for ch in &mut self.channels {
            ch.is_active = false;
            ch.gain.set(0.0);
        }
    }

    pub fn audio_frame(&self) -> AudioFrame {
        let mut frame = AudioFrame::default();
        for (i, (out, ch)) in frame.channels.iter_mut().zip(&self.channels).enumerate() {
            *out = ChannelTarget {
                frequency_target: self.frequency_target(i),
                gain_target: if ch.is_active { ACTIVE_GAIN } else { 0.0 },
                frequency_tau_sec: ch.frequency.tau_sec,
                gain_tau_sec: ch.gain.tau_sec,
            };
        }
        frame
    }

    pub fn active_count(&self) -> usize {
        self.channels.iter().filter(|c| c.is_active).count()
    }
}
