use anyhow::anyhow;
use hoop_core::{channel_base_pitch, AudioFrame, OneShot, Waveform, CHANNEL_COUNT};
use web_sys as web;

// Let the one-shot start slightly in the future so the ramps are honoured.
const SCHEDULE_LEAD_SEC: f64 = 0.005;
const ONE_SHOT_FLOOR_GAIN: f32 = 0.0001;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

/// Ten always-running sine oscillators, one per gesture channel, each behind
/// its own gain and all summed through a dynamics compressor. The session
/// decides targets; the audio thread does the smoothing via `setTargetAtTime`.
pub struct ToneBank {
    ctx: web::AudioContext,
    compressor: web::DynamicsCompressorNode,
    voices: Vec<(web::OscillatorNode, web::GainNode)>,
}

impl ToneBank {
    pub fn new(ctx: web::AudioContext) -> anyhow::Result<Self> {
        let compressor = web::DynamicsCompressorNode::new(&ctx)
            .map_err(|e| anyhow!("DynamicsCompressorNode error: {:?}", e))?;
        compressor.threshold().set_value(-24.0);
        compressor.knee().set_value(30.0);
        compressor.ratio().set_value(12.0);
        compressor.attack().set_value(0.003);
        compressor.release().set_value(0.25);
        compressor
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow!("connect error: {:?}", e))?;

        let mut voices = Vec::with_capacity(CHANNEL_COUNT);
        for ch in 0..CHANNEL_COUNT {
            let osc = web::OscillatorNode::new(&ctx)
                .map_err(|e| anyhow!("OscillatorNode error: {:?}", e))?;
            osc.set_type(web::OscillatorType::Sine);
            osc.frequency().set_value(channel_base_pitch(ch));
            let gain = create_gain(&ctx, 0.0, "channel")?;
            osc.connect_with_audio_node(&gain)
                .map_err(|e| anyhow!("connect error: {:?}", e))?;
            gain.connect_with_audio_node(&compressor)
                .map_err(|e| anyhow!("connect error: {:?}", e))?;
            osc.start().map_err(|e| anyhow!("oscillator start error: {:?}", e))?;
            voices.push((osc, gain));
        }
        log::info!("[audio] tone bank ready with {} channels", voices.len());
        Ok(Self {
            ctx,
            compressor,
            voices,
        })
    }

    /// Browsers create contexts suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    /// Hand this frame's channel targets to the audio thread. A channel with
    /// no frequency target keeps its current pitch.
    pub fn apply(&self, frame: &AudioFrame) {
        let now = self.ctx.current_time();
        for ((osc, gain), target) in self.voices.iter().zip(frame.channels.iter()) {
            if let Some(hz) = target.frequency_target {
                let _ = osc
                    .frequency()
                    .set_target_at_time(hz, now, target.frequency_tau_sec as f64);
            }
            let _ = gain
                .gain()
                .set_target_at_time(target.gain_target, now, target.gain_tau_sec as f64);
        }
    }

    /// Fire a short oscillator with an attack ramp and exponential release,
    /// routed through the compressor with the channels.
    pub fn fire(&self, shot: &OneShot) {
        let Ok(src) = web::OscillatorNode::new(&self.ctx) else {
            return;
        };
        src.set_type(oscillator_type(shot.waveform));
        src.frequency().set_value(shot.frequency_hz);
        let Ok(g) = create_gain(&self.ctx, 0.0, "one-shot") else {
            return;
        };
        let t0 = self.ctx.current_time() + SCHEDULE_LEAD_SEC;
        let attack_end = t0 + shot.envelope.attack_sec as f64;
        let end = t0 + shot.duration_sec as f64;
        let _ = g.gain().set_value_at_time(0.0, t0);
        let _ = g
            .gain()
            .linear_ramp_to_value_at_time(shot.envelope.peak_gain, attack_end);
        let _ = g
            .gain()
            .exponential_ramp_to_value_at_time(ONE_SHOT_FLOOR_GAIN, end);
        let _ = src.connect_with_audio_node(&g);
        let _ = g.connect_with_audio_node(&self.compressor);
        let _ = src.start_with_when(t0);
        let _ = src.stop_with_when(end + 0.05);
    }

    /// Mute every channel at once.
    pub fn silence(&self) {
        let now = self.ctx.current_time();
        for (_, gain) in &self.voices {
            let _ = gain.gain().cancel_scheduled_values(now);
            gain.gain().set_value(0.0);
        }
    }
}
