use ember_core::{AudioBackend, AudioError};
use web_sys as web;

/// Something that is currently producing sound.
pub enum WebSource {
    Buffer(web::AudioBufferSourceNode),
    Oscillator(web::OscillatorNode),
}

/// [`AudioBackend`] over a browser `AudioContext`.
pub struct WebAudioBackend {
    ctx: web::AudioContext,
}

fn node_err(node: &'static str) -> impl FnOnce(wasm_bindgen::JsValue) -> AudioError {
    move |e| {
        log::error!("{} error: {:?}", node, e);
        AudioError::Node {
            node,
            reason: format!("{:?}", e),
        }
    }
}

impl WebAudioBackend {
    /// Must run inside a user gesture or the context starts suspended.
    pub fn connect() -> Result<Self, AudioError> {
        let ctx = web::AudioContext::new().map_err(|e| {
            log::error!("AudioContext error: {:?}", e);
            AudioError::Context(format!("{:?}", e))
        })?;
        Ok(Self { ctx })
    }

    pub fn current_time(&self) -> f64 {
        self.ctx.current_time()
    }
}

impl AudioBackend for WebAudioBackend {
    type Source = WebSource;
    type Filter = web::BiquadFilterNode;
    type Gain = web::GainNode;

    fn sample_rate(&self) -> f32 {
        self.ctx.sample_rate()
    }

    fn resume(&mut self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    fn create_gain(&mut self, level: f32) -> Result<web::GainNode, AudioError> {
        let gain = web::GainNode::new(&self.ctx).map_err(node_err("GainNode"))?;
        gain.gain().set_value(level);
        gain.connect_with_audio_node(&self.ctx.destination())
            .map_err(node_err("GainNode"))?;
        Ok(gain)
    }

    fn create_lowpass(
        &mut self,
        cutoff_hz: f32,
        output: &web::GainNode,
    ) -> Result<web::BiquadFilterNode, AudioError> {
        let filter = web::BiquadFilterNode::new(&self.ctx).map_err(node_err("BiquadFilterNode"))?;
        filter.set_type(web::BiquadFilterType::Lowpass);
        filter.frequency().set_value(cutoff_hz);
        filter
            .connect_with_audio_node(output)
            .map_err(node_err("BiquadFilterNode"))?;
        Ok(filter)
    }

    fn play_noise(
        &mut self,
        mut samples: Vec<f32>,
        input: &web::BiquadFilterNode,
    ) -> Result<WebSource, AudioError> {
        let buffer = self
            .ctx
            .create_buffer(1, samples.len() as u32, self.ctx.sample_rate())
            .map_err(|e| AudioError::Buffer(format!("{:?}", e)))?;
        buffer
            .copy_to_channel(&mut samples[..], 0)
            .map_err(|e| AudioError::Buffer(format!("{:?}", e)))?;

        let src = web::AudioBufferSourceNode::new(&self.ctx)
            .map_err(node_err("AudioBufferSourceNode"))?;
        src.set_buffer(Some(&buffer));
        src.set_loop(true);
        src.connect_with_audio_node(input)
            .map_err(node_err("AudioBufferSourceNode"))?;
        src.start().map_err(node_err("AudioBufferSourceNode"))?;
        Ok(WebSource::Buffer(src))
    }

    fn play_tone(&mut self, freq_hz: f32, output: &web::GainNode) -> Result<WebSource, AudioError> {
        let osc = web::OscillatorNode::new(&self.ctx).map_err(node_err("OscillatorNode"))?;
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(freq_hz);
        osc.connect_with_audio_node(output)
            .map_err(node_err("OscillatorNode"))?;
        osc.start().map_err(node_err("OscillatorNode"))?;
        Ok(WebSource::Oscillator(osc))
    }

    fn ramp_gain(&mut self, gain: &web::GainNode, target: f32, time_constant: f64) {
        let now = self.ctx.current_time();
        let _ = gain.gain().set_target_at_time(target, now, time_constant);
    }

    fn ramp_cutoff(&mut self, filter: &web::BiquadFilterNode, target_hz: f32, time_constant: f64) {
        let now = self.ctx.current_time();
        let _ = filter
            .frequency()
            .set_target_at_time(target_hz, now, time_constant);
    }

    fn stop(&mut self, source: WebSource, delay_sec: f64) {
        let when = self.ctx.current_time() + delay_sec;
        let _ = match source {
            WebSource::Buffer(src) => src.stop_with_when(when),
            WebSource::Oscillator(osc) => osc.stop_with_when(when),
        };
    }
}
