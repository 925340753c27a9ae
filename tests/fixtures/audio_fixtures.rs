//! Audio Test Fixtures
//!
//! Programmatically generated audio test data. Using generated audio ensures
//! consistent, reproducible test inputs with no external file dependencies.
//!
//! Audio format: 16kHz, 16-bit signed PCM, mono.

use std::f32::consts::PI;

/// Standard sample rate (16kHz)
pub const SAMPLE_RATE: u32 = 16000;

/// Duration constants (in samples at 16kHz)
pub const MS_100: usize = 1600;
pub const MS_500: usize = 8000;
pub const SECOND: usize = 16000;

/// Generate silence (zeros)
pub fn generate_silence(duration_samples: usize) -> Vec<i16> {
    vec![0i16; duration_samples]
}

/// Generate a sine wave tone
pub fn generate_sine_wave(duration_samples: usize, frequency: f32, amplitude: f32) -> Vec<i16> {
    let max_amplitude = amplitude * i16::MAX as f32;
    let angular_freq = 2.0 * PI * frequency / SAMPLE_RATE as f32;

    (0..duration_samples)
        .map(|i| {
            let sample = (angular_freq * i as f32).sin() * max_amplitude;
            sample as i16
        })
        .collect()
}

/// Generate speech-like pattern with variable amplitude envelope
pub fn generate_speech_pattern(duration_samples: usize) -> Vec<i16> {
    let mut samples = Vec::with_capacity(duration_samples);
    let base_freq = 150.0; // Approximate fundamental frequency of speech

    // Deterministic envelope variation to simulate syllables
    let mut state: u64 = 54321;
    let mut envelope = 0.0f32;

    for i in 0..duration_samples {
        if i % 800 == 0 {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            let target = ((state >> 16) & 0x7FFF) as f32 / 0x7FFF as f32;
            envelope = envelope * 0.7 + target * 0.3;
        }

        let t = i as f32 / SAMPLE_RATE as f32;
        let fundamental = (2.0 * PI * base_freq * t).sin();
        let harmonic2 = (2.0 * PI * base_freq * 2.0 * t).sin() * 0.5;
        let harmonic3 = (2.0 * PI * base_freq * 3.0 * t).sin() * 0.25;

        let waveform = (fundamental + harmonic2 + harmonic3) / 1.75;
        let sample = (waveform * envelope * i16::MAX as f32 * 0.6) as i16;
        samples.push(sample);
    }

    samples
}

/// Convert i16 samples to little-endian bytes
pub fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Create a WAV file header for the given audio parameters
pub fn create_wav_header(num_samples: usize) -> Vec<u8> {
    let data_size = (num_samples * 2) as u32; // 16-bit = 2 bytes per sample
    let file_size = data_size + 36;
    let sample_rate = SAMPLE_RATE;
    let byte_rate = sample_rate * 2; // mono, 16-bit
    let block_align: u16 = 2;
    let bits_per_sample: u16 = 16;

    let mut header = Vec::with_capacity(44);

    // RIFF header
    header.extend_from_slice(b"RIFF");
    header.extend_from_slice(&file_size.to_le_bytes());
    header.extend_from_slice(b"WAVE");

    // fmt chunk
    header.extend_from_slice(b"fmt ");
    header.extend_from_slice(&16u32.to_le_bytes());
    header.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    header.extend_from_slice(&1u16.to_le_bytes()); // mono
    header.extend_from_slice(&sample_rate.to_le_bytes());
    header.extend_from_slice(&byte_rate.to_le_bytes());
    header.extend_from_slice(&block_align.to_le_bytes());
    header.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    header.extend_from_slice(b"data");
    header.extend_from_slice(&data_size.to_le_bytes());

    header
}

/// Create a complete WAV file
pub fn create_wav_file(samples: &[i16]) -> Vec<u8> {
    let mut wav = create_wav_header(samples.len());
    wav.extend(samples_to_bytes(samples));
    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_generation() {
        let silence = generate_silence(SECOND);
        assert_eq!(silence.len(), SECOND);
        assert!(silence.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_sine_wave_generation() {
        let sine = generate_sine_wave(SECOND, 440.0, 0.5);
        assert_eq!(sine.len(), SECOND);
        assert!(sine.iter().any(|&s| s != 0));
    }

    #[test]
    fn test_wav_file_creation() {
        let samples = generate_speech_pattern(SECOND);
        let wav = create_wav_file(&samples);

        // WAV header is 44 bytes, data is 2 bytes per sample
        assert_eq!(wav.len(), 44 + SECOND * 2);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
    }

    #[test]
    fn test_deterministic_generation() {
        let speech1 = generate_speech_pattern(1000);
        let speech2 = generate_speech_pattern(1000);
        assert_eq!(speech1, speech2);
    }
}
