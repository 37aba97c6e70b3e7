// Copyright (C) 2026 The soundswap authors
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Test fixtures: synthetic WAV files and deliberately broken containers.

use std::f32::consts::PI;
use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Writes a 16-bit integer WAV file with the given interleaved samples.
pub fn write_wav_i16(path: &Path, channels: u16, sample_rate: u32, samples: &[i16]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("unable to create fixture directory");
    }
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("unable to create wav fixture");
    for sample in samples {
        writer.write_sample(*sample).expect("unable to write sample");
    }
    writer.finalize().expect("unable to finalize wav fixture");
}

/// Writes a 32-bit float WAV file with the given interleaved samples.
pub fn write_wav_f32(path: &Path, channels: u16, sample_rate: u32, samples: &[f32]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("unable to create fixture directory");
    }
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec).expect("unable to create wav fixture");
    for sample in samples {
        writer.write_sample(*sample).expect("unable to write sample");
    }
    writer.finalize().expect("unable to finalize wav fixture");
}

/// Writes a 440 Hz sine WAV fixture with the given frame count, duplicated
/// across channels.
pub fn write_sine_wav(path: &Path, channels: u16, sample_rate: u32, frames: usize) {
    let mut samples = Vec::with_capacity(frames * channels as usize);
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let value = ((2.0 * PI * 440.0 * t).sin() * 8000.0) as i16;
        for _ in 0..channels {
            samples.push(value);
        }
    }
    write_wav_i16(path, channels, sample_rate, &samples);
}

/// Writes a file whose contents are not a valid audio container of any kind.
/// ASCII only, so it can't accidentally contain an MP3 frame sync.
pub fn write_garbage(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("unable to create fixture directory");
    }
    fs::write(path, b"this is definitely not an audio container".repeat(64))
        .expect("unable to write garbage fixture");
}
