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
use std::path::Path;

use hound::WavReader;

use super::error::DecodeError;
use crate::clip::AudioClip;

/// Decodes a RIFF/WAVE file into an in-memory clip. hound validates the
/// chunk structure ("RIFF"/"WAVE" headers, fmt and data chunk consistency);
/// integer samples are scaled to [-1.0, 1.0], float samples pass through.
pub(super) fn decode(path: &Path, clip_name: &str) -> Result<AudioClip, DecodeError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let mut samples = Vec::with_capacity(reader.len() as usize);
    match spec.sample_format {
        hound::SampleFormat::Float => {
            // Float samples are already in the correct range.
            for sample in reader.samples::<f32>() {
                samples.push(sample?);
            }
        }
        hound::SampleFormat::Int => {
            // Use i64 for the divisor to avoid overflow on 32-bit samples.
            let scale_factor = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            for sample in reader.samples::<i32>() {
                samples.push(sample? as f32 * scale_factor);
            }
        }
    }

    Ok(AudioClip::new(
        clip_name,
        samples,
        spec.channels,
        spec.sample_rate,
    ))
}
