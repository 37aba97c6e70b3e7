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
use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};

/// Converts a decoded AudioBufferRef to interleaved f32 samples and returns
/// the channel count observed in the decoded buffer.
pub(super) fn interleave_to_f32(decoded: AudioBufferRef) -> (Vec<f32>, usize) {
    match decoded {
        AudioBufferRef::F32(buf) => interleave_planar(&buf, |sample| sample),
        AudioBufferRef::F64(buf) => interleave_planar(&buf, |sample| sample as f32),
        AudioBufferRef::S8(buf) => interleave_planar(&buf, scale_s8),
        AudioBufferRef::S16(buf) => interleave_planar(&buf, scale_s16),
        AudioBufferRef::S24(buf) => interleave_planar(&buf, |sample| scale_s24(sample.inner())),
        AudioBufferRef::S32(buf) => interleave_planar(&buf, scale_s32),
        AudioBufferRef::U8(buf) => interleave_planar(&buf, scale_u8),
        AudioBufferRef::U16(buf) => interleave_planar(&buf, scale_u16),
        AudioBufferRef::U24(buf) => interleave_planar(&buf, |sample| scale_u24(sample.inner())),
        AudioBufferRef::U32(buf) => interleave_planar(&buf, scale_u32),
    }
}

/// Interleaves planar samples from a generic AudioBuffer. The closure converts
/// a single sample value to f32.
fn interleave_planar<T, F>(buf: &AudioBuffer<T>, convert: F) -> (Vec<f32>, usize)
where
    T: symphonia::core::sample::Sample,
    F: Fn(T) -> f32,
{
    let frames = buf.frames();
    let channels = buf.spec().channels.count();
    let planes = buf.planes();
    let mut samples = Vec::with_capacity(frames * channels);
    for frame_idx in 0..frames {
        for ch_idx in 0..channels {
            samples.push(convert(planes.planes()[ch_idx][frame_idx]));
        }
    }
    (samples, channels)
}

// Scaling helpers for the integer formats. `pub(super)` so they can be
// validated directly in unit tests.

#[inline]
pub(super) fn scale_s8(sample: i8) -> f32 {
    sample as f32 / (1i64 << 7) as f32
}

#[inline]
pub(super) fn scale_s16(sample: i16) -> f32 {
    sample as f32 / (1i64 << 15) as f32
}

#[inline]
pub(super) fn scale_s24(sample: i32) -> f32 {
    sample as f32 / (1i64 << 23) as f32
}

#[inline]
pub(super) fn scale_s32(sample: i32) -> f32 {
    sample as f32 / (1i64 << 31) as f32
}

#[inline]
pub(super) fn scale_u8(sample: u8) -> f32 {
    (sample as f32 / u8::MAX as f32) * 2.0 - 1.0
}

#[inline]
pub(super) fn scale_u16(sample: u16) -> f32 {
    (sample as f32 / u16::MAX as f32) * 2.0 - 1.0
}

#[inline]
pub(super) fn scale_u24(sample: u32) -> f32 {
    let max = (1u32 << 24) - 1;
    (sample as f32 / max as f32) * 2.0 - 1.0
}

#[inline]
pub(super) fn scale_u32(sample: u32) -> f32 {
    (sample as f32 / u32::MAX as f32) * 2.0 - 1.0
}
