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

use symphonia::core::codecs::CODEC_TYPE_MP3;

use super::error::DecodeError;
use super::stream;
use crate::clip::{AudioClip, AudioFormat};

/// Decodes an MPEG layer 3 file into an in-memory clip. The reader walks
/// frame headers (sync word, bitrate, sample rate, channel mode), each frame
/// decodes to PCM, and the frames are concatenated in order.
pub(super) fn decode(path: &Path, clip_name: &str) -> Result<AudioClip, DecodeError> {
    let decoded = stream::decode_stream(path, AudioFormat::Mp3, &[CODEC_TYPE_MP3])?;
    Ok(AudioClip::new(
        clip_name,
        decoded.samples,
        decoded.channels,
        decoded.sample_rate,
    ))
}
