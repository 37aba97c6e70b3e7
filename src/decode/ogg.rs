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

use symphonia::core::codecs::CODEC_TYPE_VORBIS;

use super::error::DecodeError;
use super::stream;
use crate::clip::{AudioClip, AudioFormat};

/// Decodes an Ogg Vorbis file into an in-memory clip. The Ogg demuxer
/// reassembles packets across page boundaries and the stream length comes
/// from the final granule position, so multi-page packets and duration are
/// handled for us.
pub(super) fn decode(path: &Path, clip_name: &str) -> Result<AudioClip, DecodeError> {
    let decoded = stream::decode_stream(path, AudioFormat::Ogg, &[CODEC_TYPE_VORBIS])?;
    Ok(AudioClip::new(
        clip_name,
        decoded.samples,
        decoded.channels,
        decoded.sample_rate,
    ))
}
