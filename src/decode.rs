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

//! Format-specific audio decoders.
//!
//! Each decoder is a pure function from an on-disk file to an in-memory
//! [`AudioClip`]: WAV is read directly via hound, Ogg Vorbis and MP3 share a
//! symphonia packet loop. A decode either completes or fails with a
//! [`DecodeError`]; there is no retry or cancellation.

pub mod error;
mod mp3;
mod ogg;
mod pcm;
mod stream;
mod wav;


use std::path::Path;

pub use error::DecodeError;

use crate::clip::{AudioClip, AudioFormat};

/// Decodes the audio file at `path` as `format`, producing a clip with the
/// given display name.
pub fn decode_file(
    path: &Path,
    format: AudioFormat,
    clip_name: &str,
) -> Result<AudioClip, DecodeError> {
    match format {
        AudioFormat::Wav => wav::decode(path, clip_name),
        AudioFormat::Ogg => ogg::decode(path, clip_name),
        AudioFormat::Mp3 => mp3::decode(path, clip_name),
    }
}
