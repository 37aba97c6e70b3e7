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
use crate::clip::AudioFormat;

/// Typed errors for decode failures so callers can distinguish a missing file
/// from a structurally broken container without string matching.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),

    #[error("malformed {format} container: {source}")]
    Malformed {
        format: AudioFormat,
        source: symphonia::core::errors::Error,
    },

    #[error("no {0} audio track found")]
    UnsupportedTrack(AudioFormat),

    #[error("{0} stream is missing metadata: {1}")]
    MissingMetadata(AudioFormat, &'static str),
}
