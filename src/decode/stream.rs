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
use std::fs::File;
use std::path::Path;

use symphonia::core::codecs::{CodecType, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::default::{get_codecs, get_probe};

use super::error::DecodeError;
use super::pcm;
use crate::clip::AudioFormat;

/// The decoded contents of a compressed stream.
pub(super) struct DecodedStream {
    pub samples: Vec<f32>,
    pub channels: u16,
    pub sample_rate: u32,
}

/// Demuxes and decodes an entire compressed audio file via symphonia. The
/// caller names the container format it expects and the codecs acceptable for
/// that format; a file whose first audio track uses any other codec is
/// rejected rather than quietly decoded as something else.
pub(super) fn decode_stream(
    path: &Path,
    format: AudioFormat,
    allowed_codecs: &[CodecType],
) -> Result<DecodedStream, DecodeError> {
    // Include the path in the error so the user sees which file failed.
    let file = File::open(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    hint.with_extension(format.extension());

    let fmt_opts: FormatOptions = Default::default();
    let meta_opts: MetadataOptions = Default::default();
    let probed = get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|source| DecodeError::Malformed { format, source })?;
    let mut reader = probed.format;

    let track = reader
        .tracks()
        .iter()
        .find(|t| allowed_codecs.contains(&t.codec_params.codec))
        .ok_or(DecodeError::UnsupportedTrack(format))?;
    let track_id = track.id;
    let params = track.codec_params.clone();

    let sample_rate = params
        .sample_rate
        .ok_or(DecodeError::MissingMetadata(format, "sample rate"))?;

    let mut decoder = get_codecs()
        .make(&params, &DecoderOptions::default())
        .map_err(|source| DecodeError::Malformed { format, source })?;

    // Channel count usually comes from the codec parameters; when the
    // container doesn't declare it, fall back to the first decoded buffer.
    let mut channels = params.channels.map(|c| c.count() as u16).unwrap_or(0);
    let mut samples = Vec::new();

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                // End of file - we're done reading.
                break;
            }
            Err(SymphoniaError::DecodeError(_)) if !samples.is_empty() => {
                // Some readers signal EOF with a decode error once actual
                // audio has already been produced.
                break;
            }
            Err(source) => return Err(DecodeError::Malformed { format, source }),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                match decoder.decode(&packet) {
                    Ok(decoded) => decoded,
                    Err(source) => return Err(DecodeError::Malformed { format, source }),
                }
            }
            Err(source) => return Err(DecodeError::Malformed { format, source }),
        };

        let (pcm, decoded_channels) = pcm::interleave_to_f32(decoded);
        if channels == 0 {
            channels = decoded_channels as u16;
        }
        samples.extend_from_slice(&pcm);
    }

    if channels == 0 {
        return Err(DecodeError::MissingMetadata(format, "channel count"));
    }

    Ok(DecodedStream {
        samples,
        channels,
        sample_rate,
    })
}
