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
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

/// The audio container formats the decoders understand.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
    Ogg,
    Mp3,
}

impl AudioFormat {
    /// Guesses a format from a sound name. The final dot-separated segment is
    /// lowercased and checked for "ogg" and "mp3" as substrings, so names like
    /// `background.mp3old` still detect as MP3. Anything else is treated as WAV.
    pub fn detect(sound_name: &str) -> AudioFormat {
        let extension = sound_name.rsplit('.').next().unwrap_or("").to_lowercase();
        if extension.contains("ogg") {
            AudioFormat::Ogg
        } else if extension.contains("mp3") {
            AudioFormat::Mp3
        } else {
            AudioFormat::Wav
        }
    }

    /// The canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Mp3 => "mp3",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioFormat::Wav => write!(f, "WAV"),
            AudioFormat::Ogg => write!(f, "Ogg Vorbis"),
            AudioFormat::Mp3 => write!(f, "MPEG MP3"),
        }
    }
}

/// A decoded audio clip: interleaved f32 PCM plus the metadata needed to play
/// it back. Immutable once produced; the sample data sits behind an Arc so
/// registry entries and callers can share it cheaply.
#[derive(Clone, Debug)]
pub struct AudioClip {
    /// The display name of the clip.
    name: String,
    /// The sample data as f32 samples (interleaved if multi-channel).
    samples: Arc<Vec<f32>>,
    /// Number of channels in the clip.
    channels: u16,
    /// Sample rate of the audio data.
    sample_rate: u32,
}

impl AudioClip {
    /// Creates a new clip from decoded samples.
    pub fn new(name: &str, samples: Vec<f32>, channels: u16, sample_rate: u32) -> AudioClip {
        AudioClip {
            name: name.to_string(),
            samples: Arc::new(samples),
            channels,
            sample_rate,
        }
    }

    /// Returns a copy of this clip under a different display name. The sample
    /// data is shared, not cloned.
    pub fn with_name(&self, name: &str) -> AudioClip {
        AudioClip {
            name: name.to_string(),
            samples: Arc::clone(&self.samples),
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }

    /// The display name of the clip.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The interleaved sample data.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// The number of channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// The sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }

    /// The playback duration, derived from the frame count and sample rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }
}

impl fmt::Display for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} channels, {} Hz, {:.3}s)",
            self.name,
            self.channels,
            self.sample_rate,
            self.duration().as_secs_f64()
        )
    }
}

/// Derives a clip display name from a sound name: the format's extension is
/// stripped (case-insensitively) and the name is cut down to the last path
/// segment, accepting both forward and backward slashes. Decode libraries
/// don't reliably carry a name through, so this is the naming path for every
/// loaded clip.
pub fn derived_clip_name(sound_name: &str, format: AudioFormat) -> String {
    let suffix = format!(".{}", format.extension());
    let stem = if sound_name.to_lowercase().ends_with(&suffix) {
        &sound_name[..sound_name.len() - suffix.len()]
    } else {
        sound_name
    };

    let mut parts: Vec<&str> = stem.split('/').collect();
    if parts.len() <= 1 {
        parts = stem.split('\\').collect();
    }
    parts.last().unwrap_or(&stem).to_string()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{derived_clip_name, AudioClip, AudioFormat};

    #[test]
    fn test_format_detection() {
        assert_eq!(AudioFormat::detect("door.wav"), AudioFormat::Wav);
        assert_eq!(AudioFormat::detect("door.ogg"), AudioFormat::Ogg);
        assert_eq!(AudioFormat::detect("door.mp3"), AudioFormat::Mp3);
        assert_eq!(AudioFormat::detect("DOOR.OGG"), AudioFormat::Ogg);
        // Substring matching, as loose as the extension sniffing has always been.
        assert_eq!(AudioFormat::detect("background.mp3old"), AudioFormat::Mp3);
        assert_eq!(AudioFormat::detect("music.oggvorbis"), AudioFormat::Ogg);
        // No recognizable extension falls back to WAV.
        assert_eq!(AudioFormat::detect("door"), AudioFormat::Wav);
        assert_eq!(AudioFormat::detect("door.flac"), AudioFormat::Wav);
    }

    #[test]
    fn test_derived_clip_name() {
        assert_eq!(derived_clip_name("door.wav", AudioFormat::Wav), "door");
        assert_eq!(derived_clip_name("Door.WAV", AudioFormat::Wav), "Door");
        assert_eq!(
            derived_clip_name("sounds/door.ogg", AudioFormat::Ogg),
            "door"
        );
        assert_eq!(
            derived_clip_name("sounds\\extra\\door.mp3", AudioFormat::Mp3),
            "door"
        );
        // The extension only comes off when it matches the detected format.
        assert_eq!(
            derived_clip_name("door.flac", AudioFormat::Wav),
            "door.flac"
        );
        assert_eq!(derived_clip_name("door", AudioFormat::Wav), "door");
    }

    #[test]
    fn test_clip_metadata() {
        let clip = AudioClip::new("door", vec![0.0; 44100 * 2], 2, 44100);
        assert_eq!(clip.name(), "door");
        assert_eq!(clip.channels(), 2);
        assert_eq!(clip.sample_rate(), 44100);
        assert_eq!(clip.frames(), 44100);
        assert_eq!(clip.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_with_name_shares_samples() {
        let clip = AudioClip::new("door-50", vec![0.25; 8], 1, 22050);
        let renamed = clip.with_name("door");
        assert_eq!(renamed.name(), "door");
        assert_eq!(renamed.samples(), clip.samples());
        assert_eq!(renamed.duration(), clip.duration());
    }
}
