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

//! The clip loading pipeline: resolve a sound request to a path, decode it,
//! and name the result.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::clip::{derived_clip_name, AudioClip, AudioFormat};
use crate::decode::{self, DecodeError};
use crate::registry::SoundRegistry;
use crate::resolve::Resolver;

/// Typed errors for clip loading. Both cases leave the original, unreplaced
/// clip in effect; neither should abort the host.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("audio file could not be found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Loads replacement clips from a plugin folder, recording each decoded
/// clip's format in the registry.
pub struct ClipLoader {
    resolver: Resolver,
    registry: Arc<SoundRegistry>,
}

impl ClipLoader {
    /// Creates a loader rooted at the host's plugin directory.
    pub fn new<P: Into<PathBuf>>(plugin_root: P, registry: Arc<SoundRegistry>) -> ClipLoader {
        ClipLoader {
            resolver: Resolver::new(plugin_root),
            registry,
        }
    }

    /// Loads a sound file from a mod's folder. The format comes from the
    /// caller's hint when given, otherwise from extension sniffing on the
    /// sound name. A failed resolution or decode is reported and surfaced as
    /// an error; the caller treats it as "no replacement".
    pub fn load(
        &self,
        mod_folder: &str,
        sub_folder: &str,
        sound_name: &str,
        hint: Option<AudioFormat>,
    ) -> Result<Arc<AudioClip>, LoadError> {
        let resolution = self.resolver.resolve(mod_folder, sub_folder, sound_name);

        let format = match hint {
            Some(format) => {
                debug!(sound = sound_name, %format, "File format defined by caller.");
                format
            }
            None => {
                let format = AudioFormat::detect(sound_name);
                debug!(sound = sound_name, %format, "File format detected from name.");
                format
            }
        };

        if !resolution.found {
            warn!(
                sound = sound_name,
                path = %resolution.path.display(),
                "Failed to load audio clip from invalid path!"
            );
            return Err(LoadError::NotFound {
                path: resolution.path,
            });
        }

        debug!(
            sound = sound_name,
            path = %resolution.path.display(),
            legacy = resolution.used_legacy,
            "Loading audio clip."
        );

        let name = derived_clip_name(sound_name, format);
        let clip = decode::decode_file(&resolution.path, format, &name)?;
        self.registry.record_format(clip.name(), format);

        info!(
            clip = clip.name(),
            %format,
            duration_ms = clip.duration().as_millis(),
            "Finished loading audio clip."
        );

        Ok(Arc::new(clip))
    }

    /// Loads a sound file sitting directly in the mod's folder.
    pub fn load_root(
        &self,
        mod_folder: &str,
        sound_name: &str,
        hint: Option<AudioFormat>,
    ) -> Result<Arc<AudioClip>, LoadError> {
        self.load(mod_folder, "", sound_name, hint)
    }

    /// The registry this loader records formats into.
    pub fn registry(&self) -> &Arc<SoundRegistry> {
        &self.registry
    }
}
