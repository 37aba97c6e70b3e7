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

//! Sound pack manifests: a YAML description of a mod's clip replacements.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::clip::AudioFormat;
use crate::loader::ClipLoader;

/// Typed error for manifest load/parse failures so callers can distinguish
/// file-not-found from parse errors without string matching.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("manifest IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest parse error: {0}")]
    Parse(#[from] serde_yml::Error),
}

/// A sound pack: one mod's worth of clip replacements.
#[derive(Debug, Deserialize)]
pub struct Pack {
    /// The mod's folder name under the plugin root.
    mod_folder: String,
    /// The replacements to register.
    #[serde(default)]
    sounds: Vec<Sound>,
}

/// One replacement: a sound file registered against an original clip.
#[derive(Debug, Deserialize)]
pub struct Sound {
    /// The original clip identifier to replace.
    original: String,
    /// The sound file name, possibly with a `-<percent>` weight suffix.
    file: String,
    /// Subfolder within the mod folder.
    #[serde(default)]
    subfolder: Option<String>,
    /// Explicit weight, overriding any file name suffix.
    #[serde(default)]
    weight: Option<f32>,
    /// Explicit format, overriding extension sniffing.
    #[serde(default)]
    format: Option<AudioFormat>,
}

impl Pack {
    /// Reads a pack manifest from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Pack, ConfigError> {
        let file = File::open(path.as_ref())?;
        Ok(serde_yml::from_reader(BufReader::new(file))?)
    }

    /// Parses a pack manifest from a YAML string.
    pub fn parse(contents: &str) -> Result<Pack, ConfigError> {
        Ok(serde_yml::from_str(contents)?)
    }

    /// The mod's folder name under the plugin root.
    pub fn mod_folder(&self) -> &str {
        &self.mod_folder
    }

    /// The number of replacement definitions in the pack.
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Returns true if the pack defines no replacements.
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Loads and registers every replacement in the pack against the
    /// loader's registry, so recorded formats and replacement sets always
    /// land in the same place. Failures are logged and skipped, never
    /// partially applied; the number of successfully registered
    /// replacements is returned.
    pub fn apply(&self, loader: &ClipLoader) -> usize {
        let registry = loader.registry();
        let mut applied = 0;

        for sound in &self.sounds {
            let sub_folder = sound.subfolder.as_deref().unwrap_or("");
            let clip = match loader.load(&self.mod_folder, sub_folder, &sound.file, sound.format) {
                Ok(clip) => clip,
                Err(e) => {
                    warn!(
                        file = sound.file,
                        error = %e,
                        "Failed to load replacement sound, skipping."
                    );
                    continue;
                }
            };

            let result = match sound.weight {
                Some(weight) => registry.replace_with_weight(&sound.original, clip, weight),
                None => registry.replace(&sound.original, clip),
            };
            match result {
                Ok(()) => applied += 1,
                Err(e) => warn!(
                    original = sound.original,
                    file = sound.file,
                    error = %e,
                    "Failed to register replacement, skipping."
                ),
            }
        }

        applied
    }
}
