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
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// The outcome of resolving a sound request against the plugin folder layout.
#[derive(Clone, Debug)]
pub struct Resolution {
    /// The candidate path to load. Only meaningful for loading when `found`
    /// is set; otherwise it names the primary path that was tried.
    pub path: PathBuf,
    /// Whether any candidate file exists on disk.
    pub found: bool,
    /// Whether the winning candidate came from the legacy flat layout.
    pub used_legacy: bool,
}

/// Resolves mod sound files on disk, supporting both the current
/// mod-manager folder layout (`<root>/<mod>/<subfolder>/<sound>`) and the
/// older flat layout (`<root>/<subfolder>/<sound>`) so mod authors are not
/// forced to migrate.
pub struct Resolver {
    plugin_root: PathBuf,
}

impl Resolver {
    /// Creates a resolver rooted at the host's plugin directory.
    pub fn new<P: Into<PathBuf>>(plugin_root: P) -> Resolver {
        Resolver {
            plugin_root: plugin_root.into(),
        }
    }

    /// The plugin root this resolver searches under.
    pub fn root(&self) -> &Path {
        &self.plugin_root
    }

    /// Resolves a sound request. Checked in order:
    ///
    /// 1. `<root>/<mod_folder>/<sub_folder>/<sound_name>` (the directory
    ///    check is advisory only and never aborts the chain);
    /// 2. `<root>/<mod_folder>/<sound_name>` when the primary file is absent;
    /// 3. `<root>/<sub_folder>/<sound_name>` - the legacy layout, which wins
    ///    over both earlier candidates when it exists.
    ///
    /// An unresolved request is a decode-skip for the caller, never fatal.
    pub fn resolve(&self, mod_folder: &str, sub_folder: &str, sound_name: &str) -> Resolution {
        let mut path = self
            .plugin_root
            .join(mod_folder)
            .join(sub_folder)
            .join(sound_name);
        let dir = self.plugin_root.join(mod_folder).join(sub_folder);
        let mod_root_path = self.plugin_root.join(mod_folder).join(sound_name);
        let legacy_dir = self.plugin_root.join(sub_folder);
        let legacy_path = self.plugin_root.join(sub_folder).join(sound_name);

        let mut found = true;
        let mut used_legacy = false;

        if !dir.is_dir() {
            if !sub_folder.is_empty() {
                warn!(
                    directory = %dir.display(),
                    "Requested directory does not exist!"
                );
            } else {
                warn!(
                    directory = %dir.display(),
                    "Requested mod directory does not exist!"
                );
                if !mod_folder.contains('-') {
                    warn!(
                        mod_folder,
                        "This sound mod might not be compatible with mod managers. \
                         You should contact the sound mod's author."
                    );
                }
            }
            found = false;
        }

        if !path.is_file() {
            warn!(path = %path.display(), "Requested audio file does not exist!");
            found = false;

            debug!(
                path = %mod_root_path.display(),
                "Looking for audio file from mod root instead..."
            );
            if mod_root_path.is_file() {
                debug!(path = %mod_root_path.display(), "Found audio file at mod root!");
                path = mod_root_path;
                found = true;
            } else {
                warn!(
                    path = %mod_root_path.display(),
                    "Requested audio file does not exist at mod root either!"
                );
            }
        }

        if legacy_dir.is_dir() {
            if !sub_folder.is_empty() {
                warn!(directory = %legacy_dir.display(), "Legacy directory location found!");
            } else if !mod_folder.contains('-') {
                warn!("Legacy directory location at the plugin root found!");
            }
        }
        if legacy_path.is_file() {
            // The legacy location always wins, even over a resolved primary
            // path, so old installs keep behaving the way they always have.
            warn!(
                path = %legacy_path.display(),
                "Legacy path contains the requested audio file!"
            );
            path = legacy_path;
            found = true;
            used_legacy = true;
        }

        Resolution {
            path,
            found,
            used_legacy,
        }
    }
}
