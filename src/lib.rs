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

//! Runtime audio clip substitution for game sound mods.
//!
//! This crate is the core a host engine calls into: it resolves replacement
//! sound files on disk (mod-manager and legacy folder layouts), decodes
//! WAV/OGG/MP3 into in-memory PCM clips, registers replacements against
//! original clip identifiers with probability weights, and performs the
//! weighted playback selection. The host's lifecycle hooks (scene loads,
//! audio source patching) sit outside this crate and drive it through
//! [`ClipLoader`] and [`SoundRegistry`].

pub mod clip;
pub mod config;
pub mod decode;
pub mod loader;
pub mod playback;
pub mod registry;
pub mod resolve;

#[cfg(test)]
mod testutil;

pub use clip::{AudioClip, AudioFormat};
pub use loader::{ClipLoader, LoadError};
pub use playback::Selection;
pub use registry::{RegistryError, SoundRegistry};
pub use resolve::{Resolution, Resolver};
