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

//! The replacement registry: which original clips are replaced by what, and
//! with which probability.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::clip::{AudioClip, AudioFormat};

/// Typed errors for registry operations. All of these are non-fatal: the
/// registry logs them where they are detected, callers decide whether to
/// care.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no original clip or replacement clip specified")]
    InvalidArgument,

    #[error("replacement set for {0} already contains a 100% entry")]
    ClosedSet(String),

    #[error("no replacement set registered for {0}")]
    UnknownIdentifier(String),
}

/// A single replacement candidate: a clip plus the probability mass assigned
/// to it.
#[derive(Clone)]
pub struct ReplacementEntry {
    pub(crate) clip: Arc<AudioClip>,
    pub(crate) weight: f32,
}

impl ReplacementEntry {
    /// The replacement clip.
    pub fn clip(&self) -> &Arc<AudioClip> {
        &self.clip
    }

    /// The probability weight in [0, 1].
    pub fn weight(&self) -> f32 {
        self.weight
    }
}

#[derive(Default)]
struct Inner {
    /// Replacement sets keyed by original clip identifier. Entry order is
    /// insertion order; selection depends on it.
    replaced: HashMap<String, Vec<ReplacementEntry>>,
    /// The format each loaded clip was decoded as, by clip display name.
    formats: HashMap<String, AudioFormat>,
}

/// The process-wide replacement registry. All host calls are expected to come
/// from the engine's update loop, but a single mutex over the whole mapping
/// makes the registry safe to share across threads anyway.
#[derive(Default)]
pub struct SoundRegistry {
    inner: Mutex<Inner>,
}

impl SoundRegistry {
    /// Creates an empty registry.
    pub fn new() -> SoundRegistry {
        SoundRegistry::default()
    }

    /// Registers a replacement for `original`, with the weight parsed from
    /// the clip name: a final `-<percent>` segment becomes the weight and is
    /// stripped from the stored display name, otherwise the weight is 1.0.
    /// For example a clip named `Door-50` registers as `Door` at weight 0.5.
    pub fn replace(&self, original: &str, clip: Arc<AudioClip>) -> Result<(), RegistryError> {
        let (display_name, weight) = parse_weight_suffix(clip.name());
        let clip = if display_name == clip.name() {
            clip
        } else {
            Arc::new(clip.with_name(&display_name))
        };
        self.insert(original, clip, weight)
    }

    /// Registers a replacement for `original` with an explicit weight. The
    /// clip name is stored as-is.
    pub fn replace_with_weight(
        &self,
        original: &str,
        clip: Arc<AudioClip>,
        weight: f32,
    ) -> Result<(), RegistryError> {
        self.insert(original, clip, weight)
    }

    fn insert(
        &self,
        original: &str,
        clip: Arc<AudioClip>,
        weight: f32,
    ) -> Result<(), RegistryError> {
        if original.is_empty() {
            warn!("Trying to replace an audio clip without the original clip specified!");
            return Err(RegistryError::InvalidArgument);
        }

        let mut inner = self.inner.lock().expect("unable to get lock");

        // A set holding a 100% entry is closed; nothing further may be added
        // for that identifier.
        if let Some(set) = inner.replaced.get(original) {
            if set.iter().any(|entry| entry.weight >= 1.0) {
                warn!(
                    original,
                    "Trying to replace an audio clip that already has a replacement \
                     with 100% chance of playback!"
                );
                return Err(RegistryError::ClosedSet(original.to_string()));
            }
        }

        let weight = weight.clamp(0.0, 1.0);
        let set = inner.replaced.entry(original.to_string()).or_default();
        debug!(
            original,
            replacement = clip.name(),
            weight,
            "Registering replacement clip."
        );
        set.push(ReplacementEntry { clip, weight });

        // Advisory only: report how the combined probability mass compares to
        // 100%. Under- and over-allocated sets are allowed to stay that way.
        if set.len() > 1 {
            let total: f32 = set.iter().map(|entry| entry.weight).sum();
            if (total - 1.0).abs() < f32::EPSILON {
                debug!(
                    original,
                    entries = set.len(),
                    "The combined chance of the replacement clips is exactly 100%."
                );
            } else {
                debug!(
                    original,
                    entries = set.len(),
                    total,
                    "The combined chance of the replacement clips does not equal 100% \
                     (at least yet?)"
                );
            }
        }

        Ok(())
    }

    /// Removes the first replacement entry for `original` whose weight matches
    /// `weight` exactly, in insertion order. Weights of zero or below remove
    /// nothing. Other entries are untouched.
    pub fn unregister(&self, original: &str, weight: f32) -> Result<(), RegistryError> {
        if original.is_empty() {
            warn!("Trying to unregister an audio clip without the original clip specified!");
            return Err(RegistryError::InvalidArgument);
        }

        let mut inner = self.inner.lock().expect("unable to get lock");
        let Some(set) = inner.replaced.get_mut(original) else {
            warn!(original, "Trying to unregister an audio clip that has no replacements!");
            return Err(RegistryError::UnknownIdentifier(original.to_string()));
        };

        if weight > 0.0 {
            if let Some(position) = set.iter().position(|entry| entry.weight == weight) {
                let removed = set.remove(position);
                debug!(
                    original,
                    replacement = removed.clip.name(),
                    weight,
                    "Unregistered replacement clip."
                );
            }
        }

        Ok(())
    }

    /// Removes the whole replacement set for `original`, returning playback
    /// to the original clip.
    pub fn restore(&self, original: &str) -> Result<(), RegistryError> {
        if original.is_empty() {
            warn!("Trying to restore an audio clip without the original clip specified!");
            return Err(RegistryError::InvalidArgument);
        }

        let mut inner = self.inner.lock().expect("unable to get lock");
        if inner.replaced.remove(original).is_none() {
            warn!(original, "Trying to restore an audio clip that has no replacements!");
            return Err(RegistryError::UnknownIdentifier(original.to_string()));
        }

        debug!(original, "Restored original audio clip.");
        Ok(())
    }

    /// Runs `f` over the replacement set for `original`, if one exists.
    /// Entries are in insertion order.
    pub(crate) fn with_entries<R>(
        &self,
        original: &str,
        f: impl FnOnce(&[ReplacementEntry]) -> R,
    ) -> Option<R> {
        let inner = self.inner.lock().expect("unable to get lock");
        inner.replaced.get(original).map(|set| f(set))
    }

    /// Returns the (display name, weight) pairs registered for `original`,
    /// in insertion order.
    pub fn replacements(&self, original: &str) -> Option<Vec<(String, f32)>> {
        self.with_entries(original, |set| {
            set.iter()
                .map(|entry| (entry.clip.name().to_string(), entry.weight))
                .collect()
        })
    }

    /// The number of replacement entries registered for `original`.
    pub fn replacement_count(&self, original: &str) -> usize {
        self.with_entries(original, |set| set.len()).unwrap_or(0)
    }

    /// The summed probability mass for `original`, if it has a set. Purely
    /// diagnostic.
    pub fn weight_total(&self, original: &str) -> Option<f32> {
        self.with_entries(original, |set| set.iter().map(|entry| entry.weight).sum())
    }

    /// A sorted list of all original identifiers with at least one
    /// replacement.
    pub fn replaced_identifiers(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("unable to get lock");
        let mut identifiers: Vec<String> = inner.replaced.keys().cloned().collect();
        identifiers.sort();
        identifiers
    }

    /// Returns true if no clips are replaced.
    pub fn is_empty(&self) -> bool {
        self.inner
            .lock()
            .expect("unable to get lock")
            .replaced
            .is_empty()
    }

    /// Records which format a clip was decoded as, for downstream consumers
    /// that need to know it post-hoc.
    pub fn record_format(&self, clip_name: &str, format: AudioFormat) {
        let mut inner = self.inner.lock().expect("unable to get lock");
        inner.formats.insert(clip_name.to_string(), format);
    }

    /// Looks up the format a clip was decoded as.
    pub fn format_of(&self, clip_name: &str) -> Option<AudioFormat> {
        let inner = self.inner.lock().expect("unable to get lock");
        inner.formats.get(clip_name).copied()
    }
}

/// Splits a `-<percent>` suffix off a clip name. The final dash segment must
/// parse as a non-negative integer percentage; anything else leaves the name
/// untouched at weight 1.0.
fn parse_weight_suffix(name: &str) -> (String, f32) {
    if let Some((stem, last)) = name.rsplit_once('-') {
        if let Ok(percent) = last.parse::<u32>() {
            // Divide rather than multiply by 0.01 so "-30" comes out as the
            // same f32 value a caller writing 0.3 would pass explicitly.
            return (stem.to_string(), percent as f32 / 100.0);
        }
    }
    (name.to_string(), 1.0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{parse_weight_suffix, RegistryError, SoundRegistry};
    use crate::clip::{AudioClip, AudioFormat};

    fn clip(name: &str) -> Arc<AudioClip> {
        Arc::new(AudioClip::new(name, vec![0.0; 8], 1, 44100))
    }

    #[test]
    fn test_weight_suffix_parsing() {
        assert_eq!(parse_weight_suffix("Foo-50"), ("Foo".to_string(), 0.5));
        assert_eq!(parse_weight_suffix("Foo"), ("Foo".to_string(), 1.0));
        assert_eq!(parse_weight_suffix("Foo-Bar-25"), ("Foo-Bar".to_string(), 0.25));
        // A trailing dash or non-numeric segment is part of the name.
        assert_eq!(parse_weight_suffix("Foo-"), ("Foo-".to_string(), 1.0));
        assert_eq!(parse_weight_suffix("Foo-x"), ("Foo-x".to_string(), 1.0));
        assert_eq!(parse_weight_suffix("Foo-0"), ("Foo".to_string(), 0.0));
    }

    #[test]
    fn test_replace_parses_name_weight() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("Creak-50")).expect("replace failed");

        let replacements = registry.replacements("Door").expect("no set");
        assert_eq!(replacements, vec![("Creak".to_string(), 0.5)]);
    }

    #[test]
    fn test_replace_without_suffix_is_full_weight() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("Creak")).expect("replace failed");

        let replacements = registry.replacements("Door").expect("no set");
        assert_eq!(replacements, vec![("Creak".to_string(), 1.0)]);
    }

    #[test]
    fn test_set_length_counts_successes_only() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("Creak-30")).expect("replace failed");
        registry.replace("Door", clip("Thud-30")).expect("replace failed");
        assert!(registry.replace("", clip("Nope")).is_err());
        assert_eq!(registry.replacement_count("Door"), 2);
    }

    #[test]
    fn test_closed_set_rejects_further_replacements() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("Creak")).expect("replace failed");

        let result = registry.replace("Door", clip("Thud-30"));
        assert!(matches!(result, Err(RegistryError::ClosedSet(_))));
        // The existing set is untouched.
        assert_eq!(
            registry.replacements("Door").expect("no set"),
            vec![("Creak".to_string(), 1.0)]
        );
    }

    #[test]
    fn test_explicit_weight_clamped() {
        let registry = SoundRegistry::new();
        registry
            .replace_with_weight("Door", clip("Creak"), 7.5)
            .expect("replace failed");
        registry
            .replace_with_weight("Chime", clip("Ding"), -0.5)
            .expect("replace failed");

        assert_eq!(
            registry.replacements("Door").expect("no set"),
            vec![("Creak".to_string(), 1.0)]
        );
        assert_eq!(
            registry.replacements("Chime").expect("no set"),
            vec![("Ding".to_string(), 0.0)]
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-10")).expect("replace failed");
        registry.replace("Door", clip("B-20")).expect("replace failed");
        registry.replace("Door", clip("C-30")).expect("replace failed");

        let names: Vec<String> = registry
            .replacements("Door")
            .expect("no set")
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unregister_removes_first_match_only() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-30")).expect("replace failed");
        registry.replace("Door", clip("B-30")).expect("replace failed");
        registry.replace("Door", clip("C-40")).expect("replace failed");

        registry.unregister("Door", 0.3).expect("unregister failed");
        assert_eq!(
            registry.replacements("Door").expect("no set"),
            vec![("B".to_string(), 0.3), ("C".to_string(), 0.4)]
        );
    }

    #[test]
    fn test_unregister_non_matching_weight_is_noop() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-30")).expect("replace failed");

        registry.unregister("Door", 0.5).expect("unregister failed");
        assert_eq!(registry.replacement_count("Door"), 1);
    }

    #[test]
    fn test_unregister_zero_weight_is_noop() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-0")).expect("replace failed");

        registry.unregister("Door", 0.0).expect("unregister failed");
        assert_eq!(registry.replacement_count("Door"), 1);
    }

    #[test]
    fn test_unregister_unknown_identifier() {
        let registry = SoundRegistry::new();
        let result = registry.unregister("Door", 0.5);
        assert!(matches!(result, Err(RegistryError::UnknownIdentifier(_))));
    }

    #[test]
    fn test_restore_removes_whole_set() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-30")).expect("replace failed");
        registry.replace("Door", clip("B-30")).expect("replace failed");

        registry.restore("Door").expect("restore failed");
        assert!(registry.replacements("Door").is_none());
        assert!(registry.is_empty());

        let result = registry.restore("Door");
        assert!(matches!(result, Err(RegistryError::UnknownIdentifier(_))));
    }

    #[test]
    fn test_weight_total_is_diagnostic_only() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-30")).expect("replace failed");
        registry.replace("Door", clip("B-90")).expect("replace failed");

        // Over-allocated mass is allowed to stay that way.
        let total = registry.weight_total("Door").expect("no set");
        assert!((total - 1.2).abs() < 1e-6);
        assert_eq!(registry.replacement_count("Door"), 2);
    }

    #[test]
    fn test_format_registry() {
        let registry = SoundRegistry::new();
        registry.record_format("Creak", AudioFormat::Ogg);
        assert_eq!(registry.format_of("Creak"), Some(AudioFormat::Ogg));
        assert_eq!(registry.format_of("Thud"), None);
    }

    #[test]
    fn test_replaced_identifiers_sorted() {
        let registry = SoundRegistry::new();
        registry.replace("Zap", clip("A-10")).expect("replace failed");
        registry.replace("Door", clip("B-10")).expect("replace failed");
        assert_eq!(registry.replaced_identifiers(), vec!["Door", "Zap"]);
    }
}
