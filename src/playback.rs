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

//! Playback-time selection of replacement clips.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::clip::AudioClip;
use crate::registry::SoundRegistry;

/// What the host engine should actually play for an original clip.
#[derive(Clone, Debug)]
pub enum Selection {
    /// Play this replacement clip instead of the original.
    Replacement(Arc<AudioClip>),
    /// Keep the original clip. Returned both when nothing is registered and
    /// when an under-allocated set's draw falls through.
    Original,
}

impl Selection {
    /// Returns true if the original clip should play unchanged.
    pub fn is_original(&self) -> bool {
        matches!(self, Selection::Original)
    }
}

impl SoundRegistry {
    /// Selects the clip to play for `original` using a uniform random draw.
    pub fn select(&self, original: &str) -> Selection {
        self.select_at(original, rand::thread_rng().gen::<f32>())
    }

    /// Selects the clip to play for `original` given a draw `r` in [0, 1).
    ///
    /// The walk is a first-match cumulative-threshold scheme over the set in
    /// insertion order: the first entry whose cumulative weight exceeds `r`
    /// wins. There is no renormalization; when the summed weights are below
    /// 1.0 the leftover mass falls through to the original clip.
    pub fn select_at(&self, original: &str, r: f32) -> Selection {
        let selected = self.with_entries(original, |entries| {
            let mut cumulative = 0.0f32;
            for entry in entries {
                cumulative += entry.weight();
                if r < cumulative {
                    debug!(
                        original,
                        replacement = entry.clip().name(),
                        draw = r,
                        "Replacing audio clip for playback."
                    );
                    return Selection::Replacement(Arc::clone(entry.clip()));
                }
            }
            debug!(
                original,
                draw = r,
                total = cumulative,
                "Replacement chance fell through, keeping original clip."
            );
            Selection::Original
        });

        selected.unwrap_or(Selection::Original)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Selection;
    use crate::clip::AudioClip;
    use crate::registry::SoundRegistry;

    fn clip(name: &str) -> Arc<AudioClip> {
        Arc::new(AudioClip::new(name, vec![0.0; 8], 1, 44100))
    }

    fn selected_name(selection: &Selection) -> Option<&str> {
        match selection {
            Selection::Replacement(clip) => Some(clip.name()),
            Selection::Original => None,
        }
    }

    #[test]
    fn test_no_replacements_keeps_original() {
        let registry = SoundRegistry::new();
        assert!(registry.select("Door").is_original());
        assert!(registry.select_at("Door", 0.0).is_original());
    }

    #[test]
    fn test_cumulative_threshold_selection() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-30")).expect("replace failed");
        registry.replace("Door", clip("B-70")).expect("replace failed");

        // r below the first cumulative bound selects the first entry.
        let selection = registry.select_at("Door", 0.2);
        assert_eq!(selected_name(&selection), Some("A"));

        // r between the bounds selects the second entry.
        let selection = registry.select_at("Door", 0.5);
        assert_eq!(selected_name(&selection), Some("B"));

        // The boundary itself belongs to the next entry: 0.3 is not < 0.3.
        let selection = registry.select_at("Door", 0.3);
        assert_eq!(selected_name(&selection), Some("B"));
    }

    #[test]
    fn test_under_allocated_set_falls_through() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-50")).expect("replace failed");

        assert_eq!(selected_name(&registry.select_at("Door", 0.4)), Some("A"));
        assert!(registry.select_at("Door", 0.9).is_original());
    }

    #[test]
    fn test_full_weight_entry_always_selected() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("Creak")).expect("replace failed");

        for r in [0.0, 0.25, 0.5, 0.999_999] {
            assert_eq!(selected_name(&registry.select_at("Door", r)), Some("Creak"));
        }
    }

    #[test]
    fn test_selection_after_restore_is_original() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("Creak")).expect("replace failed");
        registry.restore("Door").expect("restore failed");

        assert!(registry.select_at("Door", 0.0).is_original());
        assert!(registry.select("Door").is_original());
    }

    #[test]
    fn test_random_draws_stay_within_set() {
        let registry = SoundRegistry::new();
        registry.replace("Door", clip("A-30")).expect("replace failed");
        registry.replace("Door", clip("B-70")).expect("replace failed");

        // Weights sum to 1.0, so every draw must land on a replacement.
        for _ in 0..100 {
            assert!(!registry.select("Door").is_original());
        }
    }
}
