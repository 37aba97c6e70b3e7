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
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{crate_version, Parser, Subcommand};

use soundswap::clip::derived_clip_name;
use soundswap::config::Pack;
use soundswap::{AudioFormat, ClipLoader, Resolver, SoundRegistry};

#[derive(Parser)]
#[clap(
    version = crate_version!(),
    about = "An audio clip substitution toolkit for game sound mods."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decodes a single audio file and prints its metadata.
    Probe {
        /// The path to the audio file.
        path: PathBuf,
    },
    /// Shows which on-disk path a sound request resolves to.
    Resolve {
        /// The plugin root directory.
        root: PathBuf,
        /// The mod folder name under the plugin root.
        mod_folder: String,
        /// The sound file name.
        sound_name: String,
        /// The subfolder within the mod folder.
        #[arg(short, long, default_value = "")]
        subfolder: String,
    },
    /// Applies a sound pack manifest and reports replacement diagnostics.
    Verify {
        /// The plugin root directory.
        root: PathBuf,
        /// The path to the pack manifest (YAML).
        pack: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Probe { path } => probe(path),
        Commands::Resolve {
            root,
            mod_folder,
            sound_name,
            subfolder,
        } => resolve(root, &mod_folder, &subfolder, &sound_name),
        Commands::Verify { root, pack } => verify(root, pack),
    }
}

/// Decodes one file and prints what the decoder makes of it.
fn probe(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let sound_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or("unreadable file name")?
        .to_string();
    let format = AudioFormat::detect(&sound_name);
    let name = derived_clip_name(&sound_name, format);

    let clip = soundswap::decode::decode_file(&path, format, &name)?;
    println!("Name: {}", clip.name());
    println!("Format: {}", format);
    println!("Channels: {}", clip.channels());
    println!("Sample rate: {} Hz", clip.sample_rate());
    println!("Frames: {}", clip.frames());
    println!("Duration: {:.3}s", clip.duration().as_secs_f64());
    Ok(())
}

/// Walks the resolution chain for a sound request and prints the outcome.
fn resolve(
    root: PathBuf,
    mod_folder: &str,
    sub_folder: &str,
    sound_name: &str,
) -> Result<(), Box<dyn Error>> {
    let resolution = Resolver::new(root).resolve(mod_folder, sub_folder, sound_name);
    println!("Path: {}", resolution.path.display());
    println!("Found: {}", resolution.found);
    println!("Legacy layout: {}", resolution.used_legacy);
    if !resolution.found {
        return Err(format!("no candidate file found for {}", sound_name).into());
    }
    Ok(())
}

/// Applies a pack manifest against a fresh registry and reports how the
/// probability mass came out per original clip.
fn verify(root: PathBuf, pack_path: PathBuf) -> Result<(), Box<dyn Error>> {
    let registry = Arc::new(SoundRegistry::new());
    let loader = ClipLoader::new(root, Arc::clone(&registry));

    let pack = Pack::from_file(&pack_path)?;
    let applied = pack.apply(&loader);
    println!(
        "Applied {}/{} replacements from {}.",
        applied,
        pack.len(),
        pack_path.display()
    );

    for original in registry.replaced_identifiers() {
        let entries = registry.replacement_count(&original);
        let total = registry.weight_total(&original).unwrap_or(0.0);
        let allocation = if (total - 1.0).abs() < f32::EPSILON {
            "fully allocated"
        } else if total < 1.0 {
            "under-allocated"
        } else {
            "over-allocated"
        };
        println!(
            "  {}: {} replacement(s), combined chance {:.0}% ({})",
            original,
            entries,
            total * 100.0,
            allocation
        );
        if let Some(replacements) = registry.replacements(&original) {
            for (name, weight) in replacements {
                let format = registry
                    .format_of(&name)
                    .map(|format| format.to_string())
                    .unwrap_or_else(|| "unknown format".to_string());
                println!("    - {} ({:.0}%, {})", name, weight * 100.0, format);
            }
        }
    }

    Ok(())
}
