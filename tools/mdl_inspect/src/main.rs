//! Prints what the studio model decoder sees in an `.mdl` and its strip file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use serde::Serialize;
use studiomodel::mdl::StudioModel;
use studiomodel::vtx::StripFile;
use studiomodel::{DecodeOptions, ModelDescriptor};

#[derive(Parser)]
#[command(name = "mdl_inspect")]
#[command(about = "Decode a studio model and its strip file and print a summary", long_about = None)]
struct Cli {
  /// Path to the .mdl file
  mdl: PathBuf,

  /// Strip file to pair with the model (default: <model>.dx90.vtx next to it)
  #[arg(long)]
  vtx: Option<PathBuf>,

  /// JSON file with decode options
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Print the summary as JSON
  #[arg(long)]
  json: bool,

  /// Increase log output (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8
}

#[derive(Serialize)]
struct BodyPartSummary {
  name: String,
  models: Vec<ModelSummary>
}

#[derive(Serialize)]
struct ModelSummary {
  name: String,
  meshes: usize,
  vertices: i32,
  lods: Option<usize>
}

#[derive(Serialize)]
struct Summary {
  name: String,
  version: i32,
  checksum: i32,
  surface_prop: String,
  bones: Vec<String>,
  root_bones: Vec<usize>,
  textures: Vec<String>,
  texture_dirs: Vec<String>,
  skins: Vec<Vec<u16>>,
  body_parts: Vec<BodyPartSummary>,
  animations: Vec<String>,
  sequences: Vec<String>,
  strip_file: Option<StripSummary>
}

#[derive(Serialize)]
struct StripSummary {
  version: i32,
  lods: usize,
  max_bones_per_strip: u16,
  strip_groups: usize,
  strips: usize
}

fn load_options(path: Option<&Path>) -> Result<DecodeOptions> {
  let Some(path) = path else {
    return Ok(DecodeOptions::default());
  };
  let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
  serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn default_vtx_path(mdl: &Path) -> PathBuf {
  mdl.with_extension("dx90.vtx")
}

fn summarize_strips(strips: &StripFile) -> StripSummary {
  let groups = strips
    .body_parts
    .iter()
    .flat_map(|body_part| &body_part.models)
    .flat_map(|model| &model.lods)
    .flat_map(|lod| &lod.meshes)
    .flat_map(|mesh| &mesh.strip_groups);
  let (strip_groups, strip_count) = groups.fold((0, 0), |(groups, strips), group| (groups + 1, strips + group.strips.len()));
  StripSummary {
    version: strips.header.version,
    lods: strips.lod_count(),
    max_bones_per_strip: strips.header.max_bones_per_strip,
    strip_groups,
    strips: strip_count
  }
}

fn summarize(studio: &StudioModel, strips: Option<&StripFile>) -> Summary {
  let body_parts = studio
    .body_parts
    .iter()
    .enumerate()
    .map(|(body_part_index, body_part)| BodyPartSummary {
      name: body_part.name.clone(),
      models: body_part
        .models
        .iter()
        .enumerate()
        .map(|(model_index, model)| ModelSummary {
          name: model.name.clone(),
          meshes: model.meshes.len(),
          vertices: model.vertices_count,
          lods: strips
            .and_then(|strips| strips.body_parts.get(body_part_index))
            .and_then(|body_part| body_part.models.get(model_index))
            .map(|model| model.lods.len())
        })
        .collect()
    })
    .collect();

  Summary {
    name: studio.header2.as_ref().and_then(|header2| header2.name.clone()).unwrap_or_else(|| studio.header.name.clone()),
    version: studio.header.version,
    checksum: studio.header.checksum,
    surface_prop: studio.surface_prop.clone(),
    bones: studio.bones.iter().map(|bone| bone.name.clone()).collect(),
    root_bones: studio.root_bones().collect(),
    textures: studio.textures.iter().map(|texture| texture.name.clone()).collect(),
    texture_dirs: studio.texture_dirs.iter().map(|dir| dir.path.clone()).collect(),
    skins: studio.skin_table.families().map(|family| family.to_vec()).collect(),
    body_parts,
    animations: studio.animations.iter().map(|animation| animation.name.clone()).collect(),
    sequences: studio.sequences.iter().map(|sequence| sequence.label.clone()).collect(),
    strip_file: strips.map(summarize_strips)
  }
}

fn print_summary(summary: &Summary) {
  println!("{} (version {}, checksum {})", summary.name, summary.version, summary.checksum);
  println!("  surface prop: {}", summary.surface_prop);
  println!("  bones: {} ({} roots)", summary.bones.len(), summary.root_bones.len());
  println!("  textures: {}", summary.textures.join(", "));
  println!("  texture dirs: {}", summary.texture_dirs.join(", "));
  println!("  skin families: {}", summary.skins.len());
  for body_part in &summary.body_parts {
    println!("  body part {}", body_part.name);
    for model in &body_part.models {
      match model.lods {
        Some(lods) => println!("    {}: {} meshes, {} vertices, {} LODs", model.name, model.meshes, model.vertices, lods),
        None => println!("    {}: {} meshes, {} vertices", model.name, model.meshes, model.vertices)
      }
    }
  }
  println!("  animations: {}", summary.animations.len());
  println!("  sequences: {}", summary.sequences.len());
  if let Some(strips) = &summary.strip_file {
    println!(
      "  strip file: version {}, {} LODs, {} strip groups, {} strips",
      strips.version, strips.lods, strips.strip_groups, strips.strips
    );
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace
  };
  simple_logger::SimpleLogger::new().with_level(level).init()?;

  let options = load_options(cli.config.as_deref())?;
  debug!("Decode options: {:?}", options);

  let mdl_data = fs::read(&cli.mdl).with_context(|| format!("reading {}", cli.mdl.display()))?;
  let vtx_path = cli.vtx.clone().unwrap_or_else(|| default_vtx_path(&cli.mdl));

  let summary = if vtx_path.exists() {
    let vtx_data = fs::read(&vtx_path).with_context(|| format!("reading {}", vtx_path.display()))?;
    // No vertex file is read here, so vertex ranges cannot be checked.
    let options = DecodeOptions {
      validate_vertex_ranges: false,
      ..options
    };
    let descriptor = ModelDescriptor::decode(&mdl_data, &vtx_data, Vec::new(), &options)
      .with_context(|| format!("decoding {} with {}", cli.mdl.display(), vtx_path.display()))?;
    summarize(&descriptor.studio, Some(&descriptor.strips))
  } else {
    debug!("No strip file at {}", vtx_path.display());
    let studio = StudioModel::read_with(&mdl_data, options.version_policy).with_context(|| format!("decoding {}", cli.mdl.display()))?;
    summarize(&studio, None)
  };

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&summary)?);
  } else {
    print_summary(&summary);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_vtx_path() {
    assert_eq!(default_vtx_path(Path::new("models/alyx.mdl")), PathBuf::from("models/alyx.dx90.vtx"));
  }

  #[test]
  fn test_cli_parses() {
    let cli = Cli::parse_from(["mdl_inspect", "alyx.mdl", "-vv", "--json"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.json);
    assert!(cli.vtx.is_none());
  }
}
