use std::fs;
use std::path::PathBuf;

use ard_gltf_material::prelude::*;
use ard_log::{error, info, warn, LevelFilter, LogConfig};
use clap::Parser;
use gltf::json as gj;
use ron::ser::PrettyConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a RON list of materials to export.
    #[arg(short, long)]
    path: PathBuf,
    /// Export settings in RON. Defaults are used when omitted.
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Output path for the glTF document. The texture bake plan is written next to it.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Log every exported material.
    #[arg(long, default_value_t = false)]
    verbose: bool,
    /// Folder to write a log file into.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let log_config = LogConfig {
        filter: if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        log_dir: args.log_dir.clone(),
    };
    if let Err(err) = ard_log::init(&log_config) {
        eprintln!("unable to initialize logging: {err}");
    }

    if let Err(err) = bake(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn bake(args: &Args) -> Result<(), ExportError> {
    let settings = match &args.settings {
        Some(path) => ExportSettings::load(path)?,
        None => ExportSettings::default(),
    };

    info!("Loading materials...");
    let materials = PropertyMaterial::list_from_ron(&fs::read_to_string(&args.path)?)?;

    info!("Exporting {} materials...", materials.len());
    let mut session = ExportSession::new(settings);
    for material in &materials {
        session.export_material(material);
    }
    let output = session.finish();

    if !output.diagnostics.is_empty() {
        warn!(
            "{} textures could not be exported. See the log for details.",
            output.diagnostics.len()
        );
    }

    let mut root = gj::Root::default();
    root.asset.generator = Some(String::from("material-oven"));
    output.write_into(&mut root)?;
    output.write_textures_into(&mut root, |index, texture| {
        format!("texture_{}_{}.png", texture.handle.0, index)
    })?;

    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| args.path.with_extension("gltf"));
    fs::write(&out_path, serde_json::to_string_pretty(&root)?)?;

    // The encoder bakes each entry into the image of the same index.
    let plan_path = out_path.with_extension("bake.ron");
    fs::write(
        &plan_path,
        ron::ser::to_string_pretty(&output.textures, PrettyConfig::default())?,
    )?;

    info!(
        "Wrote {} materials to `{}` and {} textures to `{}`.",
        output.materials.len(),
        out_path.display(),
        output.textures.len(),
        plan_path.display()
    );

    Ok(())
}
