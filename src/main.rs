use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use raycaster::renderer;
use raycaster::scene::Scene;

#[derive(Parser)]
#[command(name = "raycaster", about = "Renders a sphere scene to an image file")]
struct Args {
    /// Output image path; the extension selects the container format
    output: PathBuf,

    /// JSON scene description; the built-in scene is rendered when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Suppress the per-row progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => match Scene::load(path) {
            Ok(scene) => scene,
            Err(e) => {
                error!("failed to load scene {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Scene::reference(),
    };

    info!(
        "rendering {}x{}, {} sphere(s), light intensity {}",
        scene.width,
        scene.height,
        scene.spheres.len(),
        scene.light.intensity
    );

    let bar = (!args.quiet).then(|| {
        let pb = ProgressBar::new(scene.height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")
                .unwrap(),
        );
        pb
    });

    let start = Instant::now();
    let img = renderer::render(&scene, bar.as_ref());
    if let Some(bar) = bar {
        bar.finish_with_message("render complete");
    }
    info!("rendered in {:.2?}", start.elapsed());

    if let Err(e) = img.save(&args.output) {
        error!("failed to write {}: {e}", args.output.display());
        return ExitCode::FAILURE;
    }
    info!("saved {}", args.output.display());

    ExitCode::SUCCESS
}
