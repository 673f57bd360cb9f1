use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use crossterm::event::{read, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use voc_provider::common::{load_annotation, load_image, VocDataProvider};
use voc_provider::data::{Split, VocLabels};
use voc_provider::render::render_annotation;
use voc_provider::utils::files_with_extensions;

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const OVERLAY_DIR: &str = "voc_overlays";

fn usage(prog: &str) {
    eprintln!("usage:\n\t{prog} <voc_root_dir> [--split <train|val|test>]");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let result = match args.len() {
        2 => review_loop(Path::new(&args[1])),
        4 if args[2] == "--split" => match Split::from_str(&args[3]) {
            Some(split) => split_summary(Path::new(&args[1]), split),
            None => {
                usage(&args[0]);
                process::exit(-1);
            }
        },
        _ => {
            usage(&args[0]);
            process::exit(-1);
        }
    };

    if let Err(err) = result {
        log::error!("{err:#}");
        process::exit(1);
    }
}

/// Walks every image under `JPEGImages`, pairs it with its annotation by
/// filename stem, writes the box overlay, and waits for a key between
/// images. Any key advances; Esc aborts the walk.
///
/// Unlike the provider, this loop operates at batch granularity: a missing
/// annotation or an undecodable image is a warn-and-skip, not a failure.
fn review_loop(root_dir: &Path) -> anyhow::Result<()> {
    let img_dir = root_dir.join("JPEGImages");
    let anno_dir = root_dir.join("Annotations");
    let out_dir = PathBuf::from(OVERLAY_DIR);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating overlay directory {}", out_dir.display()))?;

    let img_files = files_with_extensions(&img_dir, &IMAGE_EXTENSIONS)
        .with_context(|| format!("listing images under {}", img_dir.display()))?;
    let labels = VocLabels::voc2007();

    for img_file in img_files {
        let stem = match img_file.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => continue,
        };
        let anno_file = anno_dir.join(format!("{stem}.xml"));
        if !anno_file.is_file() {
            log::warn!("anno file does not exist: {}", anno_file.display());
            continue;
        }

        let image = match load_image(&img_file) {
            Ok(image) => image,
            Err(err) => {
                log::warn!("image is invalid: {err}");
                continue;
            }
        };
        let (boxes, box_labels) = match load_annotation(&anno_file, &labels) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("anno file is invalid: {err}");
                continue;
            }
        };

        let overlay = render_annotation(&image, &boxes, &box_labels);
        let out_path = out_dir.join(format!("{stem}.png"));
        overlay
            .save(&out_path)
            .with_context(|| format!("writing overlay {}", out_path.display()))?;

        println!("image: {}", img_file.display());
        println!("anno: {}", anno_file.display());
        println!("overlay: {}  (press any key for next, Esc to quit)", out_path.display());
        if !wait_for_key()? {
            break;
        }
    }
    Ok(())
}

/// Builds a provider for `split` and prints the indexing summary plus the
/// first sample's boxes, labels and class names, writing its overlay.
fn split_summary(root_dir: &Path, split: Split) -> anyhow::Result<()> {
    let provider = VocDataProvider::new(root_dir, split, VocLabels::voc2007())?;

    println!("--------------");
    println!("length of {split} set: {}", provider.len());

    let sample = provider.get(0)?;
    println!("image size: {}x{}", sample.width(), sample.height());
    println!("boxes: {:?}", sample.boxes);
    println!("labels: {:?}", sample.labels);
    let names = sample
        .labels
        .iter()
        .map(|&label| provider.labels().label_to_name(label))
        .collect::<Result<Vec<_>, _>>()?;
    println!("names: {names:?}");
    println!("--------------");

    let out_dir = PathBuf::from(OVERLAY_DIR);
    fs::create_dir_all(&out_dir)?;
    let out_path = out_dir.join(format!("{split}_{}.png", provider.id_at(0)?));
    let overlay = render_annotation(&sample.image, &sample.boxes, &sample.labels);
    overlay
        .save(&out_path)
        .with_context(|| format!("writing overlay {}", out_path.display()))?;
    println!("overlay: {}", out_path.display());
    Ok(())
}

/// Blocks until a key press; returns `false` when the key is Esc.
fn wait_for_key() -> anyhow::Result<bool> {
    enable_raw_mode()?;
    let advance = loop {
        match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                break key.code != KeyCode::Esc;
            }
            _ => continue,
        }
    };
    disable_raw_mode()?;
    Ok(advance)
}
