//! End-to-end pipeline runs through the CLI processor

use image::{Rgb, RgbImage};
use photomosaic::io::cli::{Cli, MosaicProcessor};
use std::path::{Path, PathBuf};

fn write_solid_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    img.save(path).ok();
}

fn cli_for(source: PathBuf, tiles: PathBuf, output: PathBuf) -> Cli {
    Cli {
        source,
        tiles,
        output,
        tile_width: 4,
        tile_height: 4,
        min_cols: 10,
        max_cols: 25,
        top_k: 3,
        alpha_min: 0.18,
        alpha_max: 0.45,
        quality: 95,
        seed: Some(42),
        quiet: true,
    }
}

#[test]
fn test_pipeline_produces_output_with_expected_dimensions()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let tiles_dir = dir.path().join("tiles");
    std::fs::create_dir(&tiles_dir)?;

    for (i, color) in [[0, 0, 0], [80, 80, 80], [160, 160, 160], [255, 255, 255]]
        .iter()
        .enumerate()
    {
        write_solid_png(&tiles_dir.join(format!("tile_{i}.png")), 8, 8, *color);
    }

    let source_path = dir.path().join("source.png");
    write_solid_png(&source_path, 100, 80, [120, 120, 120]);

    let output_path = dir.path().join("out/mosaic.png");
    let cli = cli_for(source_path, tiles_dir, output_path.clone());
    MosaicProcessor::new(cli).process()?;

    // 25 columns of 4px tiles, rows following the 100x80 aspect
    let output = image::open(&output_path)?.to_rgb8();
    assert_eq!(output.dimensions(), (100, 80));
    Ok(())
}

#[test]
fn test_pipeline_is_reproducible_for_a_fixed_seed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let tiles_dir = dir.path().join("tiles");
    std::fs::create_dir(&tiles_dir)?;

    for i in 0u8..8 {
        write_solid_png(&tiles_dir.join(format!("tile_{i}.png")), 8, 8, [
            30 * i, 30 * i, 30 * i,
        ]);
    }

    let source_path = dir.path().join("source.png");
    let mut source = RgbImage::new(60, 44);
    for (x, y, pixel) in source.enumerate_pixels_mut() {
        let value = ((x * 4 + y * 3) % 256) as u8;
        *pixel = Rgb([value, value, value]);
    }
    source.save(&source_path)?;

    let first_path = dir.path().join("first.png");
    let second_path = dir.path().join("second.png");

    MosaicProcessor::new(cli_for(
        source_path.clone(),
        tiles_dir.clone(),
        first_path.clone(),
    ))
    .process()?;
    MosaicProcessor::new(cli_for(source_path, tiles_dir, second_path.clone())).process()?;

    let first = image::open(&first_path)?.to_rgb8();
    let second = image::open(&second_path)?.to_rgb8();
    assert_eq!(first, second, "same seed must yield byte-identical output");
    Ok(())
}

#[test]
fn test_pipeline_fails_without_writing_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let tiles_dir = dir.path().join("tiles");
    std::fs::create_dir(&tiles_dir)?;
    write_solid_png(&tiles_dir.join("tile.png"), 8, 8, [10, 10, 10]);

    let output_path = dir.path().join("mosaic.png");
    let cli = cli_for(
        dir.path().join("missing_source.png"),
        tiles_dir,
        output_path.clone(),
    );

    assert!(MosaicProcessor::new(cli).process().is_err());
    assert!(!output_path.exists(), "failed runs must not leave output");
    Ok(())
}

#[test]
fn test_pipeline_rejects_invalid_parameters() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cli = cli_for(
        dir.path().join("source.png"),
        dir.path().join("tiles"),
        dir.path().join("mosaic.png"),
    );
    cli.top_k = 0;

    assert!(matches!(
        MosaicProcessor::new(cli).process(),
        Err(photomosaic::MosaicError::InvalidParameter {
            parameter: "top_k",
            ..
        })
    ));
    Ok(())
}
