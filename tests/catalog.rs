//! Validates tile library loading, normalization, and representative colors

use image::{Rgb, RgbImage};
use photomosaic::MosaicError;
use photomosaic::catalog::TileCatalog;
use std::fs;

fn solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

#[test]
fn test_tiles_normalize_to_fixed_size() -> photomosaic::Result<()> {
    // Mixed input sizes and aspect ratios all land on the same cell size
    let images = vec![
        solid_image(100, 50, [200, 10, 10]),
        solid_image(7, 31, [10, 200, 10]),
        solid_image(40, 40, [10, 10, 200]),
    ];
    let catalog = TileCatalog::from_images(images, 40, 40)?;

    assert_eq!(catalog.len(), 3);
    for index in 0..catalog.len() {
        assert!(
            catalog
                .tile(index)
                .is_some_and(|tile| tile.pixels().dimensions() == (40, 40))
        );
    }
    Ok(())
}

#[test]
fn test_mean_color_of_solid_tile_is_exact() -> photomosaic::Result<()> {
    let catalog = TileCatalog::from_images(vec![solid_image(10, 8, [13, 130, 213])], 4, 4)?;

    let colors = catalog.colors();
    assert_eq!(colors.len(), 1);
    let color = colors.first().copied().unwrap_or_default();
    for (channel, expected) in color.iter().zip([13.0f32, 130.0, 213.0]) {
        assert!(
            (channel - expected).abs() < 1.5,
            "mean channel {channel} too far from {expected}"
        );
    }
    Ok(())
}

#[test]
fn test_colors_preserve_catalog_order() -> photomosaic::Result<()> {
    let catalog = TileCatalog::from_images(
        vec![
            solid_image(4, 4, [250, 0, 0]),
            solid_image(4, 4, [0, 250, 0]),
        ],
        4,
        4,
    )?;

    let colors = catalog.colors();
    assert!(colors.first().is_some_and(|c| c.first().copied().unwrap_or(0.0) > 200.0));
    assert!(colors.get(1).is_some_and(|c| c.get(1).copied().unwrap_or(0.0) > 200.0));
    Ok(())
}

#[test]
fn test_empty_image_list_is_an_error() {
    assert!(matches!(
        TileCatalog::from_images(vec![], 40, 40),
        Err(MosaicError::EmptyLibrary { .. })
    ));
}

#[test]
fn test_load_skips_unreadable_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    solid_image(8, 8, [50, 60, 70]).save(dir.path().join("a.png"))?;
    solid_image(8, 8, [70, 60, 50]).save(dir.path().join("b.png"))?;
    // Valid extension with junk content: skipped and counted
    fs::write(dir.path().join("c.png"), b"not an image")?;
    // Unrecognized extension: ignored entirely
    fs::write(dir.path().join("notes.txt"), b"readme")?;

    let catalog = TileCatalog::load(dir.path(), 4, 4)?;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.skipped_files(), 1);
    Ok(())
}

#[test]
fn test_load_of_empty_directory_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("broken.jpg"), b"junk")?;

    let result = TileCatalog::load(dir.path(), 4, 4);
    assert!(matches!(
        result,
        Err(MosaicError::EmptyLibrary { skipped: 1, .. })
    ));
    Ok(())
}

#[test]
fn test_load_of_missing_directory_is_an_error() {
    let result = TileCatalog::load(std::path::Path::new("/nonexistent/tiles"), 4, 4);
    assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
}
