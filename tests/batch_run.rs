//! End-to-end batch runs against real TIFF files on disk.
//!
//! These tests exercise the full path: scan, decode, crop, encode, write.
//! Frames are synthetic TIFFs in temp directories; gradient frames encode
//! their own coordinates so crops can be checked pixel by pixel.

use framecrop::config::JobConfig;
use framecrop::imaging::{BackendError, BoundsPolicy, RustBackend};
use framecrop::process::{self, BatchConfig, BatchReport, CropEvent, ProcessError};
use image::codecs::tiff::TiffEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a TIFF whose pixel values encode their own coordinates.
fn write_gradient_tiff(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    write_rgb_tiff(path, &img);
}

/// Write a solid-color TIFF.
fn write_solid_tiff(path: &Path, width: u32, height: u32, color: Rgb<u8>) {
    let img = RgbImage::from_pixel(width, height, color);
    write_rgb_tiff(path, &img);
}

fn write_rgb_tiff(path: &Path, img: &RgbImage) {
    let file = fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    let encoder = TiffEncoder::new(writer);
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgb8,
        )
        .unwrap();
}

/// Fresh input/output directory pair under one temp root.
fn setup_dirs() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("frames");
    let output = tmp.path().join("cropped");
    fs::create_dir(&input).unwrap();
    fs::create_dir(&output).unwrap();
    (tmp, input, output)
}

fn batch(input: &Path, output: &Path) -> BatchConfig {
    BatchConfig {
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        job: JobConfig::default(),
    }
}

fn run(config: &BatchConfig) -> Result<BatchReport, ProcessError> {
    process::run(&RustBackend::new(), config, |_| {})
}

#[test]
fn run_crops_only_tiff_files() {
    let (_tmp, input, output) = setup_dirs();
    write_solid_tiff(&input.join("a.tiff"), 1000, 1000, Rgb([255, 0, 0]));
    fs::write(input.join("b.png"), "not a frame").unwrap();
    fs::write(input.join("notes.txt"), "log").unwrap();

    let report = run(&batch(&input, &output)).unwrap();
    assert_eq!(report.cropped, 1);

    let names: Vec<String> = fs::read_dir(&output)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.tiff"]);

    let out = image::open(output.join("a.tiff")).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (512, 96));
    assert!(out.pixels().all(|p| *p == Rgb([255, 0, 0])));
}

#[test]
fn run_output_pixels_match_source_window() {
    let (_tmp, input, output) = setup_dirs();
    write_gradient_tiff(&input.join("frame.tiff"), 800, 200);

    run(&batch(&input, &output)).unwrap();

    let src = image::open(input.join("frame.tiff")).unwrap().to_rgb8();
    let out = image::open(output.join("frame.tiff")).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (512, 96));
    for y in 0..96 {
        for x in 0..512 {
            assert_eq!(out.get_pixel(x, y), src.get_pixel(220 + x, 45 + y));
        }
    }
}

#[test]
fn run_twice_produces_identical_output() {
    let (_tmp, input, output) = setup_dirs();
    write_gradient_tiff(&input.join("frame.tiff"), 800, 200);

    let config = batch(&input, &output);
    run(&config).unwrap();
    let first = fs::read(output.join("frame.tiff")).unwrap();
    run(&config).unwrap();
    let second = fs::read(output.join("frame.tiff")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn run_pads_small_frames_with_black() {
    let (_tmp, input, output) = setup_dirs();
    write_gradient_tiff(&input.join("small.tiff"), 600, 100);

    run(&batch(&input, &output)).unwrap();

    let src = image::open(input.join("small.tiff")).unwrap().to_rgb8();
    let out = image::open(output.join("small.tiff")).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (512, 96));
    // The 380x55 the frame covers is copied
    assert_eq!(out.get_pixel(0, 0), src.get_pixel(220, 45));
    assert_eq!(out.get_pixel(379, 54), src.get_pixel(599, 99));
    // Everything beyond the frame is black
    assert_eq!(*out.get_pixel(380, 0), Rgb([0, 0, 0]));
    assert_eq!(*out.get_pixel(0, 55), Rgb([0, 0, 0]));
    assert_eq!(*out.get_pixel(511, 95), Rgb([0, 0, 0]));
}

#[test]
fn run_clamp_mode_shrinks_to_overlap() {
    let (_tmp, input, output) = setup_dirs();
    write_gradient_tiff(&input.join("small.tiff"), 600, 100);

    let mut config = batch(&input, &output);
    config.job.bounds = BoundsPolicy::Clamp;
    run(&config).unwrap();

    let src = image::open(input.join("small.tiff")).unwrap().to_rgb8();
    let out = image::open(output.join("small.tiff")).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (380, 55));
    assert_eq!(out.get_pixel(0, 0), src.get_pixel(220, 45));
}

#[test]
fn run_fail_mode_aborts_on_small_frame() {
    let (_tmp, input, output) = setup_dirs();
    write_gradient_tiff(&input.join("small.tiff"), 600, 100);

    let mut config = batch(&input, &output);
    config.job.bounds = BoundsPolicy::Fail;
    let result = run(&config);

    assert!(matches!(
        result,
        Err(ProcessError::Imaging(BackendError::Bounds { .. }))
    ));
    assert!(!output.join("small.tiff").exists());
}

#[test]
fn run_aborts_at_corrupt_frame_keeping_earlier_output() {
    let (_tmp, input, output) = setup_dirs();
    write_gradient_tiff(&input.join("a.tiff"), 800, 200);
    fs::write(input.join("b.tiff"), "not a tiff").unwrap();
    write_gradient_tiff(&input.join("c.tiff"), 800, 200);

    let mut events = Vec::new();
    let result = process::run(&RustBackend::new(), &batch(&input, &output), |e| {
        events.push(e.clone())
    });

    assert!(matches!(
        result,
        Err(ProcessError::Imaging(BackendError::Decode { .. }))
    ));
    assert!(output.join("a.tiff").exists());
    assert!(!output.join("c.tiff").exists());
    assert_eq!(events.len(), 1);
}

#[test]
fn run_missing_output_directory_is_a_write_error() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("frames");
    fs::create_dir(&input).unwrap();
    write_gradient_tiff(&input.join("a.tiff"), 800, 200);

    let result = run(&batch(&input, &tmp.path().join("no_such_dir")));
    assert!(matches!(
        result,
        Err(ProcessError::Imaging(BackendError::Write { .. }))
    ));
}

#[test]
fn run_missing_input_directory_is_a_scan_error() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("cropped");
    fs::create_dir(&output).unwrap();

    let result = run(&batch(&tmp.path().join("no_such_dir"), &output));
    assert!(matches!(result, Err(ProcessError::Scan(_))));
}

#[test]
fn run_processes_frames_in_filename_order() {
    let (_tmp, input, output) = setup_dirs();
    for name in ["c.tiff", "a.tiff", "b.tiff"] {
        write_gradient_tiff(&input.join(name), 800, 200);
    }

    let mut order = Vec::new();
    process::run(&RustBackend::new(), &batch(&input, &output), |e| {
        let CropEvent::FrameWritten { filename, .. } = e;
        order.push(filename.clone());
    })
    .unwrap();

    assert_eq!(order, vec!["a.tiff", "b.tiff", "c.tiff"]);
}

#[test]
fn run_with_directory_config_uses_its_window() {
    let (_tmp, input, output) = setup_dirs();
    write_gradient_tiff(&input.join("frame.tiff"), 800, 200);
    fs::write(
        input.join("framecrop.toml"),
        "[crop]\nleft = 10\ntop = 20\nwidth = 64\nheight = 32\n",
    )
    .unwrap();

    let job = framecrop::config::load_config(&input).unwrap();
    let config = BatchConfig {
        input_dir: input.clone(),
        output_dir: output.clone(),
        job,
    };
    process::run(&RustBackend::new(), &config, |_| {}).unwrap();

    let src = image::open(input.join("frame.tiff")).unwrap().to_rgb8();
    let out = image::open(output.join("frame.tiff")).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (64, 32));
    assert_eq!(out.get_pixel(0, 0), src.get_pixel(10, 20));
}
