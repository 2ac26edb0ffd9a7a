use framer_common::config::{FramerConfig, OutputFormat};
use framer_interaction::PointerEvent;
use framer_model::fit_mode::FitMode;
use framer_model::geometry::{PanOffset, Point, Rect, Size};
use framer_render::{
    decode_image, CommandRecorder, Compositor, DecodedImage, DirectorySink, ExportOptions,
    NoopControls, RasterSurface, Studio, Surface,
};
use image::{Rgba, RgbaImage};

const FRAME: [u8; 4] = [200, 200, 200, 255];
const LEFT: [u8; 4] = [255, 0, 0, 255];
const RIGHT: [u8; 4] = [0, 0, 255, 255];

/// 20x10 image: left half red, right half blue.
fn split_image() -> DecodedImage {
    let mut pixels = RgbaImage::from_pixel(20, 10, Rgba(LEFT));
    for y in 0..10 {
        for x in 10..20 {
            pixels.put_pixel(x, y, Rgba(RIGHT));
        }
    }
    DecodedImage::new(pixels)
}

fn studio(mode: FitMode) -> Studio<RasterSurface, NoopControls> {
    let mut studio = Studio::new(RasterSurface::new(1, 1), NoopControls, mode);
    studio.load_frame(DecodedImage::solid(60, 40, FRAME));
    studio.load_content(vec![split_image()]);
    drag(&mut studio, Point::new(10.0, 10.0), Point::new(30.0, 30.0));
    studio
}

fn drag(studio: &mut Studio<RasterSurface, NoopControls>, from: Point, to: Point) {
    studio.pointer(PointerEvent::Down(from));
    studio.pointer(PointerEvent::Move(to));
    studio.pointer(PointerEvent::Up(to));
}

#[test]
fn render_is_idempotent() {
    let mut studio = studio(FitMode::PannableCover);
    studio.render();
    let first = studio.surface().snapshot(OutputFormat::Png).unwrap();
    studio.render();
    let second = studio.surface().snapshot(OutputFormat::Png).unwrap();
    assert_eq!(first, second);
}

#[test]
fn contain_letterboxes_inside_region() {
    let studio = studio(FitMode::Contain);
    // 20x10 into 20x20: placed at y 15..25, frame shows above and below.
    assert_eq!(studio.surface().pixel(15, 13), Some(FRAME));
    assert_eq!(studio.surface().pixel(15, 20), Some(LEFT));
    assert_eq!(studio.surface().pixel(25, 20), Some(RIGHT));
    assert_eq!(studio.surface().pixel(15, 27), Some(FRAME));
}

#[test]
fn pan_drag_clamps_to_image_edge() {
    let mut studio = studio(FitMode::PannableCover);
    // Cover crops a 10x10 window centered on the seam: both colors visible.
    assert_eq!(studio.surface().pixel(14, 20), Some(LEFT));
    assert_eq!(studio.surface().pixel(26, 20), Some(RIGHT));

    // Drag far right: the window clamps to the right half.
    drag(&mut studio, Point::new(20.0, 20.0), Point::new(25.0, 20.0));
    assert_eq!(studio.session().pan_offset(), PanOffset::new(5.0, 0.0));
    assert_eq!(studio.surface().pixel(14, 20), Some(RIGHT));
    assert_eq!(studio.surface().pixel(26, 20), Some(RIGHT));

    drag(&mut studio, Point::new(20.0, 20.0), Point::new(29.0, 20.0));
    assert_eq!(studio.surface().pixel(14, 20), Some(RIGHT));
}

#[test]
fn mode_switch_resets_pan() {
    let mut studio = studio(FitMode::PannableCover);
    drag(&mut studio, Point::new(20.0, 20.0), Point::new(25.0, 22.0));
    assert!(!studio.session().pan_offset().is_zero());
    studio.set_mode(FitMode::Tile);
    assert!(studio.session().pan_offset().is_zero());
}

#[test]
fn command_recorder_matches_layout() {
    let mut session = framer_model::session::Session::new(FitMode::Tile);
    session.set_frame(DecodedImage::solid(100, 100, FRAME));
    session.set_content(vec![DecodedImage::solid(30, 30, LEFT)]);
    session.commit_region(Rect::new(0.0, 0.0, 100.0, 50.0));

    let mut surface = CommandRecorder::new(Size::new(100.0, 100.0));
    let report = Compositor::default()
        .render(&mut surface, &session, false)
        .unwrap();
    assert_eq!(report.plan.tile_count(), 8);
    assert_eq!(surface.image_draws(), 9);
}

#[tokio::test]
async fn batch_export_writes_decodable_files() {
    let dir = std::env::temp_dir().join(format!("framer-pipeline-{}", std::process::id()));
    let mut studio = Studio::from_config(
        RasterSurface::new(1, 1),
        NoopControls,
        &FramerConfig::default(),
    );
    studio.set_export_options(ExportOptions {
        settle_delay: std::time::Duration::from_millis(5),
        ..ExportOptions::default()
    });
    studio.load_frame(DecodedImage::solid(60, 40, FRAME));
    studio.load_content(vec![split_image(), DecodedImage::solid(4, 4, LEFT)]);
    drag(&mut studio, Point::new(10.0, 10.0), Point::new(30.0, 30.0));

    let mut sink = DirectorySink::new(&dir);
    let summary = studio.export_all(&mut sink).await;
    assert!(summary.is_complete());
    assert_eq!(summary.saved, vec!["framed-photo-1.png", "framed-photo-2.png"]);

    for path in sink.written() {
        let bytes = tokio::fs::read(path).await.unwrap();
        let image = decode_image(&bytes).unwrap();
        assert_eq!(image.dimensions(), (60, 40));
        // Region edge: no outline in saved output.
        assert_ne!(image.pixels().get_pixel(20, 10).0, [0x1e, 0x90, 0xff, 0xff]);
    }

    tokio::fs::remove_dir_all(&dir).await.ok();
}
