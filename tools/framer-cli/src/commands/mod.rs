pub mod compose;
pub mod export;
pub mod layout;

use anyhow::Context;

use framer_common::config::FramerConfig;
use framer_interaction::PointerEvent;
use framer_model::geometry::{PanOffset, Point, Rect, Size};
use framer_render::{load_image, load_images, ConsoleControls, RasterSurface, Studio};

use crate::SceneArgs;

/// Studio type used by every command.
pub type CliStudio = Studio<RasterSurface, ConsoleControls>;

/// Load the frame and content, then set up the region from `--region`
/// or `--gestures`.
pub async fn open_studio(config: &FramerConfig, scene: &SceneArgs) -> anyhow::Result<CliStudio> {
    let frame = load_image(&scene.frame)
        .await
        .with_context(|| format!("Failed to load frame {}", scene.frame.display()))?;

    let loaded = load_images(&scene.content).await;
    for (path, e) in &loaded.failures {
        eprintln!("  Skipping {}: {e}", path.display());
    }
    if loaded.images.is_empty() {
        anyhow::bail!("None of the content images could be loaded");
    }

    let mut studio = Studio::from_config(RasterSurface::new(1, 1), ConsoleControls::new(), config);
    if let Some(mode) = scene.mode {
        studio.set_mode(mode);
    }
    studio.load_frame(frame);
    studio.load_content(loaded.images);

    if let Some(display) = scene.display {
        studio.set_display(Point::ORIGIN, display);
    }

    if let Some(path) = &scene.gestures {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read gestures {}", path.display()))?;
        let events: Vec<PointerEvent> =
            serde_json::from_str(&json).context("Gestures must be a JSON array of pointer events")?;
        tracing::debug!(events = events.len(), "Replaying gestures");
        for event in events {
            studio.pointer(event);
        }
    } else if let Some(region) = scene.region {
        let from = region.origin();
        let to = Point::new(region.right(), region.bottom());
        studio.pointer(PointerEvent::Down(from));
        studio.pointer(PointerEvent::Move(to));
        studio.pointer(PointerEvent::Up(to));
    }

    match studio.session().target_region() {
        Some(region) => tracing::info!(
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            "Target region"
        ),
        None => eprintln!("  No target region set; output will show the frame only"),
    }

    Ok(studio)
}

fn parse_numbers<const N: usize>(s: &str, sep: char, what: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(sep).map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("Expected {what}, got {s:?}"));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        let value: f64 = part
            .parse()
            .map_err(|_| format!("Not a number: {part:?} in {s:?}"))?;
        if !value.is_finite() {
            return Err(format!("Not a finite number: {part:?}"));
        }
        *slot = value;
    }
    Ok(out)
}

/// Parse `x,y,w,h`. Negative sizes are normalized.
pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, w, h] = parse_numbers::<4>(s, ',', "x,y,w,h")?;
    Ok(Rect::new(x, y, w, h))
}

/// Parse `WxH`.
pub fn parse_size(s: &str) -> Result<Size, String> {
    let [w, h] = parse_numbers::<2>(&s.to_ascii_lowercase(), 'x', "WxH")?;
    Ok(Size::new(w, h))
}

/// Parse `dx,dy`.
pub fn parse_pan(s: &str) -> Result<PanOffset, String> {
    let [x, y] = parse_numbers::<2>(s, ',', "dx,dy")?;
    Ok(PanOffset::new(x, y))
}
