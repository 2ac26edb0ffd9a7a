//! Render one content item into the frame and write it to a file.

use std::path::{Path, PathBuf};

use framer_common::config::{FramerConfig, OutputFormat};
use framer_model::geometry::PanOffset;

use crate::SceneArgs;

pub async fn run(
    config: &FramerConfig,
    scene: SceneArgs,
    pan: Option<PanOffset>,
    index: usize,
    outline: bool,
    output: PathBuf,
) -> anyhow::Result<()> {
    println!("Composing into frame: {}", scene.frame.display());

    let mut studio = super::open_studio(config, &scene).await?;

    let len = studio.session().content().len();
    if index >= len {
        anyhow::bail!("Index {index} is out of range: {len} content image(s) loaded");
    }
    studio.select(index);

    if let Some(offset) = pan {
        if !studio.session().mode().is_pannable() {
            eprintln!("  --pan only affects pannable-cover mode");
        }
        studio.set_pan_offset(offset);
    }

    let format = format_for(&output);
    let bytes = studio.snapshot(outline, format)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&output, bytes).await?;

    println!("  Mode: {}", studio.session().mode());
    println!("  Item: {} of {len}", index + 1);
    println!("Saved: {}", output.display());
    Ok(())
}

/// Output format from the file extension; PNG unless it says JPEG.
fn format_for(path: &Path) -> OutputFormat {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
        .unwrap_or(OutputFormat::Png)
}
