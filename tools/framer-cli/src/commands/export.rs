//! Export every content item as its own image.

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use framer_common::config::{FramerConfig, OutputFormat};
use framer_render::{DirectorySink, ExportOptions, ExportProgress};

use crate::SceneArgs;

pub async fn run(
    config: &FramerConfig,
    scene: SceneArgs,
    output: Option<PathBuf>,
    settle_ms: Option<u64>,
    format: Option<OutputFormat>,
    prefix: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    println!("Exporting into frame: {}", scene.frame.display());

    let mut studio = super::open_studio(config, &scene).await?;

    let mut options = ExportOptions::from_config(&config.export);
    if let Some(ms) = settle_ms {
        options.settle_delay = Duration::from_millis(ms);
    }
    if let Some(format) = format {
        options.format = format;
    }
    if let Some(prefix) = prefix {
        options.filename_prefix = prefix;
    }
    studio.set_export_options(options);

    let output_dir = output.unwrap_or_else(|| config.export.output_dir.clone());
    println!("  Output: {}", output_dir.display());
    println!("  Mode: {}", studio.session().mode());
    println!("  Items: {}", studio.session().content().len());

    // Ctrl+C stops the batch before its next item.
    let cancel = studio.cancel_flag();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.store(true, Ordering::SeqCst);
        }
    });

    let progress_cb: Box<dyn Fn(ExportProgress) + Send> = Box::new(|p| {
        let status = if p.saved { "saved" } else { "FAILED" };
        println!("  [{}/{}] {} {status}", p.completed, p.total, p.filename);
    });

    let mut sink = DirectorySink::new(output_dir);
    let summary = studio.export_all_with_progress(&mut sink, progress_cb).await;
    watcher.abort();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let elapsed = summary.finished_at - summary.started_at;
        println!(
            "\nExport finished: {} saved, {} failed in {:.1}s",
            summary.saved.len(),
            summary.failed.len(),
            elapsed.num_milliseconds() as f64 / 1000.0
        );
        if summary.cancelled {
            println!("  Cancelled before the last item");
        }
        for failure in &summary.failed {
            println!("  {}: {}", failure.filename, failure.error);
        }
    }

    if !summary.failed.is_empty() {
        anyhow::bail!("{} item(s) failed to export", summary.failed.len());
    }
    Ok(())
}
