use lowpoly::config::load_config;
use lowpoly::image::io::{load_rgb_image, write_json_file};
use lowpoly::LowPolyRenderer;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: lowpoly <config.json>".to_string()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input)?;
    let renderer = LowPolyRenderer::new(config.render.clone())?;
    let report = renderer.convert(&image.as_view(), &config.input, &config.output_dir())?;

    println!("{}", report.summary_line());
    for stage in &report.timings.stages {
        println!("  {:<12} {:>9.3} ms", stage.label, stage.elapsed_ms);
    }
    if let Some(out) = &report.output {
        println!("SVG written to {}", out.display());
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}
