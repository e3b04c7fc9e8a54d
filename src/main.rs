use threadcounty_rs::analysis::{AnalysisConfig, MeasurementUnit, ThreadCounter};
use threadcounty_rs::logger;

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    info!("Starting threadcounty...");

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "fabric.jpg".to_string());
    let unit = match args.next() {
        Some(raw) => raw.parse::<MeasurementUnit>()?,
        None => MeasurementUnit::Cm,
    };
    let reference_length = match args.next() {
        Some(raw) => raw.parse::<f64>()?,
        None => 1.0,
    };

    let config = AnalysisConfig::builder()
        .unit(unit)
        .reference_length(reference_length)
        .build();
    let counter = ThreadCounter::new(config)?;

    info!("Thread counter initialized");
    info!("Unit: {}", counter.config().unit);
    info!("Reference length: {}", counter.config().reference_length);

    match counter.analyze_file(&input) {
        Ok(result) => {
            info!(
                "Warp: {}, Weft: {}, Density: {:.1} threads/{}",
                result.warp_count,
                result.weft_count,
                result.thread_density,
                result.measurement_unit
            );
            info!("Confidence: {:.2}", result.confidence_score);
            std::fs::write("overlay.jpg", &result.visualization)?;
            info!("Detection overlay written to overlay.jpg");
        }
        Err(e) => error!("Analysis failed: {}", e),
    }

    Ok(())
}
