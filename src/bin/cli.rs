//! CLI application for face shape classification.
//!
//! Usage:
//!   face-shape <landmarks.json>                    # Human-readable output
//!   face-shape <landmarks.json> --json             # JSON report
//!   face-shape <landmarks.json> -o report.json     # Save to file
//!
//! Exit codes: 0 when a shape was classified, 1 on error, 2 when no face was
//! detected.

use clap::Parser;
use face_shape::{
    analyze, logging, Analysis, AnalysisReport, FaceShapeConfig, RecordedLandmarks,
    ReportStatus, ShapeClassifier,
};
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "face-shape")]
#[command(author, version, about = "Face shape classification and hairstyle advice", long_about = None)]
struct Args {
    /// Recorded detector output (JSON object or list of points)
    #[arg(required = true)]
    landmarks: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file with landmark indices and shape profiles
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Attach the landmark mesh to the JSON report
    #[arg(long)]
    include_landmarks: bool,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Show measurements in human-readable output and log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { args.log_level.as_str() };
    if let Err(e) = logging::init(filter, args.log_json) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match run(&args) {
        Ok(status) => std::process::exit(exit_code(status)),
        Err(e) => {
            error!(error = %e, "face-shape failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn exit_code(status: ReportStatus) -> i32 {
    match status {
        ReportStatus::Ok => 0,
        ReportStatus::Error => 1,
        ReportStatus::NoFace => 2,
    }
}

fn run(args: &Args) -> Result<ReportStatus, Box<dyn std::error::Error>> {
    let classifier = match &args.config {
        Some(path) => FaceShapeConfig::load(path)?.into_classifier()?,
        None => ShapeClassifier::default(),
    };

    debug!(path = %args.landmarks.display(), "reading landmarks");
    let input = std::fs::read(&args.landmarks)?;

    let result = analyze(&RecordedLandmarks, &classifier, &input);
    let measurements = match &result {
        Ok(Analysis::Classified { classification, .. }) => Some(classification.measurements),
        _ => None,
    };
    let report = AnalysisReport::from_result(result, args.include_landmarks);

    let output_str = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        format_human_readable(args, &report, measurements)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        debug!(path = %path.display(), "report written");
    } else {
        println!("{}", output_str);
    }

    Ok(report.status)
}

fn format_human_readable(
    args: &Args,
    report: &AnalysisReport,
    measurements: Option<face_shape::FaceMeasurements>,
) -> String {
    let mut s = String::new();

    s.push_str(&format!("Input: {}\n", args.landmarks.display()));

    let Some(shape) = report.face_shape else {
        s.push_str(&format!("\n{}\n", report.message));
        return s;
    };

    s.push_str(&format!("\nFace shape: {} ({})\n", shape, shape.localized_name()));
    if let Some(ref description) = report.description {
        s.push_str(&format!("  {}\n", description));
    }

    s.push_str("\nRecommendations:\n");
    for rec in &report.recommendations {
        s.push_str(&format!("  - {}\n", rec));
    }

    if let (true, Some(m)) = (args.verbose, measurements) {
        s.push_str("\nMeasurements:\n");
        s.push_str(&format!("  Face length:  {:.4}\n", m.face_length));
        s.push_str(&format!("  Face width:   {:.4}\n", m.face_width));
        s.push_str(&format!("  Jaw width:    {:.4}\n", m.jaw_width));
        s.push_str(&format!("  Temple width: {:.4}\n", m.temple_width));
        if let Ok(ratio) = m.ratio() {
            s.push_str(&format!("  Length/width: {:.3}\n", ratio));
        }
    }

    s
}
