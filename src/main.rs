// Event Classifier - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/event-classifier --events events.json
// ```
//
// Or against a fixed instant with a custom window:
//
// ```console
// $ ./target/release/event-classifier --events events.jsonl --now 2024-02-22T00:00:00Z --window-hours 48 --output-format text
// ```

use anyhow::{anyhow, Context};
use clap::Parser;
use event_classifier::classifier::{
    BucketStatistics, ClassificationView, EventClassifier, EventView, LoggingConfig,
};
use event_classifier::events::load_records;
use event_classifier::types::{Bucket, ClassifierConfig, CliArgs, OutputFormat};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match ClassifierConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::init_quiet()
    };

    // Held until exit so file output is flushed
    let _log_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    let dry_run = args.dry_run;
    let config = match ClassifierConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - events will not be classified.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run(&config) {
        error!("Classification failed: {:#}", e);
        process::exit(1);
    }
}

/// Load, classify, filter, sort and print
fn run(config: &ClassifierConfig) -> anyhow::Result<()> {
    let events_path = config.events_path.as_deref().ok_or_else(|| {
        anyhow!("No events file given (use --events or events_path in the config file)")
    })?;

    let records = load_records(events_path)
        .with_context(|| format!("Failed to load events from '{}'", events_path))?;

    let now = config.resolve_now()?;
    let classifier = EventClassifier::new(config.imminence_window()?);
    let classified = classifier.classify_at(&records, now)?;

    let category_filter = config.category_filter();
    let view = ClassificationView::build(&classified, &category_filter, config.sort_key()?);
    info!(rows = view.len(), "Built classification view");

    match config.get_output_format()? {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print_text_report(&view);
            println!("{}", BucketStatistics::from_classification(&classified).summary());
        }
    }

    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &ClassifierConfig) {
    eprintln!("Configuration:");
    eprintln!("  Events File: {}", config.events_path.as_deref().unwrap_or("(not set)"));
    eprintln!("  Imminence Window: {} hours", config.imminence_window_hours);
    eprintln!("  Category: {}", config.category_filter());
    eprintln!("  Sort Key: {}", config.sort_key);
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Reference Instant: {}", config.now.as_deref().unwrap_or("(wall clock)"));
    eprintln!();
}

/// Print each bucket as a readable list
fn print_text_report(view: &ClassificationView) {
    println!(
        "Events as of {} (category: {}, sorted by {})",
        view.now, view.category, view.sort_key
    );
    println!();

    for bucket in Bucket::ALL {
        let rows = match bucket {
            Bucket::Upcoming => &view.upcoming,
            Bucket::Imminent => &view.imminent,
            Bucket::Past => &view.past,
        };

        println!("{} ({})", bucket, rows.len());
        for row in rows {
            println!("  {}", format_row(row));
        }
        println!();
    }
}

fn format_row(row: &EventView) -> String {
    let start = row
        .start_time
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    let seats = match row.capacity {
        Some(capacity) => format!("{}/{}", row.participant_count, capacity),
        None => row.participant_count.to_string(),
    };
    let lock = if row.editable { "" } else { " [locked]" };

    format!("{}  {}  [{}]  {} going{}", start, row.title, row.category, seats, lock)
}
