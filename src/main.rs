use clap::Parser;
use rapc::config::PlacementConfig;
use rapc::domain::executor::Executor;
use rapc::logger;
use rapc::scheduler::result::SchedulingResult;
use serde::Serialize;

/// Runs one resource-aware placement call against a cluster fixture file.
#[derive(Debug, Parser)]
#[command(name = "rapc", about = "Resource-aware placement core")]
struct Cli {
    /// Path to a cluster fixture JSON file.
    fixture: String,

    #[arg(long, default_value_t = 1.0)]
    cpu_weight: f64,

    #[arg(long, default_value_t = 1.0)]
    mem_weight: f64,

    #[arg(long, default_value_t = 1.0)]
    network_weight: f64,
}

/// `serde_json` rejects non-string map keys, and `WorkerSlot` serializes as
/// a struct, so the assignment is flattened into a list of entries for
/// output rather than serialized as a map.
#[derive(Debug, Serialize)]
struct SlotAssignmentEntry {
    slot: String,
    executors: Vec<Executor>,
}

fn main() {
    logger::init();

    let cli = Cli::parse();
    let config = PlacementConfig { cpu_weight: cli.cpu_weight, mem_weight: cli.mem_weight, network_weight: cli.network_weight };

    log::info!("Logger initialized. Starting placement for fixture '{}'.", cli.fixture);

    match rapc::schedule_from_fixture(&cli.fixture, &config) {
        Ok(SchedulingResult::Success { assignment, message }) => {
            log::info!("{}", message);
            let entries: Vec<SlotAssignmentEntry> =
                assignment.into_iter().map(|(slot, executors)| SlotAssignmentEntry { slot: slot.to_string(), executors }).collect();
            match serde_json::to_string_pretty(&entries) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("failed to serialize assignment: {}", e),
            }
        }
        Ok(SchedulingResult::Failure { status, message }) => {
            log::error!("scheduling failed [{}]: {}", status, message);
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("failed to load fixture '{}': {}", cli.fixture, e);
            std::process::exit(2);
        }
    }
}
