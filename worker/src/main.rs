mod config;
mod host;

use anyhow::Context;
use creep_spawner::prelude::*;
use host::SimulatedRoom;
use slog::{debug, error, info, o, warn, Drain, Logger};
use std::time::{Duration, Instant};

fn init() {
    #[cfg(feature = "dotenv")]
    dep_dotenv::dotenv().unwrap_or_default();
}

#[derive(Debug, Default)]
struct Stats {
    spawned: u64,
    energy_spent: u64,
    idle: u64,
    rejected: u64,
}

fn tick(
    logger: &Logger,
    spawner: &Spawner,
    room: &mut SimulatedRoom,
    time: Time,
    stats: &mut Stats,
) {
    let start = chrono::Utc::now();

    room.tick();
    let budget = i64::from(room.energy_available());
    match spawner.run(room, budget, time) {
        DispatchOutcome::Spawned { cost, .. } => {
            stats.spawned += 1;
            stats.energy_spent += u64::from(cost);
        }
        DispatchOutcome::NothingAffordable { .. } => stats.idle += 1,
        DispatchOutcome::Rejected(SpawnError::Busy) => stats.idle += 1,
        DispatchOutcome::Rejected(err) => {
            stats.rejected += 1;
            warn!(logger, "Spawn request failed: {}", err);
        }
    }

    let duration = chrono::Utc::now() - start;
    debug!(
        logger,
        "Tick {} has been completed in {} us",
        time.0,
        duration.num_microseconds().unwrap_or(0)
    );
}

fn run(logger: Logger) -> anyhow::Result<()> {
    let conf = config::WorkerConfig::load().with_context(|| "Failed to load worker config")?;
    debug!(logger, "Worker config {}", serde_json::to_string(&conf)?);

    let spawner_conf = conf.spawner_config()?;
    let spawner = Spawner::new(logger.new(o!("component" => "spawner")), &spawner_conf)
        .with_context(|| "Failed to initialize the spawner")?;

    let mut room = SimulatedRoom::new(
        spawner_conf.prices,
        conf.energy_capacity,
        conf.energy_income,
        conf.seed,
    );
    let tick_freq = Duration::from_millis(conf.target_tick_freq_ms);

    info!(
        logger,
        "Starting with {} templates for {:?}, running {} ticks",
        spawner.catalog().len(),
        spawner.category(),
        conf.ticks
    );

    let mut stats = Stats::default();
    for t in 0..conf.ticks {
        let start = Instant::now();
        tick(&logger, &spawner, &mut room, Time(t), &mut stats);

        let sleep_duration = tick_freq
            .checked_sub(Instant::now() - start)
            .unwrap_or_else(|| Duration::from_millis(0));
        std::thread::sleep(sleep_duration);
    }

    info!(
        logger,
        "Done";
        "spawned" => stats.spawned,
        "energy_spent" => stats.energy_spent,
        "idle_ticks" => stats.idle,
        "rejected" => stats.rejected,
        "creeps" => room.creeps().count()
    );
    Ok(())
}

fn main() {
    init();

    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_envlogger::new(drain).fuse();
    let drain = slog_async::Async::new(drain)
        .overflow_strategy(slog_async::OverflowStrategy::Block)
        .build()
        .fuse();
    let logger = slog::Logger::root(drain, o!());

    if let Err(err) = run(logger.clone()) {
        error!(logger, "Worker failed: {:?}", err);
        // flush the async drain before exiting
        drop(logger);
        std::process::exit(1);
    }
}
