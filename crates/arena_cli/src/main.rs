use std::env;
use std::process::ExitCode;

use arena_host::{App, AudioWorker, InputScript, RunSummary, TuningFile};
use arena_shared::MutedAudio;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let tuning_path = args.get(1).map(|s| s.as_str()).unwrap_or("demos/tuning.toml");
    let script_path = args.get(2).map(|s| s.as_str()).unwrap_or("demos/duel.toml");

    match run(tuning_path, script_path) {
        Ok(summary) => {
            info!(
                outcome = ?summary.outcome,
                elapsed_ms = summary.elapsed_ms,
                ticks = summary.ticks,
                player_health = summary.player.health,
                boss_health = summary.boss.health,
                "run finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(tuning_path: &str, script_path: &str) -> arena_host::Result<RunSummary> {
    let tuning = TuningFile::load(tuning_path)?;
    let script = InputScript::load(script_path)?;
    let mut app = App::new(tuning)?;

    if !app.host_config().audio {
        return app.run_script(&script, &mut MutedAudio);
    }

    let mut audio = AudioWorker::spawn();
    let summary = app.run_script(&script, &mut audio)?;
    let stats = audio.finish()?;
    info!(played = stats.played, stopped = stats.stopped, "audio worker done");
    Ok(summary)
}
