use database::{MatchStore, PitchLoader, TeamGenerator, TeamLoader};
use engine::{FootballEngine, MatchBatch, MatchRng, SeededRng};
use env_logger::Env;
use log::{error, info};
use std::env;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_ITERATIONS: usize = 1000;
const DEFAULT_OUTPUT: &str = "matchDetails.json";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let is_generated = env::var("MODE") == Ok(String::from("GENERATED"));

    let iterations = env_number("ITERATIONS").unwrap_or(DEFAULT_ITERATIONS);
    let matches = env_number("MATCHES").unwrap_or(1).max(1);
    let seed = env_number("SEED").unwrap_or_else(rand_seed);
    let output = env::var("OUTPUT").unwrap_or_else(|_| String::from(DEFAULT_OUTPUT));

    let pitch = match env::var("PITCH") {
        Ok(path) => PitchLoader::from_file(&path)?,
        Err(_) => PitchLoader::load_fixture()?,
    };

    let (team1, team2) = if is_generated {
        info!("generating teams from seed {}", seed);

        let mut rng = SeededRng::new(seed);
        TeamGenerator::new()?.generate_pair(&pitch, &mut rng)
    } else {
        let (fixture1, fixture2) = TeamLoader::load_fixtures()?;

        let team1 = match env::var("TEAM1") {
            Ok(path) => TeamLoader::from_file(&path)?,
            Err(_) => fixture1,
        };

        let team2 = match env::var("TEAM2") {
            Ok(path) => TeamLoader::from_file(&path)?,
            Err(_) => fixture2,
        };

        (team1, team2)
    };

    info!("{} vs {}, {} iterations per half", team1.name, team2.name, iterations);

    let engine = FootballEngine::new();

    let results = MatchBatch::new(&team1, &team2, &pitch, iterations).play_parallel(&engine, matches, seed);

    let mut last = None;

    for (idx, result) in results.into_iter().enumerate() {
        match result {
            Ok(state) => {
                info!(
                    "match {}: {} {} - {} {}",
                    idx + 1,
                    state.kick_off_team.name,
                    state.kick_off_team.statistics.goals,
                    state.second_team.statistics.goals,
                    state.second_team.name
                );

                last = Some(state);
            }
            Err(e) => error!("match {} failed: {}", idx + 1, e),
        }
    }

    if let Some(state) = last {
        MatchStore::save(&output, &state)?;
    }

    Ok(())
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}

fn rand_seed() -> u64 {
    SeededRng::from_entropy().random_int(0, i32::MAX) as u64
}
