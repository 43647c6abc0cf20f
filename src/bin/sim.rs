use broadside::{
    init_logging, play_match, AiPlayer, SearchPolicy, Strategy, TargetingConfig,
};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyKind {
    Random,
    Density,
    MonteCarlo,
    HunterSweep,
    HunterDensity,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::Random => "random",
            StrategyKind::Density => "density",
            StrategyKind::MonteCarlo => "monte-carlo",
            StrategyKind::HunterSweep => "hunter-sweep",
            StrategyKind::HunterDensity => "hunter-density",
        };
        f.write_str(name)
    }
}

impl StrategyKind {
    fn build(self, cfg: TargetingConfig) -> Strategy {
        match self {
            StrategyKind::Random => Strategy::Random,
            StrategyKind::Density => Strategy::Density,
            StrategyKind::MonteCarlo => Strategy::MonteCarlo(cfg),
            StrategyKind::HunterSweep => Strategy::hunter(SearchPolicy::Sweep),
            StrategyKind::HunterDensity => Strategy::hunter(SearchPolicy::Density),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "AI self-play simulator")]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Base RNG seed; game i uses seed + i.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Strategy for player 1.
    #[arg(long, value_enum, default_value_t = StrategyKind::HunterSweep)]
    player1: StrategyKind,
    /// Strategy for player 2.
    #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
    player2: StrategyKind,
    /// Monte Carlo trials per estimate.
    #[arg(long, default_value_t = 800)]
    trials: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let cfg = TargetingConfig {
        trials: cli.trials,
        ..TargetingConfig::default()
    };

    let mut wins = [0usize; 2];
    let mut winner_shots = [0usize; 2];
    for game in 0..cli.games {
        let mut rng = SmallRng::seed_from_u64(cli.seed.wrapping_add(game as u64));
        let mut p1 = AiPlayer::with_config(cli.player1.build(cfg), cfg);
        let mut p2 = AiPlayer::with_config(cli.player2.build(cfg), cfg);
        let outcome =
            play_match([&mut p1, &mut p2], &mut rng).map_err(|e| anyhow::anyhow!(e))?;
        wins[outcome.winner] += 1;
        winner_shots[outcome.winner] += outcome.shots[outcome.winner];
        log::info!(
            "game {game}: winner player{} in {} shots",
            outcome.winner + 1,
            outcome.shots[outcome.winner]
        );
    }

    let avg = |idx: usize| {
        if wins[idx] == 0 {
            None
        } else {
            Some(winner_shots[idx] as f64 / wins[idx] as f64)
        }
    };
    let report = json!({
        "games": cli.games,
        "player1": {
            "strategy": cli.player1.to_string(),
            "wins": wins[0],
            "avg_shots_to_win": avg(0),
        },
        "player2": {
            "strategy": cli.player2.to_string(),
            "wins": wins[1],
            "avg_shots_to_win": avg(1),
        },
    });
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
