use clap::{Parser, Subcommand};
use holdem_outs::core::PokerError;
use holdem_outs::holdem::{DangerRule, DrawKind, ImprovementRule, Outs, OutsConfig, Spot};
use rand::rngs::StdRng;
use rand::{SeedableRng, rng};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "outs")]
#[command(about = "Count and classify the outs of a hold'em hand")]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    /// Hero's hole cards, e.g. 9s8s
    #[arg(long, required = true)]
    hero: Option<String>,

    /// Flop or turn cards, e.g. 7s6d2c
    #[arg(long, required = true)]
    board: Option<String>,

    /// Villain's hole cards if known
    #[arg(long)]
    villain: Option<String>,

    /// Count kicker only improvements as outs
    #[arg(long)]
    kicker_outs: bool,

    /// Mark an out negative when villain gains at least as much as hero
    #[arg(long)]
    villain_gain: bool,

    /// Print the outs as json
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal a random spot with a draw and classify it
    Random {
        /// oesd, gutshot, flush, oesd-flush or gutshot-flush
        #[arg(short, long, default_value = "oesd")]
        kind: DrawKind,
        /// Seed for a repeatable deal
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = OutsConfig {
        improvement: if cli.kicker_outs {
            ImprovementRule::FullComparison
        } else {
            ImprovementRule::KickerIgnoring
        },
        danger: if cli.villain_gain {
            DangerRule::VillainGain
        } else {
            DangerRule::FinalHandBeats
        },
    };

    let spot = match &cli.command {
        Some(Commands::Random { kind, seed }) => match seed {
            Some(seed) => Spot::random_draw(*kind, &mut StdRng::seed_from_u64(*seed)),
            None => Spot::random_draw(*kind, &mut rng()),
        },
        None => Spot::parse(
            cli.hero.as_deref().unwrap_or_default(),
            cli.board.as_deref().unwrap_or_default(),
            cli.villain.as_deref(),
        ),
    };

    if let Err(e) = spot.and_then(|spot| report(&spot, &config, cli.json)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn report(spot: &Spot, config: &OutsConfig, json: bool) -> Result<(), PokerError> {
    let outs = spot.classify(config)?;
    if json {
        match serde_json::to_string_pretty(&outs) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error writing json: {e}"),
        }
        return Ok(());
    }

    println!("Hero:     {}", join(spot.hero()));
    println!("Board:    {}", join(spot.board()));
    if let Some(villain) = spot.villain() {
        println!("Villain:  {}", join(villain));
    }
    println!("Hand:     {}", spot.hero_hand()?);
    print_outs(&outs);
    Ok(())
}

fn print_outs(outs: &Outs) {
    println!("Positive: {} ({})", join(&outs.positive), outs.positive.len());
    println!("Negative: {} ({})", join(&outs.negative), outs.negative.len());
    match outs.draw_kind() {
        Some(kind) => println!("Draw:     {kind}"),
        None => println!("Draw:     -"),
    }
}

fn join(cards: &[holdem_outs::core::Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
