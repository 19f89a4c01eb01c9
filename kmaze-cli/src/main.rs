use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kmaze::{MazeSpec, RunningGame, SearchMode, Step};
use kmaze_cli::{logging, parse_moves, renderer, settings, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Walk the maze with --moves
    Manual,
}

impl Mode {
    fn search_mode(self) -> Option<SearchMode> {
        match self {
            Mode::Bfs => Some(SearchMode::BreadthFirst),
            Mode::Dfs => Some(SearchMode::DepthFirst),
            Mode::Manual => None,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "kmaze")]
struct Args {
    #[clap(short = 'W', long, help = "Maze width [default: 10]")]
    width: Option<i32>,
    #[clap(short = 'H', long, help = "Maze height [default: 10]")]
    height: Option<i32>,
    #[clap(short, long, help = "Seed for deterministic generation")]
    seed: Option<u64>,
    #[clap(long, help = "Read size and seed from a ron file, flags take precedence")]
    spec: Option<PathBuf>,
    #[clap(short, long, value_enum, default_value = "bfs")]
    mode: Mode,
    #[clap(long, default_value = "", help = "Moves for manual mode, e.g. RRDDLU")]
    moves: String,
    #[clap(long, help = "Stop the search after this many ticks")]
    steps: Option<usize>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    logging::init(logging::level_from_verbosity(args.verbose));
    better_panic::install();

    let mut spec = match &args.spec {
        Some(path) => settings::load_spec(path)?,
        None => MazeSpec::new(10, 10),
    };
    if let Some(width) = args.width {
        spec.size.0 = width;
    }
    if let Some(height) = args.height {
        spec.size.1 = height;
    }
    if args.seed.is_some() {
        spec.seed = args.seed;
    }
    let spec = spec.seeded();

    let mut game = RunningGame::generate(spec)?;
    println!(
        "{}x{} maze, seed {}",
        spec.size.0,
        spec.size.1,
        spec.seed.unwrap_or_default()
    );

    match args.mode.search_mode() {
        Some(mode) => {
            game.begin_search(mode)?;

            let limit = args.steps.unwrap_or(usize::MAX);
            let mut ticks = 0;
            while ticks < limit && game.advance()? == Step::Continue {
                ticks += 1;
                if game.get_search().map_or(0, |s| s.frontier_len()) == 0 {
                    break;
                }
            }
            log::info!("search stopped after {} ticks", ticks);
        }
        None => {
            game.start_manual()?;
            for dir in parse_moves(&args.moves)? {
                let before = game.get_player_pos();
                let after = game.move_player_dir(dir)?;
                if before == after {
                    log::info!("{:?} from {:?} is blocked", dir, before);
                }
                if game.is_solved() {
                    break;
                }
            }
        }
    }

    print!("{}", renderer::render(&game));

    if game.is_solved() {
        match args.mode.search_mode() {
            None => println!("solved in {} moves", game.get_move_count()),
            Some(_) => println!(
                "solved: visited {} cells, path has {} cells",
                game.visited().len(),
                game.solution().len()
            ),
        }
    } else {
        println!("not solved, visited {} cells", game.visited().len());
    }

    Ok(())
}
