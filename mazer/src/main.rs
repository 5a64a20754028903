//! mazer — load or generate a maze, search it, render the result.

mod img;
mod overlay;
mod term;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use amaze_core::{Maze, MazeGen};
use amaze_search::{Searcher, Strategy};

#[derive(Parser, Debug)]
#[command(name = "mazer", version, about = "Solve text mazes with uninformed or informed search")]
struct Args {
    /// Maze file to load (see mazes/ for the format).
    #[arg(value_name = "FILE", required_unless_present = "generate")]
    file: Option<PathBuf>,

    /// Search strategy.
    #[arg(short, long, value_enum, default_value_t = Search::Breadth)]
    strategy: Search,

    /// Also mark explored cells in the rendering.
    #[arg(long)]
    explored: bool,

    /// Plain character rendering instead of colored blocks.
    #[arg(long)]
    plain: bool,

    /// Write a PNG rendering of the result to this path.
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Generate a random maze of the given size instead of loading one.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    generate: Option<(i32, i32)>,

    /// Seed for maze generation (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Proportion of open cells when generating, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.45)]
    fill: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Search {
    /// FIFO frontier; shortest path.
    Breadth,
    /// LIFO frontier; fast but not shortest.
    Depth,
    /// Priority frontier with the Manhattan heuristic.
    Best,
}

impl From<Search> for Strategy {
    fn from(search: Search) -> Self {
        match search {
            Search::Breadth => Strategy::BreadthFirst,
            Search::Depth => Strategy::DepthFirst,
            Search::Best => Strategy::BestFirst,
        }
    }
}

fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| "expected WxH, e.g. 15x11".to_string())?;
    let w: i32 = w.trim().parse().map_err(|_| format!("bad width {w:?}"))?;
    let h: i32 = h.trim().parse().map_err(|_| format!("bad height {h:?}"))?;
    if w < 1 || h < 1 {
        return Err("size must be at least 1x1".to_string());
    }
    Ok((w, h))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let maze = if let Some((width, height)) = args.generate {
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("generating {width}x{height} maze (seed {seed})");
        let mut rng = SmallRng::seed_from_u64(seed);
        let mapgen = MazeGen {
            fill_pct: args.fill,
            ..MazeGen::default()
        };
        mapgen.generate(&mut rng, width, height)?
    } else {
        let path = args.file.as_ref().ok_or("missing maze file")?;
        Maze::parse(&fs::read_to_string(path)?)?
    };

    println!("Maze:");
    term::print(&maze, None, None, args.plain);

    println!("Solving...");
    let mut searcher = Searcher::new();
    match searcher.solve(&maze, args.strategy.into()) {
        Ok(solution) => {
            let explored = args.explored.then(|| searcher.explored());
            println!("States explored: {}", searcher.explored_count());
            println!("Solution ({} moves):", solution.len());
            term::print(&maze, Some(&solution), explored, args.plain);
            if let Some(path) = &args.image {
                img::render(&maze, Some(&solution), explored).save(path)?;
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
        Err(err) => {
            println!("States explored: {}", searcher.explored_count());
            if let Some(path) = &args.image {
                let explored = args.explored.then(|| searcher.explored());
                img::render(&maze, None, explored).save(path)?;
                println!("Wrote {}", path.display());
            }
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_argument_parsing() {
        assert_eq!(parse_size("15x11"), Ok((15, 11)));
        assert_eq!(parse_size("3X4"), Ok((3, 4)));
        assert!(parse_size("15").is_err());
        assert!(parse_size("0x4").is_err());
        assert!(parse_size("axb").is_err());
    }
}
