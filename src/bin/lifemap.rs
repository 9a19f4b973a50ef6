use anyhow::{anyhow, Context};
use clap::Arg;
use lifemap::{ingest, patterns, LifeMap};
use std::fs::File;
use std::io::BufReader;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let matches = clap::App::new("lifemap")
        .about("Runs Conway's Game of Life on an unbounded sparse board")
        .arg(
            Arg::with_name("file")
                .long("file")
                .takes_value(true)
                .conflicts_with_all(&["pattern", "demo"])
                .help("read live cells from a file with one `x,y` pair per line"),
        )
        .arg(
            Arg::with_name("pattern")
                .long("pattern")
                .takes_value(true)
                .conflicts_with("demo")
                .help("seed the board with a named pattern (glider, blinker, ...)"),
        )
        .arg(
            Arg::with_name("demo")
                .long("demo")
                .help("seed the board with a large sparse lattice and the four corner cells"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .takes_value(true)
                .default_value("10")
                .help("number of generations to run"),
        )
        .arg(
            Arg::with_name("log")
                .long("log")
                .takes_value(true)
                .default_value("lifemap=info")
                .help("tracing filter directives"),
        )
        .get_matches();

    use tracing_subscriber::layer::SubscriberExt;
    let filter = tracing_subscriber::EnvFilter::try_new(matches.value_of("log").unwrap_or_default())
        .context("invalid log filter")?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter),
    )
    .context("failed to install tracing subscriber")?;

    let steps: u64 = matches
        .value_of("steps")
        .unwrap_or_default()
        .parse()
        .context("--steps must be a non-negative integer")?;

    let mut map = if let Some(path) = matches.value_of("file") {
        info!(path, "reading coordinate file");
        let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
        LifeMap::from_ingested_records(ingest::collect_records(BufReader::new(file)))
    } else if let Some(name) = matches.value_of("pattern") {
        let pattern = patterns::find(name).ok_or_else(|| anyhow!("unknown pattern {:?}", name))?;
        LifeMap::from_coordinates(pattern.cells.iter().copied())
    } else if matches.is_present("demo") {
        LifeMap::from_coordinates(patterns::demo_lattice())
    } else {
        return Err(anyhow!("one of --file, --pattern or --demo is required"));
    };

    for _ in 0..steps {
        let summary = map.step();
        println!(
            "generation {}: {} alive before, {} born, {} died",
            summary.generation, summary.alive, summary.born, summary.died
        );
    }
    println!("{} cells alive after {} generations", map.living_count(), map.generation());

    Ok(())
}
