#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use payroute::{
    classify, eligible_hop_counts, find_path, format_sats, Channel, GeneratorConfig, Network,
    NodeId, SimpleChannel,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(
    name = "payroute-cli",
    version,
    about = "Generate payment-channel networks and find routes with enough capacity"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random network and write its channels as CSV
    Generate(GenerateArgs),
    /// Find a route for a payment
    Route(RouteArgs),
}

#[derive(Args, Debug)]
struct NetworkArgs {
    /// Number of nodes
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Probability that a pair of nodes shares a channel
    #[arg(short, long)]
    probability: Option<f64>,

    /// Seed for the random generator, picked at random if omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    network: NetworkArgs,

    /// Output CSV file, stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RouteArgs {
    #[command(flatten)]
    network: NetworkArgs,

    /// Read channels from this CSV file instead of generating a network
    #[arg(short, long, conflicts_with_all = ["probability", "seed"])]
    input: Option<PathBuf>,

    /// Paying node, as an index (`3`) or a label (`D`)
    #[arg(long, value_parser = parse_node)]
    source: NodeId,

    /// Receiving node, as an index (`3`) or a label (`D`)
    #[arg(long, value_parser = parse_node)]
    target: NodeId,

    /// Payment amount in satoshis
    #[arg(short, long)]
    amount: u64,
}

fn parse_node(s: &str) -> Result<NodeId, String> {
    s.parse::<usize>()
        .map(NodeId)
        .ok()
        .or_else(|| NodeId::from_label(s))
        .ok_or_else(|| format!("`{s}` is neither a node index nor a node label"))
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // a logger can only fail to initialise if one is already set
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn generate_network(args: &NetworkArgs) -> Result<Network<u64>, Box<dyn Error>> {
    let defaults = GeneratorConfig::default();
    let config = GeneratorConfig::new(
        args.nodes.unwrap_or(defaults.node_count),
        args.probability.unwrap_or(defaults.channel_probability),
    )
    .map_err(|e| e.to_string())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("generating {config:?} with seed {seed}");

    let network = config
        .generate(&mut StdRng::seed_from_u64(seed))
        .map_err(|e| e.to_string())?;
    Ok(network)
}

// Function to read the channels from a CSV file
fn read_channels_csv(
    filepath: &Path,
    nodes: Option<usize>,
) -> Result<Network<u64>, Box<dyn Error>> {
    let network = read_channels(File::open(filepath)?, nodes)?;
    log::info!(
        "read {} channels over {} nodes from {}",
        network.channels().len(),
        network.node_count(),
        filepath.display()
    );
    Ok(network)
}

// Without an explicit node count the network ends at the highest referenced node
fn read_channels<R: Read>(rdr: R, nodes: Option<usize>) -> Result<Network<u64>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(rdr);
    let channels: Vec<SimpleChannel<u64>> = rdr.deserialize().collect::<Result<_, _>>()?;

    let node_count = nodes.unwrap_or_else(|| {
        channels
            .iter()
            .map(|c| c.start().index().max(c.end().index()) + 1)
            .max()
            .unwrap_or(0)
    });

    Ok(Network::new(node_count, channels).map_err(|e| e.to_string())?)
}

// Function to write the channels as CSV
fn write_channels_csv<W: Write>(network: &Network<u64>, wtr: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(wtr);
    for channel in network.channels() {
        wtr.serialize(channel)?;
    }
    wtr.flush()?;
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let network = generate_network(&args.network)?;

    let summary = network.summary();
    log::info!(
        "{} nodes, {} channels, {} isolated, {} components",
        summary.node_count,
        summary.channel_count,
        summary.isolated_nodes,
        summary.component_count
    );
    for (class, count) in network.class_counts() {
        log::info!("{class:?} channels: {count}");
    }

    match &args.output {
        Some(path) => write_channels_csv(&network, File::create(path)?),
        None => write_channels_csv(&network, io::stdout().lock()),
    }
}

fn route(args: &RouteArgs) -> Result<(), Box<dyn Error>> {
    let network = match &args.input {
        Some(path) => read_channels_csv(path, args.network.nodes)?,
        None => generate_network(&args.network)?,
    };
    network
        .ensure_contains(args.source)
        .and_then(|()| network.ensure_contains(args.target))
        .map_err(|e| e.to_string())?;

    let reachable = eligible_hop_counts(&network, args.source, args.amount);
    log::info!(
        "{} of {} nodes reachable from {} for {}",
        reachable.len().saturating_sub(1),
        network.node_count() - 1,
        args.source.label(),
        format_sats(args.amount)
    );

    match find_path(&network, args.source, args.target, args.amount).map_err(|e| e.to_string())? {
        Some(path) => {
            println!("{path}");
            for (a, b) in path.hop_pairs() {
                if let Some(channel) = network.channel_between(a, b) {
                    println!(
                        "  {} -> {}: {} ({:?})",
                        a.label(),
                        b.label(),
                        format_sats(channel.capacity()),
                        classify(channel.capacity())
                    );
                }
            }
        }
        None => println!(
            "no route from {} to {} for {}",
            args.source.label(),
            args.target.label(),
            format_sats(args.amount)
        ),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Route(args) => route(args),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use payroute::{Error as RouteError, RawChannel};

    use super::*;

    fn network(node_count: usize, channels: &[(usize, usize, u64)]) -> Network<u64> {
        let channels = channels
            .iter()
            .map(|&(s, e, c)| SimpleChannel::new(NodeId(s), NodeId(e), c).unwrap())
            .collect();
        Network::new(node_count, channels).unwrap()
    }

    fn to_csv(network: &Network<u64>) -> Vec<u8> {
        let mut buf = Vec::new();
        write_channels_csv(network, &mut buf).unwrap();
        buf
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn nodes_by_index_or_label() {
        assert_eq!(parse_node("3"), Ok(NodeId(3)));
        assert_eq!(parse_node("D"), Ok(NodeId(3)));
        assert_eq!(parse_node("d"), Ok(NodeId(3)));
        assert_eq!(parse_node("AA"), Ok(NodeId(26)));
        assert!(parse_node("3x").is_err());
        assert!(parse_node("").is_err());
    }

    #[test]
    fn channels_survive_a_csv_round_trip() {
        let net = network(4, &[(0, 1, 10_000_000), (2, 1, 200_000_000), (3, 0, 5_000_000)]);
        let buf = to_csv(&net);

        assert!(buf.starts_with(b"start,end,capacity\n0,1,10000000\n"));

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let channels: Vec<SimpleChannel<u64>> =
            rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(channels, net.channels());

        assert_eq!(read_channels(buf.as_slice(), None).unwrap(), net);
    }

    #[test]
    fn node_count_on_import() {
        let net = network(6, &[(0, 1, 10_000_000), (1, 2, 10_000_000)]);
        let buf = to_csv(&net);

        // trailing isolated nodes are only kept with an explicit count
        assert_eq!(read_channels(buf.as_slice(), None).unwrap().node_count(), 3);
        assert_eq!(read_channels(buf.as_slice(), Some(6)).unwrap(), net);
        assert!(read_channels(buf.as_slice(), Some(2)).is_err());
        assert!(read_channels(&b"start,end,capacity\n"[..], None).is_err());
    }

    #[test]
    fn rejects_malformed_rows() {
        assert_eq!(
            SimpleChannel::try_from(RawChannel {
                start: NodeId(2),
                end: NodeId(2),
                capacity: 10_000_000u64,
            }),
            Err(RouteError::ChannelToSelf)
        );

        let self_channel = &b"start,end,capacity\n0,1,10\n2,2,10\n"[..];
        assert!(read_channels(self_channel, None).is_err());

        let zero_capacity = &b"start,end,capacity\n0,1,0\n"[..];
        assert!(read_channels(zero_capacity, None).is_err());

        let duplicate = &b"start,end,capacity\n0,1,10\n1,0,20\n"[..];
        assert!(read_channels(duplicate, None).is_err());
    }

    #[test]
    fn input_file_excludes_generator_options() {
        let base = ["payroute-cli", "route", "--source", "0", "--target", "1", "-a", "5"];
        let parse = |extra: &[&str]| Cli::try_parse_from(base.iter().chain(extra));

        assert!(parse(&["--input", "net.csv"]).is_ok());
        assert!(parse(&["--input", "net.csv", "--nodes", "4"]).is_ok());
        assert!(parse(&["--input", "net.csv", "--probability", "0.5"]).is_err());
        assert!(parse(&["--input", "net.csv", "--seed", "7"]).is_err());
        assert!(parse(&["--probability", "0.5", "--seed", "7"]).is_ok());
    }

    #[test]
    fn out_of_range_nodes_are_reported_not_panicked_on() {
        let path = std::env::temp_dir().join(format!("payroute-{}.csv", std::process::id()));
        std::fs::write(&path, to_csv(&network(3, &[(0, 1, 10_000_000)]))).unwrap();

        let args = RouteArgs {
            network: NetworkArgs {
                nodes: None,
                probability: None,
                seed: None,
            },
            input: Some(path.clone()),
            source: NodeId(usize::MAX),
            target: NodeId(1),
            amount: 1,
        };
        let err = route(&args).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            err.to_string(),
            format!("Node {} is out of range for a network of 2 nodes", usize::MAX)
        );
    }
}
