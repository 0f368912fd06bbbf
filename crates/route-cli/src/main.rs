//! `route-cli` — load a binary snapshot and issue a single route or TSP
//! query from the command line.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use route_core::NodeId;
use route_facade::factory::vehicle_profile;
use route_facade::{PathfindingFacade, TspFacade};
use route_graph::codec::load_snapshot;

#[derive(Parser, Debug)]
#[command(name = "route-cli", about = "Query a routing-engine snapshot from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Single-source single-target shortest path.
    Route {
        #[arg(long)]
        snapshot: String,
        #[arg(long, default_value = "dijkstra")]
        algorithm: String,
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        from: i64,
        #[arg(long)]
        to: i64,
    },
    /// Fixed-start tour through a list of waypoints.
    Tsp {
        #[arg(long)]
        snapshot: String,
        #[arg(long, default_value = "dijkstra")]
        algorithm: String,
        #[arg(long, default_value = "ig")]
        solver: String,
        #[arg(long)]
        profile: Option<String>,
        #[arg(long, value_delimiter = ',')]
        waypoints: Vec<i64>,
        #[arg(long, default_value_t = false)]
        closed: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { snapshot, algorithm, profile, from, to } => {
            let graph = load_snapshot(&snapshot, None, None).with_context(|| format!("loading {snapshot}"))?;
            let profile = profile.map(|name| vehicle_profile(&name)).transpose()?;
            let facade = PathfindingFacade::new(Arc::new(graph));

            let result = facade.find_path(NodeId::new(from), NodeId::new(to), &algorithm, profile.as_ref())?;

            println!("algorithm:       {}", result.algorithm);
            println!("edges:           {}", result.edges.len());
            println!("total distance:  {:.1} m", result.total_distance);
            println!("nodes explored:  {}", result.nodes_explored);
            println!("wall time:       {:?}", result.wall_time);
            let path: Vec<String> = result.nodes.iter().map(|n| n.value().to_string()).collect();
            println!("path:            {}", path.join(" -> "));
        }

        Command::Tsp { snapshot, algorithm, solver, profile, waypoints, closed } => {
            let graph = load_snapshot(&snapshot, None, None).with_context(|| format!("loading {snapshot}"))?;
            let profile = profile.map(|name| vehicle_profile(&name)).transpose()?;
            let facade = TspFacade::new(Arc::new(graph));

            let waypoints: Vec<NodeId> = waypoints.into_iter().map(NodeId::new).collect();
            let result = facade.solve(waypoints, &algorithm, &solver, profile.as_ref(), closed, None)?;

            println!("solver:          {}", result.algorithm);
            println!("total distance:  {:.1} m", result.total_distance);
            println!("precompute time: {:?}", result.precompute_time);
            println!("solve time:      {:?}", result.solve_time);
            let tour: Vec<String> = result.waypoints.iter().map(|n| n.value().to_string()).collect();
            println!("tour:            {}", tour.join(" -> "));
        }
    }

    Ok(())
}
