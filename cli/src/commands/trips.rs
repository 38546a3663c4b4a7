//! Trip browsing and search

use clap::Subcommand;

use tripline_core::{App, Trip};

#[derive(Subcommand, Debug)]
pub enum TripsCommand {
    /// List all trips, optionally filtered by category
    List {
        /// Keep only trips whose category contains this text
        #[arg(long)]
        trip_type: Option<String>,
    },
    /// Search trips by name
    Search { query: String },
}

pub async fn run(app: &App, cmd: TripsCommand) -> anyhow::Result<()> {
    let trips = match cmd {
        TripsCommand::List { trip_type: None } => app.all_trips().await?,
        TripsCommand::List {
            trip_type: Some(t),
        } => app.trips_by_type(&t).await?,
        TripsCommand::Search { query } => app.search_trips(&query).await?,
    };

    if trips.is_empty() {
        println!("No trips found");
        return Ok(());
    }

    for trip in &trips {
        print_trip(trip);
    }
    println!("{} trip(s)", trips.len());

    Ok(())
}

fn print_trip(trip: &Trip) {
    println!("#{} {} [{}]", trip.trip_id, trip.trip_name, trip.trip_type);
    println!("    {}", trip.description);

    let hours: Vec<String> = trip
        .weekly_hours()
        .into_iter()
        .map(|(day, open, close)| {
            if open == "Closed" || close == "Closed" {
                format!("{day} Closed")
            } else {
                format!("{day} {open}-{close}")
            }
        })
        .collect();
    println!("    {}", hours.join("  "));
}
