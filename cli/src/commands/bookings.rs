//! Booking submission

use clap::{Args, Subcommand};

use tripline_core::{App, BookingForm};

use super::parse_date;

#[derive(Subcommand, Debug)]
pub enum BookCommand {
    /// Show the vehicles and booking types available on the booking form
    Options,
    /// Submit a booking request
    Submit(BookArgs),
}

#[derive(Args, Debug)]
pub struct BookArgs {
    /// Vehicle to book (see `book options`)
    #[arg(long)]
    pub vehicle: i64,

    /// Booking type (see `book options`)
    #[arg(long)]
    pub booking_type: Option<i64>,

    #[arg(long)]
    pub passengers: u32,

    /// Departure, YYYY-MM-DD or RFC 3339
    #[arg(long)]
    pub departure: String,

    /// First day of the trail
    #[arg(long)]
    pub start: String,

    /// Last day of the trail
    #[arg(long)]
    pub end: String,

    #[arg(long)]
    pub pickup: String,

    #[arg(long)]
    pub dropoff: String,

    /// Contact full name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    /// Stop stations, comma separated
    #[arg(long, default_value = "")]
    pub stops: String,

    #[arg(long, default_value = "")]
    pub notes: String,
}

pub async fn run(app: &App, cmd: BookCommand) -> anyhow::Result<()> {
    match cmd {
        BookCommand::Options => print_options(app).await,
        BookCommand::Submit(args) => submit(app, args).await,
    }
}

async fn submit(app: &App, args: BookArgs) -> anyhow::Result<()> {
    let form = BookingForm {
        vehicle_id: args.vehicle,
        booking_type_id: args.booking_type,
        passengers: args.passengers,
        departure_time: parse_date(&args.departure)?,
        start_trail_date: parse_date(&args.start)?,
        end_trail_date: parse_date(&args.end)?,
        pickup_address: args.pickup,
        drop_off_address: args.dropoff,
        full_name: args.name,
        email: args.email,
        phone_number: args.phone,
        stop_stations: args.stops,
        notes: args.notes,
    };

    let booking = app.book(form).await?;
    println!(
        "Booking #{} submitted ({} passengers, departing {})",
        booking.booking_id,
        booking.passengers,
        booking.departure_time.format("%Y-%m-%d"),
    );

    Ok(())
}

async fn print_options(app: &App) -> anyhow::Result<()> {
    let (vehicles, types) = app.booking_options().await?;

    println!("Vehicles:");
    for vehicle in &vehicles {
        println!(
            "  #{} {} ({}, {})",
            vehicle.vehicle_id,
            vehicle.label(),
            vehicle.vehicle_type,
            vehicle.year,
        );
    }

    println!("Booking types:");
    for booking_type in &types {
        println!(
            "  #{} {}",
            booking_type.booking_type_id, booking_type.type_name
        );
    }

    Ok(())
}
