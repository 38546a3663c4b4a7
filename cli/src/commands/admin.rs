//! Admin surfaces for trips, vehicles, drivers, users, and bookings
//!
//! Every subcommand re-checks the session role before touching the API.
//! Updates follow the fetch-prefill-resubmit shape of the remote service:
//! the current record is fetched, the provided flags overwrite fields, and
//! the full record goes back up.

use anyhow::Context;
use clap::{Args, Subcommand};

use tripline_core::validate::{normalize_hours, validate_driver, validate_trip, validate_vehicle};
use tripline_core::{search, App, Booking, BookingStatus, Driver, NewTrip, NewVehicle};

use super::{confirm_delete, parse_date};

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    #[command(subcommand)]
    Trips(TripCommand),
    #[command(subcommand)]
    Vehicles(VehicleCommand),
    #[command(subcommand)]
    Drivers(DriverCommand),
    #[command(subcommand)]
    Users(UserCommand),
    #[command(subcommand)]
    Bookings(BookingCommand),
}

pub async fn run(app: &App, cmd: AdminCommand) -> anyhow::Result<()> {
    app.require_admin()?;

    match cmd {
        AdminCommand::Trips(cmd) => trips(app, cmd).await,
        AdminCommand::Vehicles(cmd) => vehicles(app, cmd).await,
        AdminCommand::Drivers(cmd) => drivers(app, cmd).await,
        AdminCommand::Users(cmd) => users(app, cmd).await,
        AdminCommand::Bookings(cmd) => bookings(app, cmd).await,
    }
}

/// `"08:00,08:00,,,,,"` -> one entry per weekday, blanks becoming Closed.
fn parse_hours(input: &str) -> Vec<String> {
    let slots: Vec<String> = input.split(',').map(|s| s.trim().to_string()).collect();
    normalize_hours(&slots)
}

// === Trips ===

#[derive(Subcommand, Debug)]
pub enum TripCommand {
    /// Create a trip
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        trip_type: String,
        #[arg(long)]
        description: String,
        /// Opening hours per weekday (Sun first), comma separated
        #[arg(long, default_value = "")]
        open: String,
        /// Closing hours per weekday, comma separated
        #[arg(long, default_value = "")]
        close: String,
    },
    /// Update a trip; omitted flags keep the current values
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        trip_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        open: Option<String>,
        #[arg(long)]
        close: Option<String>,
    },
    /// Delete a trip
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

async fn trips(app: &App, cmd: TripCommand) -> anyhow::Result<()> {
    match cmd {
        TripCommand::Add {
            name,
            trip_type,
            description,
            open,
            close,
        } => {
            let trip = NewTrip {
                trip_name: name,
                trip_type,
                description,
                open_hour: parse_hours(&open),
                close_hour: parse_hours(&close),
            };
            validate_trip(&trip)?;
            app.api().create_trip(&trip).await?;
            println!("Trip created");
        }
        TripCommand::Update {
            id,
            name,
            trip_type,
            description,
            open,
            close,
        } => {
            let current = app
                .all_trips()
                .await?
                .into_iter()
                .find(|t| t.trip_id == id)
                .with_context(|| format!("Trip {id} not found"))?;

            let trip = NewTrip {
                trip_name: name.unwrap_or(current.trip_name),
                trip_type: trip_type.unwrap_or(current.trip_type),
                description: description.unwrap_or(current.description),
                open_hour: match open {
                    Some(hours) => parse_hours(&hours),
                    None => normalize_hours(&current.open_hour),
                },
                close_hour: match close {
                    Some(hours) => parse_hours(&hours),
                    None => normalize_hours(&current.close_hour),
                },
            };
            validate_trip(&trip)?;
            app.api().update_trip(id, &trip).await?;
            println!("Trip {id} updated");
        }
        TripCommand::Delete { id, yes } => {
            confirm_delete("trip", yes)?;
            app.api().delete_trip(id).await?;
            println!("Trip {id} deleted");
        }
    }
    Ok(())
}

// === Vehicles ===

#[derive(Args, Debug)]
pub struct VehicleFields {
    #[arg(long)]
    pub make: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub km: Option<i64>,
    #[arg(long)]
    pub vehicle_type: Option<String>,
    #[arg(long)]
    pub plate: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum VehicleCommand {
    /// List the fleet
    List,
    /// Add a vehicle (all fields required)
    Add(VehicleFields),
    /// Update a vehicle; omitted flags keep the current values
    Update {
        id: i64,
        #[command(flatten)]
        fields: VehicleFields,
    },
    /// Delete a vehicle
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

impl VehicleFields {
    /// Merge over an existing record; defaults are used for `Add`.
    fn merge(self, base: NewVehicle) -> NewVehicle {
        NewVehicle {
            make: self.make.unwrap_or(base.make),
            model: self.model.unwrap_or(base.model),
            year: self.year.unwrap_or(base.year),
            km: self.km.unwrap_or(base.km),
            vehicle_type: self.vehicle_type.unwrap_or(base.vehicle_type),
            car_plate_number: self.plate.unwrap_or(base.car_plate_number),
        }
    }
}

fn empty_vehicle() -> NewVehicle {
    NewVehicle {
        make: String::new(),
        model: String::new(),
        year: 0,
        km: 0,
        vehicle_type: String::new(),
        car_plate_number: String::new(),
    }
}

async fn vehicles(app: &App, cmd: VehicleCommand) -> anyhow::Result<()> {
    match cmd {
        VehicleCommand::List => {
            for vehicle in app.api().all_vehicles().await? {
                println!(
                    "#{} {} ({}, {}, {} km, plate {})",
                    vehicle.vehicle_id,
                    vehicle.label(),
                    vehicle.vehicle_type,
                    vehicle.year,
                    vehicle.km,
                    vehicle.car_plate_number,
                );
            }
        }
        VehicleCommand::Add(fields) => {
            let vehicle = fields.merge(empty_vehicle());
            validate_vehicle(&vehicle)?;
            app.api().create_vehicle(&vehicle).await?;
            println!("Vehicle created");
        }
        VehicleCommand::Update { id, fields } => {
            let current = app
                .api()
                .all_vehicles()
                .await?
                .into_iter()
                .find(|v| v.vehicle_id == id)
                .with_context(|| format!("Vehicle {id} not found"))?;

            let vehicle = fields.merge(NewVehicle {
                make: current.make,
                model: current.model,
                year: current.year,
                km: current.km,
                vehicle_type: current.vehicle_type,
                car_plate_number: current.car_plate_number,
            });
            validate_vehicle(&vehicle)?;
            app.api().update_vehicle(id, &vehicle).await?;
            println!("Vehicle {id} updated");
        }
        VehicleCommand::Delete { id, yes } => {
            confirm_delete("vehicle", yes)?;
            app.api().delete_vehicle(id).await?;
            println!("Vehicle {id} deleted");
        }
    }
    Ok(())
}

// === Drivers ===

#[derive(Args, Debug)]
pub struct DriverFields {
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub language: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub license: Option<String>,
    /// License expiration date, YYYY-MM-DD
    #[arg(long)]
    pub license_expiration: Option<String>,
}

impl DriverFields {
    fn merge(self, base: Driver) -> Driver {
        Driver {
            user_id: base.user_id,
            full_name: self.full_name.unwrap_or(base.full_name),
            username: self.username.unwrap_or(base.username),
            email: self.email.unwrap_or(base.email),
            password: self.password.or(base.password),
            language: self.language.unwrap_or(base.language),
            country: self.country.unwrap_or(base.country),
            city: self.city.unwrap_or(base.city),
            driving_license: self.license.unwrap_or(base.driving_license),
            driving_license_expiration: self
                .license_expiration
                .unwrap_or(base.driving_license_expiration),
        }
    }
}

fn empty_driver() -> Driver {
    Driver {
        user_id: None,
        full_name: String::new(),
        username: String::new(),
        email: String::new(),
        password: None,
        language: String::new(),
        country: String::new(),
        city: String::new(),
        driving_license: String::new(),
        driving_license_expiration: String::new(),
    }
}

#[derive(Subcommand, Debug)]
pub enum DriverCommand {
    /// List drivers
    List,
    /// Add a driver (all fields required)
    Add(DriverFields),
    /// Update a driver by userID; omitted flags keep the current values
    Update {
        id: i64,
        #[command(flatten)]
        fields: DriverFields,
    },
    /// Delete a driver by userID
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

async fn drivers(app: &App, cmd: DriverCommand) -> anyhow::Result<()> {
    match cmd {
        DriverCommand::List => {
            for driver in app.api().all_drivers().await? {
                println!(
                    "#{} {} (@{}) license {} until {}",
                    driver.user_id.unwrap_or_default(),
                    driver.full_name,
                    driver.username,
                    driver.driving_license,
                    driver.driving_license_expiration,
                );
            }
        }
        DriverCommand::Add(fields) => {
            let driver = fields.merge(empty_driver());
            validate_driver(&driver)?;
            app.api().create_driver(&driver).await?;
            println!("Driver created");
        }
        DriverCommand::Update { id, fields } => {
            let current = app
                .api()
                .all_drivers()
                .await?
                .into_iter()
                .find(|d| d.user_id == Some(id))
                .with_context(|| format!("Driver {id} not found"))?;

            let driver = fields.merge(current);
            validate_driver(&driver)?;
            app.api().update_driver(id, &driver).await?;
            println!("Driver {id} updated");
        }
        DriverCommand::Delete { id, yes } => {
            confirm_delete("driver", yes)?;
            app.api().delete_driver(id).await?;
            println!("Driver {id} deleted");
        }
    }
    Ok(())
}

// === Users ===

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List users, optionally filtered by full name
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Edit a user; omitted flags keep the current values
    Edit {
        id: i64,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        user_type_id: Option<i64>,
    },
    /// Delete a user
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

async fn users(app: &App, cmd: UserCommand) -> anyhow::Result<()> {
    match cmd {
        UserCommand::List { search: query } => {
            let mut all = app.api().all_users().await?;
            if let Some(query) = query {
                all = search::filter_users_by_name(all, &query);
            }
            for user in all {
                println!(
                    "#{} {} (@{}, {}) {}",
                    user.user_id,
                    user.full_name,
                    user.username,
                    user.email,
                    user.user_type.unwrap_or_default(),
                );
            }
        }
        UserCommand::Edit {
            id,
            full_name,
            username,
            email,
            password,
            language,
            country,
            city,
            user_type_id,
        } => {
            let mut user = app
                .api()
                .all_users()
                .await?
                .into_iter()
                .find(|u| u.user_id == id)
                .with_context(|| format!("User {id} not found"))?;

            if let Some(v) = full_name {
                user.full_name = v;
            }
            if let Some(v) = username {
                user.username = v;
            }
            if let Some(v) = email {
                user.email = v;
            }
            if let Some(v) = password {
                user.password = Some(v);
            }
            if let Some(v) = language {
                user.language = v;
            }
            if let Some(v) = country {
                user.country = v;
            }
            if let Some(v) = city {
                user.city = v;
            }
            if let Some(v) = user_type_id {
                user.user_type_id = Some(v);
            }

            app.api().edit_user(id, &user).await?;
            println!("User {id} updated");
        }
        UserCommand::Delete { id, yes } => {
            confirm_delete("user", yes)?;
            app.api().delete_user(id).await?;
            println!("User {id} deleted");
        }
    }
    Ok(())
}

// === Bookings ===

#[derive(Subcommand, Debug)]
pub enum BookingCommand {
    /// List all booking requests
    List,
    /// Update a booking's status or dates
    Update {
        id: i64,
        /// Pending, Confirmed, Completed, or Cancelled
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        departure: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Delete a booking request
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

fn print_booking(booking: &Booking) {
    println!(
        "#{} {} - {} ({}, {})",
        booking.booking_id,
        booking.status.as_str(),
        booking.full_name,
        booking.email,
        booking.phone_number,
    );
    println!(
        "    Vehicle #{}, {} passengers",
        booking.vehicle_id, booking.passengers
    );
    println!(
        "    Departs {}, trail {} to {}",
        booking.departure_time.format("%Y-%m-%d %H:%M"),
        booking.start_trail_date.format("%Y-%m-%d"),
        booking.end_trail_date.format("%Y-%m-%d"),
    );
    println!(
        "    {} -> {}",
        booking.pickup_address, booking.drop_off_address
    );
    if !booking.stop_stations.is_empty() {
        println!("    Stops: {}", booking.stop_stations.join(", "));
    }
    if !booking.notes.is_empty() {
        println!("    Notes: {}", booking.notes);
    }
}

async fn bookings(app: &App, cmd: BookingCommand) -> anyhow::Result<()> {
    match cmd {
        BookingCommand::List => {
            let all = app.api().all_bookings().await?;
            for booking in &all {
                print_booking(booking);
            }
            println!("{} booking(s)", all.len());
        }
        BookingCommand::Update {
            id,
            status,
            departure,
            start,
            end,
        } => {
            let mut booking = app
                .api()
                .all_bookings()
                .await?
                .into_iter()
                .find(|b| b.booking_id == id)
                .with_context(|| format!("Booking {id} not found"))?;

            if let Some(s) = status {
                booking.status = s.parse::<BookingStatus>().map_err(anyhow::Error::msg)?;
            }
            if let Some(d) = departure {
                booking.departure_time = parse_date(&d)?;
            }
            if let Some(d) = start {
                booking.start_trail_date = parse_date(&d)?;
            }
            if let Some(d) = end {
                booking.end_trail_date = parse_date(&d)?;
            }

            app.api().update_booking(id, &booking).await?;
            println!("Booking {id} updated");
        }
        BookingCommand::Delete { id, yes } => {
            confirm_delete("booking", yes)?;
            app.api().delete_booking(id).await?;
            println!("Booking {id} deleted");
        }
    }
    Ok(())
}
