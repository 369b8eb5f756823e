//! Command handlers

use crate::cli::{CarAction, Cli, Commands, ServiceAction};
use crate::output::{kind_label, output_car, output_cars, output_history, output_overview, output_yearly};
use carcare_app::app::{car_overview, yearly_costs, Garage, NewCar, NewService};
use carcare_app::config::Config;
use carcare_app::export::export_yearly_costs;
use carcare_app::repository::open_garage;
use carcare_domain::platform::{Clock, FixedClock, SystemClock};
use carcare_domain::service::validation::parse_date;
use carcare_types::{OutputFormat, Result};
use chrono::{Datelike, NaiveTime, Utc};
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(data_dir = ?config.data_dir, %output_format, "configuration loaded");

    match cli.command {
        Commands::Car { action } => {
            let garage = open_garage(&config)?;
            cmd_car(&garage, action, output_format)
        }

        Commands::Service { action } => {
            let garage = open_garage(&config)?;
            cmd_service(&garage, action, output_format)
        }

        Commands::Due { car, today } => {
            let garage = open_garage(&config)?;
            cmd_due(&garage, &car, today.as_deref(), output_format)
        }

        Commands::Stats { year, export } => {
            let garage = open_garage(&config)?;
            cmd_stats(&garage, year, export, output_format)
        }

        Commands::Config {
            show,
            set_data_dir,
            set_output,
            set_notifications,
            reset,
        } => cmd_config(show, set_data_dir, set_output, set_notifications, reset),
    }
}

fn cmd_car(garage: &Garage, action: CarAction, output_format: OutputFormat) -> Result<()> {
    match action {
        CarAction::Add {
            brand,
            model,
            year,
            mileage,
            image,
        } => {
            let car = garage.add_car(
                NewCar {
                    brand,
                    model,
                    year,
                    mileage,
                    image,
                },
                Utc::now().year(),
            )?;
            println!("Registered {} ({})", car.display_name(), car.id);
            Ok(())
        }

        CarAction::List { search } => {
            let cars = garage.list_cars(search.as_deref())?;
            output_cars(output_format, &cars)
        }

        CarAction::Show { id } => {
            let car = garage.get_car(&id)?;
            let records = garage.service_history(&id)?;
            output_car(output_format, &car, &records)
        }

        CarAction::Remove { id } => {
            let car = garage.get_car(&id)?;
            let removed = garage.remove_car(&id)?;
            println!(
                "Removed {} and {} service record(s)",
                car.display_name(),
                removed.records
            );
            Ok(())
        }

        CarAction::Mileage { id, km } => {
            let before = garage.get_car(&id)?.mileage;
            let now = garage.update_mileage(&id, km)?;
            if now > before {
                println!("Odometer updated: {} km -> {} km", before, now);
            } else {
                println!("Odometer unchanged at {} km (readings never decrease)", now);
            }
            Ok(())
        }
    }
}

fn cmd_service(garage: &Garage, action: ServiceAction, output_format: OutputFormat) -> Result<()> {
    match action {
        ServiceAction::Add {
            car,
            kind,
            date,
            odometer,
            cost,
            note,
        } => {
            let performed_on = match date {
                Some(ref d) => parse_date(d)?,
                None => Utc::now().date_naive(),
            };
            let odometer = match odometer {
                Some(km) => km,
                None => garage.get_car(&car)?.mileage,
            };
            let record = garage.add_service(
                &car,
                NewService {
                    kind,
                    performed_on,
                    odometer,
                    cost,
                    note,
                },
            )?;
            println!("Logged {} on {} ({})", kind_label(record.kind), record.performed_on, record.id);
            Ok(())
        }

        ServiceAction::List { car } => {
            let records = garage.service_history(&car)?;
            output_history(output_format, &records)
        }

        ServiceAction::Remove { id } => {
            garage.remove_service(&id)?;
            println!("Removed service record {}", id);
            Ok(())
        }
    }
}

fn cmd_due(garage: &Garage, car_id: &str, today: Option<&str>, output_format: OutputFormat) -> Result<()> {
    let clock: Box<dyn Clock> = match today {
        Some(d) => Box::new(FixedClock(parse_date(d)?.and_time(NaiveTime::MIN).and_utc())),
        None => Box::new(SystemClock),
    };

    let overview = car_overview(garage, car_id, clock.as_ref())?;
    let fired = overview.fired().count();
    if fired > 0 {
        debug!(fired, "overdue alerts raised");
    }
    output_overview(output_format, &overview)
}

fn cmd_stats(
    garage: &Garage,
    year: Option<i32>,
    export: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let year = year.unwrap_or_else(|| Utc::now().year());
    let report = yearly_costs(garage, year)?;
    output_yearly(output_format, &report)?;

    if let Some(path) = export {
        let records = garage.all_services()?;
        export_yearly_costs(&report, &records, &path)?;
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_notifications: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(enabled) = set_notifications {
        config.notifications_enabled = Some(enabled);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
