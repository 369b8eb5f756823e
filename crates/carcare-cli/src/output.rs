//! Output formatting module

use carcare_app::app::{CarOverview, YearlyReport};
use carcare_domain::service::definition_for;
use carcare_types::{Car, OutputFormat, Result, ServiceKind, ServiceRecord};

pub fn kind_label(kind: ServiceKind) -> &'static str {
    definition_for(kind).map(|d| d.label).unwrap_or_else(|| kind.as_str())
}

pub fn output_cars(output_format: OutputFormat, cars: &[Car]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(cars)?);
        return Ok(());
    }

    if cars.is_empty() {
        println!("No cars to show.");
        return Ok(());
    }

    println!("{:<36}  {:<28} {:>6} {:>10}", "ID", "Car", "Year", "Km");
    println!("{}", "-".repeat(84));
    for car in cars {
        println!(
            "{:<36}  {:<28} {:>6} {:>10}",
            car.id,
            car.display_name(),
            car.year,
            car.mileage
        );
    }
    Ok(())
}

pub fn output_history(output_format: OutputFormat, records: &[ServiceRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No service records.");
        return Ok(());
    }

    println!(
        "{:<10}  {:<18} {:>10} {:>10}  {:<36}  Note",
        "Date", "Service", "Km", "Cost", "ID"
    );
    println!("{}", "-".repeat(100));
    for record in records {
        println!(
            "{:<10}  {:<18} {:>10} {:>10.0}  {:<36}  {}",
            record.performed_on,
            kind_label(record.kind),
            record.odometer_at_service,
            record.cost,
            record.id,
            if record.note.is_empty() { "-" } else { record.note.as_str() }
        );
    }
    Ok(())
}

pub fn output_car(output_format: OutputFormat, car: &Car, records: &[ServiceRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({ "car": car, "services": records });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("\n{} ({})", car.display_name(), car.year);
    println!("===============");
    println!("ID:          {}", car.id);
    println!("Odometer:    {} km", car.mileage);
    if let Some(ref image) = car.image {
        println!("Image:       {}", image);
    }
    println!("Registered:  {}", car.registered_at.format("%Y-%m-%d"));
    println!();
    output_history(output_format, records)
}

pub fn output_overview(output_format: OutputFormat, overview: &CarOverview) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(overview)?);
        return Ok(());
    }

    println!("\nUpcoming maintenance: {}", overview.car.display_name());
    println!("Odometer: {} km", overview.car.mileage);
    println!("{}", "=".repeat(40));

    for item in &overview.items {
        let p = &item.projection;
        println!("\n{:<20} [{}]", p.label, item.classification.status);
        let Some(last) = p.last_service_date else {
            continue;
        };
        println!("  Last:            {}", last);
        if let Some(km) = p.next_due_distance {
            println!("  Next at:         {} km", km);
        }
        if let Some(date) = p.next_due_date {
            println!("  Next by:         {}", date);
        }
        if let Some(days) = p.days_remaining {
            println!("  Days remaining:  {}", days);
        }
    }
    Ok(())
}

pub fn output_yearly(output_format: OutputFormat, report: &YearlyReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("\nService costs {}", report.year);
    println!("==================");
    for row in &report.rows {
        println!("{:<30} {:>12.0}", row.car_name, row.total_cost);
    }
    println!("{}", "-".repeat(43));
    println!("{:<30} {:>12.0}", "Total", report.total);
    Ok(())
}
