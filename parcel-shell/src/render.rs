//! Text rendering of query results.

use parcel::{Extremes, Parcel, Totals, WeightFilter};
use std::io::{self, Write};

pub fn no_parcels(out: &mut impl Write, destination: &str) -> io::Result<()> {
    writeln!(out, "No parcels found for {}.", destination)
}

fn parcel_line(out: &mut impl Write, parcel: &Parcel) -> io::Result<()> {
    writeln!(
        out,
        "  Destination: {}, Weight: {} g, Value: ${:.2}",
        parcel.destination(),
        parcel.weight(),
        parcel.value()
    )
}

pub fn parcels(out: &mut impl Write, destination: &str, parcels: &[Parcel]) -> io::Result<()> {
    if parcels.is_empty() {
        return no_parcels(out, destination);
    }
    writeln!(out, "Parcels for {}:", destination)?;
    for parcel in parcels {
        parcel_line(out, parcel)?;
    }
    Ok(())
}

pub fn filtered(
    out: &mut impl Write,
    destination: &str,
    filter: WeightFilter,
    parcels: &[Parcel],
) -> io::Result<()> {
    if parcels.is_empty() {
        return writeln!(out, "No parcels {} found for {}.", filter, destination);
    }
    writeln!(out, "Parcels for {} {}:", destination, filter)?;
    for parcel in parcels {
        parcel_line(out, parcel)?;
    }
    Ok(())
}

pub fn totals(out: &mut impl Write, destination: &str, totals: &Totals) -> io::Result<()> {
    if totals.is_empty() {
        return no_parcels(out, destination);
    }
    writeln!(
        out,
        "Total load for {}: {} g across {} parcels, total value ${:.2}",
        destination,
        totals.weight(),
        totals.parcels(),
        totals.value()
    )
}

pub fn value_extremes(
    out: &mut impl Write,
    destination: &str,
    extremes: Option<&Extremes>,
) -> io::Result<()> {
    match extremes {
        Some(extremes) => {
            writeln!(out, "Cheapest parcel for {}:", destination)?;
            parcel_line(out, extremes.lowest())?;
            writeln!(out, "Most expensive parcel for {}:", destination)?;
            parcel_line(out, extremes.highest())
        }
        None => no_parcels(out, destination),
    }
}

pub fn weight_extremes(
    out: &mut impl Write,
    destination: &str,
    extremes: Option<&Extremes>,
) -> io::Result<()> {
    match extremes {
        Some(extremes) => {
            writeln!(out, "Lightest parcel for {}:", destination)?;
            parcel_line(out, extremes.lowest())?;
            writeln!(out, "Heaviest parcel for {}:", destination)?;
            parcel_line(out, extremes.highest())
        }
        None => no_parcels(out, destination),
    }
}
