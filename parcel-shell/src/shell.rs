//! The interactive menu loop.

use anyhow::Result;
use parcel::common::normalize_destination;
use parcel::{ParcelCatalog, WeightFilter};
use std::io::{BufRead, Write};

use crate::render;

const MENU: &str = "\
=== Parcel Catalog ===
1. Display all parcels for a destination
2. Display parcels heavier or lighter than a weight
3. Display total load and value for a destination
4. Display cheapest and most expensive parcel
5. Display lightest and heaviest parcel
6. Exit";

/// A top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    ListFiltered,
    Totals,
    ValueExtremes,
    WeightExtremes,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::ListFiltered),
            "3" => Some(MenuChoice::Totals),
            "4" => Some(MenuChoice::ValueExtremes),
            "5" => Some(MenuChoice::WeightExtremes),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Heavier,
    Lighter,
}

impl Direction {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "g" | ">" | "greater" | "heavier" => Some(Direction::Heavier),
            "l" | "<" | "less" | "lighter" => Some(Direction::Lighter),
            _ => None,
        }
    }

    fn with_threshold(self, threshold: u32) -> WeightFilter {
        match self {
            Direction::Heavier => WeightFilter::Heavier(threshold),
            Direction::Lighter => WeightFilter::Lighter(threshold),
        }
    }
}

/// Menu loop reading selections from `input` and writing results to `output`.
///
/// End of input behaves like choosing "Exit": the catalog is closed either way.
pub struct Shell<R, W> {
    catalog: ParcelCatalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: ParcelCatalog, input: R, output: W) -> Self {
        Shell {
            catalog,
            input,
            output,
        }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(line) = self.read_line("Enter your choice: ")? else {
                break;
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => {
                    if !self.dispatch(choice)? {
                        break;
                    }
                }
                None => writeln!(
                    self.output,
                    "Invalid choice '{}'. Please enter a number from 1 to 6.",
                    line.trim()
                )?,
            }
        }
        self.shutdown()
    }

    /// Runs one query; `false` when input ran out mid-prompt.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        let Some(destination) = self.read_destination()? else {
            return Ok(false);
        };
        match choice {
            MenuChoice::List => {
                let parcels = self.catalog.list(&destination)?;
                render::parcels(&mut self.output, &destination, &parcels)?;
            }
            MenuChoice::ListFiltered => {
                let Some(filter) = self.read_filter()? else {
                    return Ok(false);
                };
                let parcels = self.catalog.list_filtered(&destination, filter)?;
                render::filtered(&mut self.output, &destination, filter, &parcels)?;
            }
            MenuChoice::Totals => {
                let totals = self.catalog.totals(&destination)?;
                render::totals(&mut self.output, &destination, &totals)?;
            }
            MenuChoice::ValueExtremes => {
                let extremes = self.catalog.value_extremes(&destination)?;
                render::value_extremes(&mut self.output, &destination, extremes.as_ref())?;
            }
            MenuChoice::WeightExtremes => {
                let extremes = self.catalog.weight_extremes(&destination)?;
                render::weight_extremes(&mut self.output, &destination, extremes.as_ref())?;
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn read_destination(&mut self) -> Result<Option<String>> {
        loop {
            let Some(line) = self.read_line("Enter destination: ")? else {
                return Ok(None);
            };
            let destination = normalize_destination(&line);
            if !destination.is_empty() {
                return Ok(Some(destination));
            }
            writeln!(self.output, "Destination cannot be empty.")?;
        }
    }

    fn read_filter(&mut self) -> Result<Option<WeightFilter>> {
        let threshold = loop {
            let Some(line) = self.read_line("Enter weight threshold (g): ")? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(threshold) => break threshold,
                Err(_) => writeln!(
                    self.output,
                    "Invalid weight '{}'. Please enter a whole number of grams.",
                    line.trim()
                )?,
            }
        };
        loop {
            let Some(line) = self.read_line("Show parcels heavier (g) or lighter (l)? ")? else {
                return Ok(None);
            };
            match Direction::parse(&line) {
                Some(direction) => return Ok(Some(direction.with_threshold(threshold))),
                None => writeln!(self.output, "Invalid selection. Please enter 'g' or 'l'.")?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn shutdown(mut self) -> Result<()> {
        let released = self.catalog.close()?;
        writeln!(self.output, "\nReleased {} parcels. Goodbye.", released)?;
        Ok(())
    }
}
