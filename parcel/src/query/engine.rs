use super::{Extremes, Totals, WeightFilter};
use crate::{index::WeightTree, record::Parcel};

/// Parcels of `destination` in ascending-weight order.
///
/// The tree is walked in full because other destinations may share the
/// bucket; only exact destination matches are yielded.
pub fn matching<'a>(
    tree: Option<&'a WeightTree>,
    destination: &'a str,
) -> impl Iterator<Item = &'a Parcel> + 'a {
    tree.into_iter()
        .flat_map(WeightTree::in_order)
        .filter(move |parcel| parcel.destination() == destination)
}

/// Every parcel for `destination`, lightest first.
pub fn list(tree: Option<&WeightTree>, destination: &str) -> Vec<Parcel> {
    matching(tree, destination).cloned().collect()
}

/// Parcels for `destination` passing the strict weight `filter`, lightest first.
pub fn list_filtered(
    tree: Option<&WeightTree>,
    destination: &str,
    filter: WeightFilter,
) -> Vec<Parcel> {
    matching(tree, destination)
        .filter(|parcel| filter.matches(parcel.weight()))
        .cloned()
        .collect()
}

/// Sums weight and value over `destination`'s parcels; all zero without a match.
pub fn totals(tree: Option<&WeightTree>, destination: &str) -> Totals {
    matching(tree, destination).fold(Totals::default(), |mut totals, parcel| {
        totals.add(parcel);
        totals
    })
}

/// Cheapest and most expensive parcel for `destination`.
///
/// Returns `None` when nothing matches. Ties keep the lighter parcel, which is
/// the first one met in traversal order.
pub fn value_extremes(tree: Option<&WeightTree>, destination: &str) -> Option<Extremes> {
    extremes_by(matching(tree, destination), Parcel::value)
}

/// Lightest and heaviest parcel for `destination`; `None` when nothing matches.
pub fn weight_extremes(tree: Option<&WeightTree>, destination: &str) -> Option<Extremes> {
    extremes_by(matching(tree, destination), Parcel::weight)
}

fn extremes_by<'a, K, F>(mut parcels: impl Iterator<Item = &'a Parcel>, key: F) -> Option<Extremes>
where
    K: PartialOrd + Copy,
    F: Fn(&Parcel) -> K,
{
    let first = parcels.next()?;
    let (mut lowest, mut highest) = (first, first);
    let (mut low_key, mut high_key) = (key(first), key(first));

    for parcel in parcels {
        let current = key(parcel);
        if current < low_key {
            lowest = parcel;
            low_key = current;
        }
        if current > high_key {
            highest = parcel;
            high_key = current;
        }
    }

    Some(Extremes::new(lowest.clone(), highest.clone()))
}
