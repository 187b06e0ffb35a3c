use parcel::{ParcelCatalog, WeightFilter};
use parcel_int_test::test_util::{
    create_test_context, create_test_context_with, generate_records, to_source,
};

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_list_ascending_over_generated_data() {
    let records = generate_records(500, 8);
    let ctx = create_test_context(&to_source(&records)).unwrap();
    assert_eq!(ctx.report().inserted(), 500);

    let mut seen = 0;
    for destination in ctx.catalog().destinations().unwrap() {
        let parcels = ctx.catalog().list(&destination).unwrap();
        assert!(parcels.windows(2).all(|w| w[0].weight() < w[1].weight()));
        assert!(parcels.iter().all(|p| p.destination() == destination));

        let expected = records
            .iter()
            .filter(|r| r.destination == destination)
            .count();
        assert_eq!(parcels.len(), expected);
        seen += parcels.len();
    }
    assert_eq!(seen, 500);
}

#[test]
fn test_filtered_is_strict() {
    let source = "canada, 200, 20.00\ncanada, 500, 30.00\ncanada, 800, 50.00\n";
    let ctx = create_test_context(source).unwrap();
    let catalog = ctx.catalog();

    let heavier: Vec<u32> = catalog
        .list_filtered("canada", WeightFilter::Heavier(500))
        .unwrap()
        .iter()
        .map(|p| p.weight())
        .collect();
    assert_eq!(heavier, vec![800]);

    let lighter: Vec<u32> = catalog
        .list_filtered("canada", WeightFilter::Lighter(500))
        .unwrap()
        .iter()
        .map(|p| p.weight())
        .collect();
    assert_eq!(lighter, vec![200]);

    assert!(catalog
        .list_filtered("canada", WeightFilter::Heavier(800))
        .unwrap()
        .is_empty());
}

#[test]
fn test_totals() {
    let source = "\
canada, 200, 20.00
canada, 300, 30.00
canada, 500, 50.00
mexico, 900, 90.00
";
    let ctx = create_test_context(source).unwrap();
    let totals = ctx.catalog().totals("canada").unwrap();
    assert_eq!(totals.parcels(), 3);
    assert_eq!(totals.weight(), 1000);
    assert!((totals.value() - 100.0).abs() < 1e-9);

    let empty = ctx.catalog().totals("peru").unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.weight(), 0);
}

#[test]
fn test_extremes() {
    let source = "canada, 200, 80.00\ncanada, 500, 25.50\ncanada, 900, 12.00\n";
    let ctx = create_test_context(source).unwrap();
    let catalog = ctx.catalog();

    let by_value = catalog.value_extremes("canada").unwrap().unwrap();
    assert_eq!(by_value.lowest().weight(), 900);
    assert_eq!(by_value.highest().weight(), 200);

    let by_weight = catalog.weight_extremes("canada").unwrap().unwrap();
    assert_eq!(by_weight.lowest().weight(), 200);
    assert_eq!(by_weight.highest().weight(), 900);

    assert!(catalog.value_extremes("peru").unwrap().is_none());
    assert!(catalog.weight_extremes("peru").unwrap().is_none());
}

#[test]
fn test_single_parcel_is_both_extremes() {
    let ctx = create_test_context("canada, 500, 25.50\n").unwrap();
    let extremes = ctx.catalog().value_extremes("canada").unwrap().unwrap();
    assert_eq!(extremes.lowest(), extremes.highest());
}

#[test]
fn test_colliding_destinations_stay_separate() {
    let catalog = ParcelCatalog::builder().table_size(1).open().unwrap();
    let ctx = create_test_context_with(
        "canada, 500, 25.50\nmexico, 300, 40.00\ncanada, 700, 10.00\nperu, 100, 15.00\n",
        catalog,
    )
    .unwrap();
    let catalog = ctx.catalog();
    assert_eq!(
        catalog.bucket_for("canada").unwrap(),
        catalog.bucket_for("mexico").unwrap()
    );

    let canada: Vec<u32> = catalog
        .list("canada")
        .unwrap()
        .iter()
        .map(|p| p.weight())
        .collect();
    assert_eq!(canada, vec![500, 700]);

    let totals = catalog.totals("mexico").unwrap();
    assert_eq!(totals.parcels(), 1);
    assert_eq!(totals.weight(), 300);

    let extremes = catalog.weight_extremes("peru").unwrap().unwrap();
    assert_eq!(extremes.lowest().weight(), 100);
    assert_eq!(extremes.highest().weight(), 100);
}

#[test]
fn test_duplicate_weight_in_bucket_is_dropped() {
    let ctx = create_test_context("canada, 500, 25.50\ncanada, 500, 99.00\n").unwrap();
    assert_eq!(ctx.report().inserted(), 1);
    assert_eq!(ctx.report().duplicates(), 1);

    let parcels = ctx.catalog().list("canada").unwrap();
    assert_eq!(parcels.len(), 1);
    assert!((parcels[0].value() - 25.50).abs() < 1e-9);
}

#[test]
fn test_equal_weights_for_different_buckets_both_load() {
    let ctx = create_test_context("mexico, 500, 25.50\nunited states, 500, 40.00\n").unwrap();
    let catalog = ctx.catalog();
    assert_eq!(catalog.bucket_for("canada").unwrap(), 86);
    assert_ne!(
        catalog.bucket_for("mexico").unwrap(),
        catalog.bucket_for("united states").unwrap()
    );
    assert_eq!(ctx.report().inserted(), 2);
    assert_eq!(ctx.report().duplicates(), 0);
    assert_eq!(catalog.list("united states").unwrap().len(), 1);
}
