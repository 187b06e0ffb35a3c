use parcel::errors::ErrorKind;
use parcel::{Parcel, ParcelCatalog};
use parcel_int_test::test_util::{cleanup, create_test_context, generate_records, to_source};

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_close_releases_every_parcel() {
    let records = generate_records(250, 5);
    let ctx = create_test_context(&to_source(&records)).unwrap();
    assert_eq!(ctx.catalog().len().unwrap(), 250);
    assert_eq!(cleanup(ctx).unwrap(), 250);
}

#[test]
fn test_close_empty_catalog() {
    let catalog = ParcelCatalog::builder().open().unwrap();
    assert_eq!(catalog.close().unwrap(), 0);
}

#[test]
fn test_closed_catalog_rejects_operations() {
    let ctx = create_test_context("canada, 500, 25.50\n").unwrap();
    let catalog = ctx.catalog().clone();
    assert_eq!(catalog.close().unwrap(), 1);
    assert!(catalog.is_closed());

    let err = catalog.list("canada").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CatalogClosed);
    let err = catalog.load_file(ctx.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CatalogClosed);
    let err = catalog.insert(Parcel::new("canada", 600, 10.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CatalogClosed);
    let err = catalog.bucket_for("canada").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CatalogClosed);
    let err = catalog.close().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CatalogClosed);
}

#[test]
fn test_clones_share_state() {
    let ctx = create_test_context("canada, 500, 25.50\n").unwrap();
    let other = ctx.catalog().clone();
    other.insert(Parcel::new("canada", 700, 10.0)).unwrap();
    assert_eq!(ctx.catalog().list("canada").unwrap().len(), 2);
}

#[test]
fn test_concurrent_readers() {
    let records = generate_records(300, 4);
    let ctx = create_test_context(&to_source(&records)).unwrap();
    let destinations = ctx.catalog().destinations().unwrap();

    std::thread::scope(|scope| {
        for destination in &destinations {
            let catalog = ctx.catalog().clone();
            scope.spawn(move || {
                let totals = catalog.totals(destination).unwrap();
                let listed = catalog.list(destination).unwrap();
                assert_eq!(totals.parcels(), listed.len());
            });
        }
    });
}

#[test]
fn test_invalid_builder_configuration() {
    let err = ParcelCatalog::builder().table_size(0).open().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

    let err = ParcelCatalog::builder()
        .weight_range(500, 100)
        .open()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn test_narrowed_weight_range() {
    let catalog = ParcelCatalog::builder()
        .weight_range(200, 1000)
        .open()
        .unwrap();
    let report = catalog
        .load_reader("canada, 150, 20.00\ncanada, 500, 20.00\ncanada, 1500, 20.00\n".as_bytes())
        .unwrap();
    assert_eq!(report.inserted(), 1);
    assert_eq!(report.skipped_count(), 2);
}
