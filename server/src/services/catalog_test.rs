use super::*;
use heating::catalog::REQUIRED_PRODUCT_IDS;

#[test]
fn bundled_catalog_is_valid() {
    let catalog = bundled().unwrap();
    for id in REQUIRED_PRODUCT_IDS {
        assert!(catalog.product(id).is_some(), "missing {id}");
    }
    assert!(!catalog.manifolds.is_empty());
}

#[test]
fn bundled_manifolds_are_sorted() {
    let catalog = bundled().unwrap();
    let ports: Vec<u32> = catalog.manifolds.iter().map(|m| m.ports).collect();
    let mut sorted = ports.clone();
    sorted.sort_unstable();
    assert_eq!(ports, sorted);
}

#[test]
fn load_without_path_uses_bundled() {
    let loaded = load(None).unwrap();
    assert_eq!(loaded, bundled().unwrap());
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load(Some(Path::new("/definitely/not/here/catalog.json"))).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here/catalog.json"));
}

#[test]
fn load_reads_file_from_disk() {
    let path = std::env::temp_dir().join(format!("catalog-load-{}.json", std::process::id()));
    std::fs::write(&path, BUNDLED_CATALOG).unwrap();
    let loaded = load(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, bundled().unwrap());
}

#[test]
fn parse_rejects_malformed_json() {
    assert!(matches!(parse("{ not json"), Err(CatalogLoadError::Parse(_))));
}

#[test]
fn parse_rejects_catalog_without_required_products() {
    let err = parse(r#"{"productos": [], "colectores": []}"#).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Invalid(CatalogError::MissingProduct(_))));
}
