use super::*;

fn product(id: &str) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("{id} name"),
        description: String::new(),
        unit_price: 2.5,
        unit: "un".to_owned(),
        category: "test".to_owned(),
    }
}

fn manifold(ports: u32, price: f64) -> Manifold {
    Manifold { ports, id: format!("COL-{ports:02}"), name: format!("{ports}-port manifold"), unit_price: price }
}

fn full_catalog() -> Catalog {
    Catalog {
        products: REQUIRED_PRODUCT_IDS.iter().map(|id| product(id)).collect(),
        manifolds: vec![manifold(6, 300.0), manifold(2, 100.0), manifold(4, 200.0)],
    }
    .normalized()
}

#[test]
fn normalized_sorts_manifolds_by_ports() {
    let ports: Vec<u32> = full_catalog().manifolds.iter().map(|m| m.ports).collect();
    assert_eq!(ports, vec![2, 4, 6]);
}

#[test]
fn manifold_for_picks_smallest_fit() {
    let catalog = full_catalog();
    assert_eq!(catalog.manifold_for(1).map(|m| m.ports), Some(2));
    assert_eq!(catalog.manifold_for(3).map(|m| m.ports), Some(4));
    assert_eq!(catalog.manifold_for(6).map(|m| m.ports), Some(6));
    assert!(catalog.manifold_for(7).is_none());
    assert_eq!(catalog.max_ports(), 6);
}

#[test]
fn validate_accepts_complete_catalog() {
    assert_eq!(full_catalog().validate(), Ok(()));
}

#[test]
fn validate_reports_missing_product() {
    let mut catalog = full_catalog();
    catalog.products.retain(|p| p.id != CLIPS_ID);
    assert_eq!(catalog.validate(), Err(CatalogError::MissingProduct(CLIPS_ID.to_owned())));
}

#[test]
fn validate_requires_a_manifold() {
    let mut catalog = full_catalog();
    catalog.manifolds.clear();
    assert_eq!(catalog.validate(), Err(CatalogError::NoManifolds));
}

#[test]
fn validate_rejects_negative_price() {
    let mut catalog = full_catalog();
    catalog.manifolds[0].unit_price = -1.0;
    assert!(matches!(catalog.validate(), Err(CatalogError::InvalidPrice { .. })));
}

#[test]
fn catalog_reads_price_list_keys() {
    let json = serde_json::json!({
        "productos": [{
            "id": "TUB-PEX-20",
            "nombre": "PE-X pipe",
            "precioUnitario": 1.2,
            "unidad": "m",
            "categoria": "tuberia"
        }],
        "colectores": [{ "vias": 3, "id": "COL-03", "nombre": "3 ways", "precioUnitario": 150.0 }]
    });
    let catalog: Catalog = serde_json::from_value(json).unwrap();
    assert_eq!(catalog.products[0].unit, "m");
    assert!(catalog.products[0].description.is_empty());
    assert_eq!(catalog.manifolds[0].ports, 3);
}

#[test]
fn budget_item_subtotal_is_quantity_times_price() {
    let item = BudgetItem::from_product(&product(PIPE_ID), 4);
    assert!((item.subtotal - 10.0).abs() < f64::EPSILON);
    assert_eq!(item.product_id, PIPE_ID);
}
