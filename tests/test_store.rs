//! Store and service tests over the in-memory backend.
//!
//! Note on validation symmetry: the API this replaces validated category
//! names but accepted any product payload. That asymmetry is resolved here
//! toward symmetric rules, and the `product_validation_harmonized_*` tests
//! pin that decision explicitly.

use std::collections::BTreeSet;
use std::sync::Arc;

use kasir_api::{
    ApiError, Category, CategoryService, MemoryRepository, MemoryStore, Product, ProductService,
    Repository,
};

fn product(name: &str, price: i64, stock: i64) -> Product {
    Product {
        id: 0,
        name: name.to_string(),
        price,
        stock,
    }
}

fn category(name: &str, description: Option<&str>) -> Category {
    Category {
        id: 0,
        name: name.to_string(),
        description: description.map(str::to_string),
    }
}

#[tokio::test]
async fn create_assigns_strictly_increasing_ids() {
    let store = MemoryStore::<Product>::new();
    let a = store.create(product("Pensil", 2000, 100)).await;
    let b = store.create(product("Buku Tulis", 5000, 150)).await;
    let c = store.create(product("Penghapus", 1000, 200)).await;
    assert_eq!((a.id, b.id, c.id), (1, 2, 3));

    let listed = store.list().await;
    assert_eq!(
        listed.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2, 3],
        "list must preserve insertion order"
    );
}

#[tokio::test]
async fn delete_never_reuses_ids_and_leaves_others_untouched() {
    let store = MemoryStore::<Product>::new();
    store.create(product("Pensil", 2000, 100)).await;
    let buku = store.create(product("Buku", 5000, 150)).await;

    assert!(store.delete(1).await);
    let listed = store.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], buku, "survivor must be byte-for-byte unchanged");

    // The counter keeps going; id 1 is gone for the life of the store.
    let next = store.create(product("Penggaris", 3000, 50)).await;
    assert_eq!(next.id, 3);
    assert!(store.get(1).await.is_none());
}

#[tokio::test]
async fn update_ignores_identifier_in_payload() {
    let store = MemoryStore::<Product>::new();
    store.create(product("Pensil", 2000, 100)).await;

    let mut patch = product("Pensil 2B", 2500, 80);
    patch.id = 99;
    let updated = store.update(1, patch).await.unwrap();
    assert_eq!(updated.id, 1, "path id wins over payload id");
    assert_eq!(updated.name, "Pensil 2B");
    assert!(store.get(99).await.is_none());
}

#[tokio::test]
async fn missing_ids_return_not_found() {
    let repo = MemoryRepository::<Product>::new();

    assert!(matches!(
        repo.get_by_id(99).await,
        Err(ApiError::NotFound { id: 99, .. })
    ));
    assert!(matches!(
        repo.update(99, product("X", 1, 1)).await,
        Err(ApiError::NotFound { .. })
    ));
    assert!(matches!(
        repo.delete(99).await,
        Err(ApiError::NotFound { .. })
    ));
}

#[tokio::test]
async fn category_blank_name_is_rejected_without_mutation() {
    let service = CategoryService::new(Arc::new(MemoryRepository::<Category>::new()));

    let created = service
        .create(category("Alat Tulis", Some("pensil, pulpen")))
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    for bad in ["", "   ", "\t\n"] {
        let err = service.create(category(bad, None)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = service
            .update(created.id, category(bad, Some("x")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    // No mutation leaked from the rejected writes.
    let all = service.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Alat Tulis");
}

#[tokio::test]
async fn product_validation_harmonized_blank_name() {
    let service = ProductService::new(Arc::new(MemoryRepository::<Product>::new()));

    let err = service.create(product("  ", 1000, 1)).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn product_validation_harmonized_negative_price_or_stock() {
    let service = ProductService::new(Arc::new(MemoryRepository::<Product>::new()));

    assert!(matches!(
        service.create(product("Pensil", -1, 10)).await,
        Err(ApiError::Validation(_))
    ));
    assert!(matches!(
        service.create(product("Pensil", 10, -1)).await,
        Err(ApiError::Validation(_))
    ));
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_yield_distinct_gapless_ids() {
    let service = Arc::new(ProductService::new(Arc::new(
        MemoryRepository::<Product>::new(),
    )));

    let mut handles = Vec::new();
    for i in 0..100 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create(product(&format!("item-{}", i), 100, 1))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate id handed out");
    }
    assert_eq!(ids, (1..=100).collect::<BTreeSet<_>>());
    assert_eq!(service.get_all().await.unwrap().len(), 100);
}
