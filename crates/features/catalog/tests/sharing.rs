use tsp_catalog::{Catalog, CatalogError, Clipboard, ShareId, ShareLink};
use tsp_domain::catalog::{Experience, ProductListing};
use tsp_domain::config::AppConfig;
use tsp_store::StoreBuilder;

struct WorkingClipboard;

impl Clipboard for WorkingClipboard {
    fn copy(&self, _text: &str) -> bool {
        true
    }
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn copy(&self, _text: &str) -> bool {
        false
    }
}

fn sample_experience() -> Experience {
    let mut experience = Experience::new("Asha Organics", "asha-organics.ondc.org");
    experience.products.push(ProductListing {
        name: "Turmeric powder".to_owned(),
        description: "200g pouch".to_owned(),
        price: 14_950,
        category: "grocery".to_owned(),
        subcategory: "spices".to_owned(),
        image_url: None,
    });
    experience
}

fn catalog() -> Catalog {
    let store = StoreBuilder::new().build();
    Catalog::new(&AppConfig::default(), &store).unwrap()
}

#[tokio::test]
async fn published_experience_loads_back_by_id() {
    let catalog = catalog();
    let experience = sample_experience();

    let id = catalog.shares().publish(&experience).await.unwrap();
    let loaded = catalog.shares().load(&id).await.unwrap();

    assert_eq!(loaded.title, experience.title);
    assert_eq!(loaded.products.len(), 1);
    assert_eq!(loaded.products[0].price, 14_950);
}

#[tokio::test]
async fn unknown_share_id_is_not_found() {
    let catalog = catalog();
    let id = ShareId::parse("exp-1724000000000-abcdefgh").unwrap();

    let err = catalog.shares().load(&id).await.unwrap_err();
    assert!(matches!(err, CatalogError::ShareNotFound { .. }));
}

#[tokio::test]
async fn share_ids_survive_a_display_parse_round_trip() {
    let catalog = catalog();
    let id = catalog.shares().publish(&sample_experience()).await.unwrap();

    let reparsed = ShareId::parse(&id.to_string()).unwrap();
    let loaded = catalog.shares().load(&reparsed).await.unwrap();
    assert_eq!(loaded.seller_id, "asha-organics.ondc.org");
}

#[tokio::test]
async fn share_url_joins_base_and_id() {
    let catalog = catalog();
    let id = ShareId::parse("exp-1724000000000-abcdefgh").unwrap();

    let url = catalog.shares().share_url(&id);
    assert_eq!(url, "https://seller-tsp.example/experience/exp-1724000000000-abcdefgh");
}

#[tokio::test]
async fn copy_link_reports_clipboard_outcome() {
    let catalog = catalog();
    let id = ShareId::parse("exp-1724000000000-abcdefgh").unwrap();

    let copied = catalog.shares().copy_link(&WorkingClipboard, &id);
    assert!(matches!(copied, ShareLink::Copied { .. }));

    let manual = catalog.shares().copy_link(&BrokenClipboard, &id);
    assert!(matches!(manual, ShareLink::Manual { .. }));
    assert_eq!(manual.url(), catalog.shares().share_url(&id));
}

#[tokio::test]
async fn drafts_save_load_and_remove() {
    let catalog = catalog();
    let experience = sample_experience();

    assert!(catalog.listings().load_draft("asha-organics.ondc.org").await.unwrap().is_none());

    catalog.listings().save_draft(&experience).await.unwrap();
    let draft = catalog.listings().load_draft("asha-organics.ondc.org").await.unwrap().unwrap();
    assert_eq!(draft.title, "Asha Organics");

    catalog.listings().remove_draft("asha-organics.ondc.org").await.unwrap();
    assert!(catalog.listings().load_draft("asha-organics.ondc.org").await.unwrap().is_none());
}

#[tokio::test]
async fn shares_persist_across_disk_reconnects() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::default();

    let id = {
        let store = StoreBuilder::new().root(dir.path()).connect().await.unwrap();
        let catalog = Catalog::new(&config, &store).unwrap();
        catalog.shares().publish(&sample_experience()).await.unwrap()
    };

    let store = StoreBuilder::new().root(dir.path()).connect().await.unwrap();
    let catalog = Catalog::new(&config, &store).unwrap();
    let loaded = catalog.shares().load(&id).await.unwrap();
    assert_eq!(loaded.title, "Asha Organics");
}
