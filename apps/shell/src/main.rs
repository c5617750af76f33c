//! Headless demo shell for the Seller TSP platform.
//!
//! Walks the registration wizard end to end, runs the post-submission
//! checklist, resolves a voice command against a sample node tree, and
//! round-trips a shareable experience link. An optional first argument
//! names a config file; without one the built-in defaults apply.

use anyhow::{Context, Result, ensure};
use std::sync::Arc;
use tracing::info;
use tsp::domain::catalog::{Experience, ProductListing};
use tsp::domain::config::AppConfig;
use tsp::domain::registration::{Field, STEP_COUNT, step_fields};
use tsp::domain::registry::{FeatureSlice, InitializedSlice};
use tsp::domain::settings::ThemeMode;
use tsp::features::access::Access;
use tsp::features::catalog::{Catalog, Clipboard, ShareLink};
use tsp::features::onboarding::{Onboarding, StepOutcome};
use tsp::features::settings::Settings;
use tsp::features::voice::{MatchOutcome, NodeActions, NodeId, UiNode, UiTree, Voice};
use tsp::kernel::config::load_config;
use tsp_event_bus::EventBus;
use tsp_logger::Logger;
use tsp_store::StoreBuilder;

const DEMO_USER: &str = "demo-seller";
const DEMO_SELLER_ID: &str = "asha-organics.ondc.org";

#[tokio::main]
async fn main() -> Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let config = load_app_config()?;
    let store = StoreBuilder::new().root(&config.storage.data_dir).connect().await?;
    let events = EventBus::new();

    let slices =
        tsp::init(&config, &store, &events).await.map_err(|err| anyhow::anyhow!("{err}"))?;
    info!(slices = slices.len(), "Platform initialized");

    simulate_sign_in(&store).await?;

    run_registration(&slices).await?;
    run_voice_demo(&slices).await;
    run_share_demo(&slices).await?;
    run_dashboard_demo(&slices).await?;

    info!("Demo complete");
    Ok(())
}

fn load_app_config() -> Result<AppConfig> {
    std::env::args().nth(1).map_or_else(
        || Ok(AppConfig::default()),
        |path| load_config(Some(path.as_str())).context("Configuration is malformed"),
    )
}

/// Authentication is mocked throughout: a fake user record is written to
/// the store and read back, with no credential check of any kind.
async fn simulate_sign_in(store: &tsp_store::Store) -> Result<()> {
    use tsp::domain::constants::{AUTH, MOCK_USER};
    use tsp::domain::user::MockUser;

    let auth = store.namespace(AUTH)?;
    let user = match auth.get::<MockUser>(MOCK_USER).await? {
        Some(user) => user,
        None => {
            let user = MockUser {
                id: DEMO_USER.to_owned(),
                display_name: "Asha Patel".to_owned(),
                email: "asha@example.com".to_owned(),
                signed_in_at: chrono::Utc::now().timestamp_millis(),
            };
            auth.put(MOCK_USER, &user).await?;
            user
        },
    };
    info!(user = %user.id, "Signed in (mock)");
    Ok(())
}

fn slice<T: FeatureSlice>(slices: &[InitializedSlice]) -> Result<&T> {
    slices.iter().find_map(InitializedSlice::downcast_ref).context("Feature slice not initialized")
}

/// Walks all wizard steps with valid demo data, submits, then lets the
/// checklist simulation run to completion.
async fn run_registration(slices: &[InitializedSlice]) -> Result<()> {
    let onboarding: &Onboarding = slice(slices)?;

    let mut wizard = onboarding.wizard();
    wizard.start()?;

    for step in 0..STEP_COUNT {
        for &field in step_fields(step) {
            wizard.set_field(field, demo_value(field))?;
        }
        let outcome =
            if step + 1 == STEP_COUNT { wizard.submit().await? } else { wizard.next()? };
        ensure!(
            outcome == StepOutcome::Advanced,
            "Step {step} rejected: {:?}",
            wizard.errors()
        );
    }
    info!(progress = wizard.progress_percent(), "Registration walk-through finished");

    let checklist = onboarding.checklist();
    let mut updates = checklist.subscribe();
    checklist.start();
    while !updates.borrow().is_complete() {
        updates.changed().await?;
    }
    checklist.teardown();
    info!(percent = checklist.percent(), "Onboarding checklist complete");
    Ok(())
}

const fn demo_value(field: Field) -> &'static str {
    match field {
        Field::FullName => "Asha Patel",
        Field::Email => "asha@example.com",
        Field::Mobile => "9876543210",
        Field::BusinessName => "Asha Organics",
        Field::GstNumber => "27ABCDE1234F1Z5",
        Field::BankIfsc => "HDFC0001234",
        Field::SubscriberId => DEMO_SELLER_ID,
        Field::SubscriberUrl => "https://asha-organics.example.in",
        Field::Street => "12 MG Road",
        Field::City => "Bengaluru",
        Field::State => "Karnataka",
        Field::PostalCode => "560001",
    }
}

/// Logs the actions the voice session would perform on a real page.
#[derive(Debug)]
struct LoggingActions;

impl NodeActions for LoggingActions {
    fn scroll_into_view(&self, node: NodeId) {
        info!(node = node.0, "Scrolled element into view");
    }

    fn click(&self, node: NodeId) {
        info!(node = node.0, "Clicked element");
    }
}

fn dashboard_tree() -> UiTree {
    UiTree::new(vec![
        UiNode::new("nav").size(1280.0, 56.0).child(
            UiNode::new("a").size(96.0, 40.0).inner_text("Dashboard"),
        ),
        UiNode::new("main").size(1280.0, 720.0).child(
            UiNode::new("button")
                .size(160.0, 40.0)
                .inner_text("Share experience")
                .aria_label("Share experience"),
        ),
        UiNode::new("button").size(96.0, 40.0).inner_text("Settings"),
    ])
}

async fn run_voice_demo(slices: &[InitializedSlice]) {
    let Ok(voice) = slice::<Voice>(slices) else { return };

    let session = voice.session(Arc::new(LoggingActions));
    session.start_listening();

    let tree = dashboard_tree();
    match session.handle_transcript(&tree, "click on share experience").await {
        MatchOutcome::Matched { target, candidates } => {
            let label = candidates.first().map_or("", |c| c.label.as_str());
            info!(%target, %label, candidates = candidates.len(), "Voice command matched");
        },
        MatchOutcome::ElementNotFound { target } => {
            info!(%target, "Voice command matched nothing on screen");
        },
        MatchOutcome::CommandNotRecognized => info!("Voice command not recognized"),
    }

    session.stop_listening();
}

/// Headless processes have no clipboard; the share flow degrades to
/// showing the URL.
#[derive(Debug)]
struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&self, _text: &str) -> bool {
        false
    }
}

async fn run_share_demo(slices: &[InitializedSlice]) -> Result<()> {
    let catalog: &Catalog = slice(slices)?;

    let mut experience = Experience::new("Asha Organics", DEMO_SELLER_ID);
    experience.tagline = "Farm fresh, always".to_owned();
    experience.products.push(ProductListing {
        name: "Turmeric powder".to_owned(),
        description: "200g pouch".to_owned(),
        price: 14_950,
        category: "grocery".to_owned(),
        subcategory: "spices".to_owned(),
        image_url: None,
    });

    catalog.listings().save_draft(&experience).await?;
    let id = catalog.shares().publish(&experience).await?;

    match catalog.shares().copy_link(&NoClipboard, &id) {
        ShareLink::Copied { url } => info!(%url, "Share link copied to clipboard"),
        ShareLink::Manual { url } => info!(%url, "Copy the share link manually"),
    }

    let loaded = catalog.shares().load(&id).await?;
    info!(title = %loaded.title, products = loaded.products.len(), "Share link resolved");
    Ok(())
}

async fn run_dashboard_demo(slices: &[InitializedSlice]) -> Result<()> {
    let access: &Access = slice(slices)?;
    let grants = access
        .service()
        .toggle_category(DEMO_USER, tsp::domain::access::CategorySet::GROCERY)
        .await?;
    info!(user = DEMO_USER, categories = ?grants.categories, "Category access granted");

    let settings: &Settings = slice(slices)?;
    let mut appearance = settings.service().get();
    appearance.theme = ThemeMode::Dark;
    settings.service().set(appearance).await?;
    info!("Dashboard switched to the dark theme");
    Ok(())
}
