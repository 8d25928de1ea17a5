//! End-to-end pricing flow: seed a catalog, save, read for display, bulk
//! sweep — the engine wired together the way a platform adapter would.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use aurum_catalog::{
    Catalog, CatalogEvent, Category, CategorySlug, InMemoryCatalog, Product, ProductSaved,
    Variation,
};
use aurum_core::{CategoryId, Money, ProductId, Purity, VariationId, Weight};
use aurum_events::{EventBus, InMemoryEventBus};
use aurum_pricing::{
    DisplayPriceFilter, DisplayTarget, MetalPriceTable, PriceCalculator, PricingConfig,
    SaveRecalculator, recalculate_all,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

fn storefront_config() -> PricingConfig {
    PricingConfig {
        metal_prices: MetalPriceTable::new([
            (Purity::K14, 50.0),
            (Purity::K18, 65.0),
            (Purity::K24, 95.0),
        ]),
        ..PricingConfig::default()
    }
}

struct Storefront {
    catalog: Arc<InMemoryCatalog>,
    bus: Arc<InMemoryEventBus<CatalogEvent>>,
    chains: CategoryId,
    necklace: ProductId,
    short_chain: VariationId,
    long_chain: VariationId,
}

fn seed_storefront() -> Storefront {
    let catalog = Arc::new(InMemoryCatalog::new());
    let bus = Arc::new(InMemoryEventBus::new());

    let chains = Category {
        id: CategoryId::new(),
        slug: CategorySlug::new("chains"),
        labor_cost: Some(15.0),
    };
    let chains_id = chains.id;
    catalog.insert_category(chains);

    let mut necklace = Product::new(ProductId::new(), "Figaro necklace");
    necklace.purity = Some("14K".to_string());
    necklace.origin = Some("Italian".to_string());
    necklace.weight = Some(Weight::grams(3.0));
    necklace.categories = vec![chains_id];
    let necklace_id = necklace.id;
    catalog.insert_product(necklace);

    let mut short_chain = Variation::new(VariationId::new(), necklace_id);
    short_chain.weight = Some(Weight::grams(2.0));
    let short_id = short_chain.id;
    catalog.insert_variation(short_chain);

    let mut long_chain = Variation::new(VariationId::new(), necklace_id);
    long_chain.purity = Some("18k".to_string());
    long_chain.weight = Some(Weight::grams(4.5));
    let long_id = long_chain.id;
    catalog.insert_variation(long_chain);

    Storefront {
        catalog,
        bus,
        chains: chains_id,
        necklace: necklace_id,
        short_chain: short_id,
        long_chain: long_id,
    }
}

#[test]
fn save_display_and_bulk_agree_on_prices() -> Result<()> {
    init_logging();
    let store = seed_storefront();

    let listener = SaveRecalculator::new(
        PriceCalculator::new(Arc::clone(&store.catalog), storefront_config()),
        store.bus.as_ref(),
    );

    // Admin saves the product; the save hook recalculates everything.
    store.bus.publish(CatalogEvent::ProductSaved(ProductSaved {
        product_id: store.necklace,
        occurred_at: Utc::now(),
    }))?;
    assert_eq!(listener.drain(), 1);

    // Parent: (50 + 15 + 5) * 3 = 210.00 — the worked example.
    let parent_prices = store.catalog.product(&store.necklace).unwrap().prices;
    assert_eq!(parent_prices.effective, Some(Money::from_minor(21000)));
    assert_eq!(parent_prices.sale, None);

    // Variations: inherit purity/origin/labor, own weight; 18k override.
    let short = store.catalog.variation(&store.short_chain).unwrap().prices;
    assert_eq!(short.effective, Some(Money::from_minor(14000))); // 70 * 2
    let long = store.catalog.variation(&store.long_chain).unwrap().prices;
    assert_eq!(long.effective, Some(Money::from_minor(38250))); // 85 * 4.5

    assert_eq!(store.catalog.price_cache().invalidations(&store.necklace), 1);

    // Display reads substitute the live calculation.
    let filter = DisplayPriceFilter::new(PriceCalculator::new(
        Arc::clone(&store.catalog),
        storefront_config(),
    ));
    assert_eq!(
        filter.apply(&DisplayTarget::Product(store.necklace), Some(Money::from_minor(1))),
        Some(Money::from_minor(21000))
    );
    assert_eq!(
        filter.apply(&DisplayTarget::Variation(store.long_chain), None),
        Some(Money::from_minor(38250))
    );

    // Bulk sweep: one purity-bearing product, cache version bumped.
    let calc = PriceCalculator::new(Arc::clone(&store.catalog), storefront_config());
    let summary = recalculate_all(&calc);
    assert_eq!(summary.updated, 1);
    assert_eq!(
        summary.to_string(),
        "Updated 1 gold products with new calculated prices."
    );
    assert_eq!(store.catalog.price_cache().version(), 1);

    Ok(())
}

#[test]
fn excluded_category_is_never_display_overridden() -> Result<()> {
    init_logging();
    let store = seed_storefront();

    // Move the necklace into an excluded category.
    let watches = Category {
        id: CategoryId::new(),
        slug: CategorySlug::new("luxury-watches"),
        labor_cost: Some(100.0),
    };
    let watches_id = watches.id;
    store.catalog.insert_category(watches);
    let mut necklace = store.catalog.product(&store.necklace).unwrap();
    necklace.categories = vec![store.chains, watches_id];
    store.catalog.insert_product(necklace);

    let filter = DisplayPriceFilter::new(PriceCalculator::new(
        Arc::clone(&store.catalog),
        storefront_config(),
    ));
    let stored = Some(Money::from_minor(123_456));
    assert_eq!(
        filter.apply(&DisplayTarget::Product(store.necklace), stored),
        stored
    );

    // Saving still recalculates — exclusion only affects display reads.
    let listener = SaveRecalculator::new(
        PriceCalculator::new(Arc::clone(&store.catalog), storefront_config()),
        store.bus.as_ref(),
    );
    store.bus.publish(CatalogEvent::ProductSaved(ProductSaved {
        product_id: store.necklace,
        occurred_at: Utc::now(),
    }))?;
    listener.drain();

    // Labor now maxes at 100: (50 + 100 + 5) * 3.
    assert_eq!(
        store.catalog.product(&store.necklace).unwrap().prices.effective,
        Some(Money::from_minor(46500))
    );

    Ok(())
}
