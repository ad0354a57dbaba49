//! Demo storefront: drives a browse session the way the rendering layer would
//! and prints each derived view.

use anyhow::Context;

use vitrine_browse::{BrowseSession, CatalogView, SortKey};
use vitrine_catalog::{Catalog, Price, Product};

const EMBEDDED_DATASET: &str = include_str!("dataset.json");

fn main() -> anyhow::Result<()> {
    vitrine_observability::init();

    // Catalog document comes from the embedded demo dataset unless the host
    // points VITRINE_CATALOG at another JSON file.
    let catalog = match std::env::var("VITRINE_CATALOG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading catalog document {path}"))?;
            Catalog::from_json(&json).with_context(|| format!("ingesting catalog {path}"))?
        }
        Err(_) => Catalog::from_json(EMBEDDED_DATASET).context("ingesting embedded catalog")?,
    };

    tracing::info!(
        products = catalog.len(),
        categories = catalog.categories().len(),
        brands = catalog.brands().len(),
        "catalog ingested"
    );

    let mut session = BrowseSession::new(catalog);

    render("Full catalog, sorted by rating", &session.view());

    let view = session.set_price_range(Price::new(0), Price::new(100000));
    render("Up to 100 000, sorted by rating", &view);

    let view = session.toggle_category("phones".into());
    render("Up to 100 000, phones only", &view);

    let view = session.set_sort_key(SortKey::PriceAsc);
    render("Up to 100 000, phones only, cheapest first", &view);

    let view = session.reset_filters();
    render("After reset, cheapest first", &view);

    Ok(())
}

fn render(heading: &str, view: &CatalogView<'_>) {
    println!("== {heading}");
    println!("{} results found", view.result_count());
    if view.is_empty() {
        println!("   (no products match the current filters)");
    }
    for product in view.iter() {
        render_card(product);
    }
    println!();
}

fn render_card(product: &Product) {
    println!(
        "   [{}] {} — {} | {} | rating {:.1}",
        product.id_typed(),
        product.name(),
        product.brand(),
        category_label(product.category().as_str()),
        product.rating().value()
    );
    for (name, value) in product.specs().iter() {
        println!("        {name}: {value}");
    }
    println!("        price: {}", format_price(product.price()));
}

/// Human label for the known category tags; unknown tags display as-is.
fn category_label(tag: &str) -> &str {
    match tag {
        "audio" => "Audio",
        "computers" => "Computers",
        "phones" => "Phones",
        other => other,
    }
}

/// Minor currency units with thousands separators, e.g. 34999 -> "34 999".
fn format_price(price: Price) -> String {
    let digits = price.minor_units().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
