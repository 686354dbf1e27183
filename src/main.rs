mod config;
mod fetch;
mod model;
mod normalizer;
mod parser;

use chrono::Utc;
use config::{load_config, load_spec_tree, AppConfig, ProductConfig};
use fetch::{Scraper, ScraperImpl};
use model::{ProductDetails, ProductRow, ScraperError};
use normalizer::{check_certification, normalize_specs};
use parser::{CatalogParser, Parser};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

#[derive(Debug, Default)]
struct RunSummary {
    found: usize,
    missing: usize,
    failed: usize,
}

#[tokio::main]
async fn main() {
    // Initialize logging; stdout is reserved for output rows
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [flag, path] = args.as_slice() {
        if flag == "--specs" {
            normalize_spec_file(path);
            return;
        }
    }

    let config_path = args.first().cloned().unwrap_or_else(|| "config.json".to_string());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let scraper = match ScraperImpl::new(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };
    let parser = match CatalogParser::new(&config.site_origin) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to build parser: {}", e);
            return;
        }
    };

    info!("Products to process: {}", config.products.len());
    let mut summary = RunSummary::default();

    for product in &config.products {
        let Some(url) = find_product_url(product, &scraper, &parser).await else {
            warn!("{} | {} - Not found", product.model_name, product.mfr_number);
            summary.missing += 1;
            continue;
        };
        summary.found += 1;

        match process_product(product, &url, &scraper, &parser).await {
            Some(row) => match serde_json::to_string(&row) {
                Ok(line) => println!("{}", line),
                Err(e) => warn!("Failed to serialize row for {}: {}", product.mfr_number, e),
            },
            None => summary.failed += 1,
        }
    }

    info!(
        "Finished: found = {}, missing = {}, failed = {}",
        summary.found, summary.missing, summary.failed
    );
}

/// Searches by mfr number first, then by model name.
async fn find_product_url(
    product: &ProductConfig,
    scraper: &ScraperImpl,
    parser: &CatalogParser,
) -> Option<String> {
    let candidates = [
        scraper.search_url_for_mfr(&product.mfr_number),
        scraper.search_url_for_model(&product.model_name),
    ];

    for search_url in candidates {
        let html = match scraper.fetch(&search_url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Search failed for {}: {}", search_url, e);
                continue;
            }
        };
        match parser.parse_search_result(&html) {
            Ok(url) => return Some(url),
            Err(e) => info!("No result at {}: {}", search_url, e),
        }
    }

    None
}

/// Fetches, parses and normalizes one product page into an output row.
async fn process_product(
    product: &ProductConfig,
    url: &str,
    scraper: &ScraperImpl,
    parser: &CatalogParser,
) -> Option<ProductRow> {
    info!("Scraping data from: {}", url);
    let html = match scraper.fetch(url).await {
        Ok(html) => html,
        Err(ScraperError::InvalidResponse(html)) => {
            log_and_save_html(&html, &product.mfr_number);
            return None;
        }
        Err(e) => {
            warn!("Scraper error: {:?}", e);
            return None;
        }
    };

    let details = match parser.parse(&html, url) {
        Ok(d) => d,
        Err(e) => {
            warn!("Parse error: {:?}", e);
            return None;
        }
    };

    if details.specifications.is_empty() {
        log_and_save_html(&html, &product.mfr_number);
    } else {
        info!("Parsed {} spec categories", details.specifications.len());
    }

    info!("{} | {} - Data extracted successfully.", product.model_name, product.mfr_number);
    Some(assemble_row(product, details))
}

fn assemble_row(product: &ProductConfig, details: ProductDetails) -> ProductRow {
    let normalized = normalize_specs(&details.specifications);
    let certification = check_certification(&details.specifications);

    ProductRow {
        mfr_number: product.mfr_number.clone(),
        model_name: product.model_name.clone(),
        url: details.url,
        image: details.image,
        price: details.price,
        description: details.description,
        spec_pdf: details.spec_pdf,
        dimensions: normalized.dimensions,
        electrical: normalized.electrical,
        green_certification: certification,
        fetched_at: Utc::now(),
    }
}

/// Normalizes a saved specification tree and prints the canonical fields.
fn normalize_spec_file(path: &str) {
    let tree = match load_spec_tree(path) {
        Ok(tree) => tree,
        Err(e) => {
            error!("Spec file error: {}", e);
            return;
        }
    };

    let record = serde_json::json!({
        "specs": normalize_specs(&tree),
        "green_certification": check_certification(&tree),
    });
    println!("{}", record);
}

/// Logs and saves the provided HTML for debugging purposes.
fn log_and_save_html(html: &str, mfr_number: &str) {
    let folder = Path::new("logs/html");
    if let Err(e) = fs::create_dir_all(folder) {
        warn!("Failed to create debug folder: {}", e);
        return;
    }
    let filename = folder.join(format!("debug-{}.html", mfr_number.replace(['/', ' '], "_")));
    if let Err(e) = fs::write(&filename, html) {
        warn!("Failed to write debug HTML: {}", e);
    } else {
        info!("Saved debug HTML: {}", filename.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Certification, SpecTree};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_assemble_row() {
        let product = ProductConfig {
            mfr_number: "DVE45R6100C".into(),
            model_name: "Electric Dryer".into(),
        };
        let details = ProductDetails {
            url: "https://shop.test/dryer".into(),
            price: Some("$899.00".into()),
            specifications: SpecTree::from_json(&json!({
                "Dimensions": {
                    "Product Dimension (WxHxD)": "27\" x 38 11/16\" x 31 5/8\"",
                    "Net Weight": "124 lbs",
                    "Shipping Weight": "131 lbs"
                },
                "Power": { "Voltz/Hertz/Amps": "240 / 60 / 30", "Watts": "5600" },
                "Certifications": { "Energy": "ENERGY STAR Certification" }
            })),
            ..Default::default()
        };

        let row = assemble_row(&product, details);
        assert_eq!(row.mfr_number, "DVE45R6100C");
        assert_eq!(row.price.as_deref(), Some("$899.00"));
        assert_eq!(row.dimensions.width, Some(dec!(27)));
        assert_eq!(row.dimensions.height, Some(dec!(38.6875)));
        assert_eq!(row.dimensions.depth, Some(dec!(31.625)));
        assert_eq!(row.dimensions.weight, Some(dec!(124)));
        assert_eq!(row.dimensions.shipping_weight, Some(dec!(131)));
        assert_eq!(row.electrical.volts.as_deref(), Some("240"));
        assert_eq!(row.electrical.amps.as_deref(), Some("30"));
        assert_eq!(row.electrical.watts.as_deref(), Some("5600"));
        assert_eq!(row.green_certification, Certification::Yes);
    }
}
