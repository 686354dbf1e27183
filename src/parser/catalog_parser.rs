// Catalog-specific HTML parsing: search results and product spec pages
use crate::model::{ParserError, ProductDetails, SpecTree, SpecValue};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

pub trait Parser {
    fn parse(&self, html: &str, url: &str) -> Result<ProductDetails, ParserError>;
}

/// Selectors for one flavour of the specification table markup.
struct SpecTemplate {
    list: Selector,
    section: Selector,
    category: Selector,
    item: Selector,
    key: Selector,
    value: Selector,
}

pub struct CatalogParser {
    templates: Vec<SpecTemplate>,
    search_link: Selector,
    image: Selector,
    description: Vec<Selector>,
    price_bold: Selector,
    price_span: Selector,
    spec_pdf: Selector,
    site_origin: String,
}

const IMAGE_HOST: &str = "https://image-us.samsung.com";

fn selector(css: &str) -> Result<Selector, ParserError> {
    Selector::parse(css).map_err(|e| ParserError::HtmlParseError(e.to_string()))
}

impl CatalogParser {
    pub fn new(site_origin: &str) -> Result<Self, ParserError> {
        let templates = vec![
            SpecTemplate {
                list: selector("ul.row.spec-details__list")?,
                section: selector("li[itemscope]")?,
                category: selector("span[itemprop='name']")?,
                item: selector("div.sub-specs__item")?,
                key: selector("span.specs-item-name")?,
                value: selector("p.sub-specs__item__value")?,
            },
            SpecTemplate {
                list: selector("ul.Specs_specRow__e9Ife.Specs_specDetailList__StjuR")?,
                section: selector("li")?,
                category: selector("figcaption")?,
                item: selector("div.subSpecsItem")?,
                key: selector("div.Specs_subSpecItemName__IUPV4")?,
                value: selector("div.Specs_subSpecsItemValue__oWnMq")?,
            },
        ];

        Ok(Self {
            templates,
            search_link: selector("a.ProductCard__learnmore___2ICzV")?,
            image: selector("img[src]")?,
            description: vec![
                selector("ul.product-details__info-description")?,
                selector("div.ProductSummary_detailList__zDn4_")?,
            ],
            price_bold: selector("div.PriceInfoText_priceInfo__QEjy8 b")?,
            price_span: selector("span.product-top-nav__font-price")?,
            spec_pdf: selector("div.spec-download a[href]")?,
            site_origin: site_origin.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the absolute URL of the first product card on a search page.
    pub fn parse_search_result(&self, html: &str) -> Result<String, ParserError> {
        let document = Html::parse_document(html);
        let href = document
            .select(&self.search_link)
            .find_map(|a| a.value().attr("href"))
            .ok_or_else(|| ParserError::MissingField("product link".into()))?;

        let href = href.replace("/#benefits", "");
        if href.starts_with("http") {
            Ok(href)
        } else {
            Ok(format!("{}{}", self.site_origin, href))
        }
    }

    /// Flattens whichever spec table template is present into a tree.
    /// Pages without one yield an empty tree.
    pub fn parse_specifications(&self, document: &Html) -> SpecTree {
        for template in &self.templates {
            if let Some(list) = document.select(&template.list).next() {
                return Self::parse_template(template, list);
            }
        }
        warn!("Specification groups not found.");
        SpecTree::new()
    }

    fn parse_template(template: &SpecTemplate, list: ElementRef<'_>) -> SpecTree {
        let mut specs = SpecTree::new();

        for section in list.select(&template.section) {
            let Some(category_elem) = section.select(&template.category).next() else {
                debug!("Category name missing for section");
                continue;
            };
            let category = element_text(category_elem);

            let mut items = SpecTree::new();
            for item in section.select(&template.item) {
                let key = item.select(&template.key).next();
                let value = item.select(&template.value).next();
                match (key, value) {
                    (Some(key), Some(value)) => items.insert_text(element_text(key), element_text(value)),
                    _ => debug!("Missing key/value in item under {:?}", category),
                }
            }

            specs.insert(category, SpecValue::Tree(items));
        }

        specs
    }

    fn parse_image(&self, document: &Html) -> Option<String> {
        document
            .select(&self.image)
            .filter_map(|img| img.value().attr("src"))
            .find(|src| src.starts_with(IMAGE_HOST) && !src.contains(".png"))
            .map(|src| src.replace('$', ""))
    }

    fn parse_description(&self, document: &Html) -> Option<String> {
        self.description.iter().find_map(|sel| {
            document
                .select(sel)
                .next()
                .map(|elem| elem.text().collect::<String>().replace(['\n', '\t'], ""))
        })
    }

    fn parse_price(&self, document: &Html) -> Option<String> {
        document
            .select(&self.price_bold)
            .next()
            .or_else(|| document.select(&self.price_span).next())
            .map(element_text)
            .filter(|price| !price.is_empty())
    }

    fn parse_spec_pdf(&self, document: &Html) -> Option<String> {
        document
            .select(&self.spec_pdf)
            .find_map(|a| a.value().attr("href"))
            .map(str::to_string)
    }
}

impl Parser for CatalogParser {
    fn parse(&self, html: &str, url: &str) -> Result<ProductDetails, ParserError> {
        let document = Html::parse_document(html);

        Ok(ProductDetails {
            url: url.to_string(),
            image: self.parse_image(&document),
            price: self.parse_price(&document),
            description: self.parse_description(&document),
            spec_pdf: self.parse_spec_pdf(&document),
            specifications: self.parse_specifications(&document),
        })
    }
}

fn element_text(elem: ElementRef<'_>) -> String {
    elem.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://www.samsung.com";

    fn parser() -> CatalogParser {
        CatalogParser::new(ORIGIN).unwrap()
    }

    #[test]
    fn test_parse_search_result() {
        let html = r#"
            <div>
              <a class="ProductCard__learnmore___2ICzV" href="/us/appliances/range-ne63/#benefits">Learn more</a>
              <a class="ProductCard__learnmore___2ICzV" href="/us/other">Learn more</a>
            </div>"#;
        assert_eq!(
            parser().parse_search_result(html).unwrap(),
            "https://www.samsung.com/us/appliances/range-ne63"
        );
    }

    #[test]
    fn test_parse_search_result_missing() {
        let err = parser().parse_search_result("<html><body>No results</body></html>");
        assert!(matches!(err, Err(ParserError::MissingField(_))));
    }

    #[test]
    fn test_parse_first_template() {
        let html = r#"
            <ul class="row spec-details__list">
              <li itemscope>
                <span itemprop="name"> Dimensions </span>
                <div class="sub-specs__item">
                  <span class="specs-item-name">Set Dimension (WxHxD)</span>
                  <p class="sub-specs__item__value">
                    30" W x 5 1/10" H x 21 1/4" D
                  </p>
                </div>
                <div class="sub-specs__item">
                  <span class="specs-item-name">Orphan</span>
                </div>
              </li>
              <li itemscope><div class="sub-specs__item"></div></li>
            </ul>"#;

        let details = parser().parse(html, "https://example.com/p").unwrap();
        let specs = details.specifications;
        assert_eq!(specs.len(), 1);

        let Some(SpecValue::Tree(dims)) = specs.get("Dimensions") else {
            panic!("missing Dimensions category");
        };
        assert_eq!(dims.len(), 1);
        assert_eq!(
            dims.get("Set Dimension (WxHxD)"),
            Some(&SpecValue::Text(r#"30" W x 5 1/10" H x 21 1/4" D"#.into()))
        );
    }

    #[test]
    fn test_parse_second_template_and_page_fields() {
        let html = r#"
            <html><body>
              <img src="https://cdn.example.com/logo.jpg">
              <img src="https://image-us.samsung.com/icon.png">
              <img src="https://image-us.samsung.com/fridge.jpg?$product$">
              <div class="ProductSummary_detailList__zDn4_">Big fridge
</div>
              <div class="PriceInfoText_priceInfo__QEjy8">From <b> $1,299.00 </b></div>
              <div class="span-sm-2 span-lg-2 spec-download"><a href="https://example.com/spec.pdf">PDF</a></div>
              <ul class="Specs_specRow__e9Ife Specs_specDetailList__StjuR">
                <li>
                  <figcaption>Power</figcaption>
                  <div class="subSpecsItem">
                    <div class="Specs_subSpecItemName__IUPV4">Voltz/Hertz/Amps</div>
                    <div class="Specs_subSpecsItemValue__oWnMq">120V / 60Hz / 15A</div>
                  </div>
                </li>
              </ul>
            </body></html>"#;

        let details = parser().parse(html, "https://example.com/p").unwrap();
        assert_eq!(details.image.as_deref(), Some("https://image-us.samsung.com/fridge.jpg?product"));
        assert_eq!(details.description.as_deref(), Some("Big fridge"));
        assert_eq!(details.price.as_deref(), Some("$1,299.00"));
        assert_eq!(details.spec_pdf.as_deref(), Some("https://example.com/spec.pdf"));

        let Some(SpecValue::Tree(power)) = details.specifications.get("Power") else {
            panic!("missing Power category");
        };
        assert_eq!(power.get("Voltz/Hertz/Amps"), Some(&SpecValue::Text("120V / 60Hz / 15A".into())));
    }

    #[test]
    fn test_page_without_specs() {
        let details = parser().parse("<html><body><p>Nothing</p></body></html>", "u").unwrap();
        assert!(details.specifications.is_empty());
        assert_eq!(details.price, None);
        assert_eq!(details.image, None);
    }
}
