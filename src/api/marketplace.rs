use serde::{Deserialize, Serialize};

use super::filter::{self, Listing};
use crate::models::marketplace::Product;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "filter::category_selector")]
    pub category: Option<String>,
    #[serde(default)]
    pub preview: bool,
}

pub fn filter_products(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| {
            filter::matches_query(&query.search, &[&p.name, &p.description])
                && filter::matches_category(query.category.as_ref(), &p.category)
        })
        .collect()
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct MarketplaceStats {
    pub total_products: usize,
    pub on_promotion: usize,
    pub free_shipping: usize,
}

pub fn marketplace_stats(products: &[Product]) -> MarketplaceStats {
    MarketplaceStats {
        total_products: products.len(),
        on_promotion: products.iter().filter(|p| p.promotion.is_some()).count(),
        free_shipping: products.iter().filter(|p| p.free_shipping).count(),
    }
}

#[derive(Debug, Serialize)]
pub struct MarketplacePage {
    pub products: Listing<Product>,
    pub stats: MarketplaceStats,
}

pub fn build_marketplace_page(products: Vec<Product>, query: &ProductQuery) -> MarketplacePage {
    let stats = marketplace_stats(&products);

    MarketplacePage {
        products: Listing::new(filter_products(products, query), query.preview),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_filter_products_by_description_and_category() {
        let query = ProductQuery {
            search: "perros".into(),
            category: Some("Vacunas".into()),
            ..Default::default()
        };
        let products = filter_products(fixtures::products(), &query);

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 4);
    }

    #[test]
    fn test_marketplace_stats() {
        assert_eq!(
            marketplace_stats(&fixtures::products()),
            MarketplaceStats {
                total_products: 4,
                on_promotion: 2,
                free_shipping: 2,
            }
        );
    }
}
