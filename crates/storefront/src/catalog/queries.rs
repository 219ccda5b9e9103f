//! GraphQL operations against the upstream commerce API.
//!
//! The upstream schema is owned externally and not vendored, so the
//! `GraphQLQuery` implementations are written by hand instead of derived.
//! Each operation gets a module with its `Variables` and `ResponseData`,
//! the same layout the derive macro generates.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::Deserialize;

const GET_CATEGORIES: &str = include_str!("../../graphql/get_categories.graphql");
const GET_PRODUCTS: &str = include_str!("../../graphql/get_products.graphql");
const GET_PRODUCT_BY_SLUG: &str = include_str!("../../graphql/get_product_by_slug.graphql");

/// `featuredAsset` / `assets[]` selection.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetNode {
    pub preview: String,
}

/// Collection as embedded in a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionRefNode {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: String,
    #[serde(default)]
    pub sku: String,
    pub price_with_tax: i64,
    pub currency_code: String,
}

/// Product selection shared by the listing and detail queries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured_asset: Option<AssetNode>,
    #[serde(default)]
    pub assets: Vec<AssetNode>,
    #[serde(default)]
    pub collections: Vec<CollectionRefNode>,
    #[serde(default)]
    pub variants: Vec<VariantNode>,
}

pub struct GetCategories;

pub mod get_categories {
    use serde::{Deserialize, Serialize};

    use super::AssetNode;

    pub const OPERATION_NAME: &str = "GetCategories";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collections: CollectionList,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CollectionList {
        #[serde(default)]
        pub items: Vec<CollectionNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CollectionNode {
        pub id: String,
        pub name: String,
        pub slug: String,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub featured_asset: Option<AssetNode>,
    }
}

impl GraphQLQuery for GetCategories {
    type Variables = get_categories::Variables;
    type ResponseData = get_categories::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_CATEGORIES,
            operation_name: get_categories::OPERATION_NAME,
        }
    }
}

pub struct GetProducts;

pub mod get_products {
    use serde::{Deserialize, Serialize};

    use super::ProductNode;

    pub const OPERATION_NAME: &str = "GetProducts";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub skip: i64,
        pub take: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: ProductList,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductList {
        pub total_items: i64,
        #[serde(default)]
        pub items: Vec<ProductNode>,
    }
}

impl GraphQLQuery for GetProducts {
    type Variables = get_products::Variables;
    type ResponseData = get_products::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_PRODUCTS,
            operation_name: get_products::OPERATION_NAME,
        }
    }
}

pub struct GetProductBySlug;

pub mod get_product_by_slug {
    use serde::{Deserialize, Serialize};

    use super::ProductNode;

    pub const OPERATION_NAME: &str = "GetProductBySlug";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub slug: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub product: Option<ProductNode>,
    }
}

impl GraphQLQuery for GetProductBySlug {
    type Variables = get_product_by_slug::Variables;
    type ResponseData = get_product_by_slug::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_PRODUCT_BY_SLUG,
            operation_name: get_product_by_slug::OPERATION_NAME,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_body_shape() {
        let body = GetProducts::build_query(get_products::Variables { skip: 50, take: 50 });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["operationName"], "GetProducts");
        assert_eq!(json["variables"]["skip"], 50);
        assert!(json["query"].as_str().unwrap().contains("totalItems"));
    }

    #[test]
    fn test_documents_name_their_operations() {
        assert!(GET_CATEGORIES.contains("query GetCategories"));
        assert!(GET_PRODUCTS.contains("query GetProducts"));
        assert!(GET_PRODUCT_BY_SLUG.contains("query GetProductBySlug"));
    }

    #[test]
    fn test_product_node_tolerates_missing_optionals() {
        let node: ProductNode = serde_json::from_value(serde_json::json!({
            "id": "1",
            "slug": "laptop",
            "name": "Laptop",
            "featuredAsset": null
        }))
        .unwrap();
        assert!(node.description.is_none());
        assert!(node.featured_asset.is_none());
        assert!(node.variants.is_empty());
    }
}
