//! Interface labels and locale-aware links.

use vitrine_core::Locale;

/// Static interface labels for one locale.
#[derive(Debug)]
pub struct Messages {
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub nav_home: &'static str,
    pub nav_catalogue: &'static str,
    pub nav_cart: &'static str,
    /// Name of the other locale, shown on the language switcher.
    pub switch_language: &'static str,
    pub categories_heading: &'static str,
    pub featured_heading: &'static str,
    pub catalogue_title: &'static str,
    pub search_placeholder: &'static str,
    pub category_label: &'static str,
    pub all_categories: &'static str,
    pub sort_label: &'static str,
    pub sort_none: &'static str,
    pub sort_asc: &'static str,
    pub sort_desc: &'static str,
    pub apply_filters: &'static str,
    pub reset_filters: &'static str,
    pub no_results: &'static str,
    pub products_one: &'static str,
    pub products_other: &'static str,
    pub view_product: &'static str,
    pub reviews: &'static str,
    pub back_to_catalogue: &'static str,
    pub sku_label: &'static str,
    pub quantity: &'static str,
    pub add_to_cart: &'static str,
    pub in_cart: &'static str,
    pub cart_title: &'static str,
    pub cart_empty: &'static str,
    pub continue_shopping: &'static str,
    pub unit_price: &'static str,
    pub update: &'static str,
    pub remove: &'static str,
    pub clear_cart: &'static str,
    pub total: &'static str,
    pub items_label: &'static str,
    pub checkout: &'static str,
    pub checkout_unavailable: &'static str,
    pub product_not_found_title: &'static str,
    pub product_not_found_message: &'static str,
    pub page_not_found_title: &'static str,
    pub page_not_found_message: &'static str,
    pub error_title: &'static str,
    pub retry: &'static str,
    pub go_home: &'static str,
}

const FR: Messages = Messages {
    site_name: "Vitrine",
    tagline: "Votre boutique en ligne",
    nav_home: "Accueil",
    nav_catalogue: "Catalogue",
    nav_cart: "Panier",
    switch_language: "English",
    categories_heading: "Nos catégories",
    featured_heading: "Nos produits",
    catalogue_title: "Catalogue",
    search_placeholder: "Rechercher un produit...",
    category_label: "Catégorie",
    all_categories: "Toutes les catégories",
    sort_label: "Trier par",
    sort_none: "Pertinence",
    sort_asc: "Prix croissant",
    sort_desc: "Prix décroissant",
    apply_filters: "Filtrer",
    reset_filters: "Réinitialiser",
    no_results: "Aucun produit ne correspond à votre recherche.",
    products_one: "produit",
    products_other: "produits",
    view_product: "Voir le produit",
    reviews: "avis",
    back_to_catalogue: "Retour au catalogue",
    sku_label: "Référence",
    quantity: "Quantité",
    add_to_cart: "Ajouter au panier",
    in_cart: "dans le panier",
    cart_title: "Votre panier",
    cart_empty: "Votre panier est vide.",
    continue_shopping: "Continuer mes achats",
    unit_price: "Prix unitaire",
    update: "Mettre à jour",
    remove: "Supprimer",
    clear_cart: "Vider le panier",
    total: "Total",
    items_label: "articles",
    checkout: "Passer commande",
    checkout_unavailable: "Le paiement sera bientôt disponible.",
    product_not_found_title: "Produit introuvable",
    product_not_found_message: "Ce produit n'existe pas ou n'est plus disponible.",
    page_not_found_title: "Page introuvable",
    page_not_found_message: "La page demandée n'existe pas.",
    error_title: "Une erreur est survenue",
    retry: "Réessayer",
    go_home: "Retour à l'accueil",
};

const EN: Messages = Messages {
    site_name: "Vitrine",
    tagline: "Your online shop",
    nav_home: "Home",
    nav_catalogue: "Catalogue",
    nav_cart: "Cart",
    switch_language: "Français",
    categories_heading: "Our categories",
    featured_heading: "Our products",
    catalogue_title: "Catalogue",
    search_placeholder: "Search for a product...",
    category_label: "Category",
    all_categories: "All categories",
    sort_label: "Sort by",
    sort_none: "Relevance",
    sort_asc: "Price: low to high",
    sort_desc: "Price: high to low",
    apply_filters: "Filter",
    reset_filters: "Reset",
    no_results: "No product matches your search.",
    products_one: "product",
    products_other: "products",
    view_product: "View product",
    reviews: "reviews",
    back_to_catalogue: "Back to catalogue",
    sku_label: "SKU",
    quantity: "Quantity",
    add_to_cart: "Add to cart",
    in_cart: "in cart",
    cart_title: "Your cart",
    cart_empty: "Your cart is empty.",
    continue_shopping: "Continue shopping",
    unit_price: "Unit price",
    update: "Update",
    remove: "Remove",
    clear_cart: "Clear cart",
    total: "Total",
    items_label: "items",
    checkout: "Checkout",
    checkout_unavailable: "Checkout is coming soon.",
    product_not_found_title: "Product not found",
    product_not_found_message: "This product does not exist or is no longer available.",
    page_not_found_title: "Page not found",
    page_not_found_message: "The requested page does not exist.",
    error_title: "Something went wrong",
    retry: "Try again",
    go_home: "Back to home",
};

impl Messages {
    #[must_use]
    pub const fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::Fr => &FR,
            Locale::En => &EN,
        }
    }

    /// "1 produit", "12 produits".
    #[must_use]
    pub fn product_count(&self, count: usize) -> String {
        let noun = if count == 1 {
            self.products_one
        } else {
            self.products_other
        };
        format!("{count} {noun}")
    }
}

/// The locale the language switcher points to.
#[must_use]
pub const fn alternate(locale: Locale) -> Locale {
    match locale {
        Locale::Fr => Locale::En,
        Locale::En => Locale::Fr,
    }
}

/// Path under a locale prefix: `("/catalogue", En)` → `/en/catalogue`.
#[must_use]
pub fn localized_path(locale: Locale, path: &str) -> String {
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        format!("/{}", locale.code())
    } else if path.starts_with('/') {
        format!("/{}{path}", locale.code())
    } else {
        format!("/{}/{path}", locale.code())
    }
}

/// Same page under `target`, keeping the query string.
///
/// `path` is the full request path including its current locale segment.
#[must_use]
pub fn switch_locale_href(path: &str, query: Option<&str>, target: Locale) -> String {
    let trimmed = path.trim_start_matches('/');
    let rest = match trimmed.split_once('/') {
        Some((first, rest)) if Locale::parse(first).is_some() => format!("/{rest}"),
        None if Locale::parse(trimmed).is_some() => String::new(),
        _ => format!("/{trimmed}"),
    };

    let mut href = localized_path(target, &rest);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        href.push('?');
        href.push_str(query);
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_per_locale() {
        assert_eq!(Messages::for_locale(Locale::Fr).nav_cart, "Panier");
        assert_eq!(Messages::for_locale(Locale::En).nav_cart, "Cart");
    }

    #[test]
    fn test_product_count() {
        let fr = Messages::for_locale(Locale::Fr);
        assert_eq!(fr.product_count(1), "1 produit");
        assert_eq!(fr.product_count(0), "0 produits");
        assert_eq!(Messages::for_locale(Locale::En).product_count(3), "3 products");
    }

    #[test]
    fn test_alternate() {
        assert_eq!(alternate(Locale::Fr), Locale::En);
        assert_eq!(alternate(Locale::En), Locale::Fr);
    }

    #[test]
    fn test_localized_path() {
        assert_eq!(localized_path(Locale::Fr, ""), "/fr");
        assert_eq!(localized_path(Locale::Fr, "/"), "/fr");
        assert_eq!(localized_path(Locale::En, "/catalogue"), "/en/catalogue");
        assert_eq!(localized_path(Locale::En, "cart"), "/en/cart");
    }

    #[test]
    fn test_switch_locale_href_keeps_path_and_query() {
        assert_eq!(
            switch_locale_href("/fr/catalogue", Some("search=lap&sort=asc"), Locale::En),
            "/en/catalogue?search=lap&sort=asc"
        );
        assert_eq!(
            switch_locale_href("/en/product/laptop", None, Locale::Fr),
            "/fr/product/laptop"
        );
    }

    #[test]
    fn test_switch_locale_href_on_locale_root() {
        assert_eq!(switch_locale_href("/fr", None, Locale::En), "/en");
        assert_eq!(switch_locale_href("/fr/", Some(""), Locale::En), "/en");
    }

    #[test]
    fn test_switch_locale_href_without_prefix() {
        assert_eq!(switch_locale_href("/cart", None, Locale::En), "/en/cart");
    }
}
