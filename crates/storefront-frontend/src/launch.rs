//! Launch links.
//!
//! The storefront can be started with a link such as
//! `products.html?category=jewelery&id=3`, either relative or as a full URL.
//! The link decides which page opens first, which category is preselected and
//! which product is shown in the details modal.

use url::Url;

/// Base used to resolve relative launch links.
const LINK_BASE: &str = "https://storefront.invalid/";

/// Top-level pages of the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    /// Landing page with the trending products.
    #[default]
    Home,
    /// Full catalog with the category filter.
    Products,
}

/// Where the storefront opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRoute {
    pub page: Page,
    /// Category to preselect on the products page.
    pub category: Option<String>,
    /// Product to open in the details modal on the products page.
    pub product_id: Option<u64>,
}

impl LaunchRoute {
    /// Parses a launch link. The products page is chosen when the last path
    /// segment is `products.html` or `products`; everything else is the home
    /// page. An `id` that is not a number is ignored.
    pub fn parse(link: &str) -> Result<Self, url::ParseError> {
        let url = match Url::parse(link) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(LINK_BASE)?.join(link)?,
            Err(e) => return Err(e),
        };

        let last_segment = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_lowercase();
        let page = match last_segment.as_str() {
            "products.html" | "products" => Page::Products,
            _ => Page::Home,
        };

        let mut route = Self {
            page,
            ..Self::default()
        };
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "category" if !value.trim().is_empty() => {
                    route.category = Some(value.into_owned());
                }
                "id" => match value.trim().parse() {
                    Ok(id) => route.product_id = Some(id),
                    Err(_) => log::warn!("Ignoring invalid product id {value:?} in launch link"),
                },
                _ => {}
            }
        }

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_page_with_parameters() {
        let route = LaunchRoute::parse("products.html?category=men%27s%20clothing&id=3").unwrap();
        assert_eq!(
            route,
            LaunchRoute {
                page: Page::Products,
                category: Some("men's clothing".into()),
                product_id: Some(3),
            }
        );
    }

    #[test]
    fn full_url_is_accepted() {
        let route = LaunchRoute::parse("https://shop.example/store/Products.html?id=7").unwrap();
        assert_eq!(route.page, Page::Products);
        assert_eq!(route.product_id, Some(7));
        assert_eq!(route.category, None);
    }

    #[test]
    fn other_paths_open_home() {
        assert_eq!(LaunchRoute::parse("index.html").unwrap().page, Page::Home);
        assert_eq!(LaunchRoute::parse("/").unwrap().page, Page::Home);
    }

    #[test]
    fn invalid_id_is_ignored() {
        let route = LaunchRoute::parse("products?id=abc&category=jewelery").unwrap();
        assert_eq!(route.product_id, None);
        assert_eq!(route.category.as_deref(), Some("jewelery"));
    }

    #[test]
    fn empty_category_is_ignored() {
        let route = LaunchRoute::parse("products?category=").unwrap();
        assert_eq!(route.category, None);
    }
}
