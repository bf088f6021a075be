/// Pagination parameters accepted by every list endpoint.
///
/// `sort` entries are sent as repeated `sort` query parameters, e.g.
/// `price,desc`.
#[derive(Debug, Clone, Default)]
pub struct Pageable {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
}

impl Pageable {
    pub(crate) fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        for sort in &self.sort {
            query.push(("sort", sort.clone()));
        }
    }
}

/// Catalog search filters; unset fields are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub query: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub brand_ids: Vec<i64>,
    pub category_id: Option<i64>,
    pub in_stock: Option<bool>,
    pub min_rating: Option<f64>,
}

impl ProductFilters {
    pub(crate) fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(text) = &self.query {
            query.push(("query", text.clone()));
        }
        if let Some(min_price) = self.min_price {
            query.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            query.push(("maxPrice", max_price.to_string()));
        }
        for id in &self.brand_ids {
            query.push(("brandId", id.to_string()));
        }
        if let Some(category_id) = self.category_id {
            query.push(("categoryId", category_id.to_string()));
        }
        if let Some(in_stock) = self.in_stock {
            query.push(("inStock", in_stock.to_string()));
        }
        if let Some(min_rating) = self.min_rating {
            query.push(("minRating", min_rating.to_string()));
        }
    }
}
