//! OpenAPI document for the product routes.

use crate::error::ErrorBody;
use crate::handlers::product;
use crate::model::{Product, ProductInput};
use crate::response::DeleteResult;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "product-api"),
    paths(
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
    ),
    components(schemas(Product, ProductInput, DeleteResult, ErrorBody))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_product_route() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/product/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
        assert!(doc.paths.paths.get("/product").and_then(|p| p.post.as_ref()).is_some());
    }
}
