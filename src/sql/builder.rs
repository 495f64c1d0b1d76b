//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the products table.
//! Identifiers are fixed here; every value is a `$n` placeholder.

pub const PRODUCTS_TABLE: &str = "products";

const COLUMNS: [&str; 4] = ["id", "name", "quantity", "price"];

/// Quote identifier for PostgreSQL. Shared by every statement that names a table or database.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// SELECT by id. Params: `$1` id.
pub fn select_by_id() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(),
        quoted(PRODUCTS_TABLE),
        quoted("id")
    )
}

/// INSERT returning the stored row.
/// Params: `$1` name, `$2` price, and `$3` quantity when `with_quantity`.
/// Without quantity the column default is used.
pub fn insert(with_quantity: bool) -> String {
    let (cols, vals) = if with_quantity {
        (
            [quoted("name"), quoted("price"), quoted("quantity")].join(", "),
            "$1, $2, $3",
        )
    } else {
        ([quoted("name"), quoted("price")].join(", "), "$1, $2")
    };
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(PRODUCTS_TABLE),
        cols,
        vals,
        column_list()
    )
}

/// UPDATE every mutable column, returning the stored row.
/// Params: `$1` id, `$2` name, `$3` price, and `$4` quantity when `with_quantity`.
/// Without quantity the column is reset to its default.
pub fn update(with_quantity: bool) -> String {
    let quantity = if with_quantity { "$4" } else { "DEFAULT" };
    format!(
        "UPDATE {} SET {} = $2, {} = $3, {} = {} WHERE {} = $1 RETURNING {}",
        quoted(PRODUCTS_TABLE),
        quoted("name"),
        quoted("price"),
        quoted("quantity"),
        quantity,
        quoted("id"),
        column_list()
    )
}

/// DELETE by id. Params: `$1` id.
pub fn delete() -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(PRODUCTS_TABLE), quoted("id"))
}
