//! Product domain: the record shape, derived table views, and the
//! form validation rules.

mod product;
mod validate;
mod views;

pub use product::{revision_for, wire_date, Product, ProductDraft};
pub use validate::{validate, Field, FieldErrors};
pub use views::{filter_by_name, page_view, paginate, total_pages, PageView};
