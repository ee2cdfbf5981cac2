//! Catalog grid cards.

use std::rc::Rc;

use leptos::prelude::*;

use crate::catalog::Product;

/// Handler bound to a card button; receives the product id.
pub type ProductAction = Rc<dyn Fn(&'static str)>;

/// One product with "View Details" and "Compare" actions.
///
/// The product id is captured when the card is built, so the buttons carry
/// no inline script or attribute the handler would have to parse back.
#[component]
pub fn ProductCard(product: Product, on_view: ProductAction, on_compare: ProductAction) -> impl IntoView {
    let id = product.id;

    view! {
        <div class="product-card" data-product=id>
            <div class="product-image">
                <img src=product.image_url alt=product.title loading="lazy"/>
            </div>
            <div class="product-info">
                <h4 class="product-title">{product.title}</h4>
                <p class="product-spec">{product.spec}</p>
                <div class="product-price">{product.price_label()}</div>
                <div class="product-actions">
                    <button class="btn-primary" on:click=move |_| on_view(id)>
                        "View Details"
                    </button>
                    <button class="btn-secondary" on:click=move |_| on_compare(id)>
                        "Compare"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Every visible product, or a short notice when filters hide them all.
#[component]
pub fn ProductGrid(products: Vec<Product>, on_view: ProductAction, on_compare: ProductAction) -> impl IntoView {
    if products.is_empty() {
        return view! { <p class="products-empty">"No products match your filters."</p> }.into_any();
    }

    products
        .into_iter()
        .map(|product| {
            view! { <ProductCard product=product on_view=Rc::clone(&on_view) on_compare=Rc::clone(&on_compare)/> }
        })
        .collect::<Vec<_>>()
        .into_any()
}
