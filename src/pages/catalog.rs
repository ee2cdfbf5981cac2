//! Catalog page: category grid, search results, filters and sorting.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use super::{SharedStorefront, with_storefront};
use crate::catalog::StaticCatalog;
use crate::catalog::query::{CatalogListing, FilterSet, SortOrder};
use crate::components::product_card::{ProductAction, ProductGrid};
use crate::router::CatalogQuery;
use crate::ui::{NotificationKind, Ui};
use crate::util::dom;

/// The mounted grid; replacing it unmounts the previous render.
type MountedGrid = Rc<RefCell<Option<Box<dyn Any>>>>;

struct CatalogPage {
    storefront: SharedStorefront,
    listing: RefCell<CatalogListing>,
    grid: MountedGrid,
}

pub(super) fn init(storefront: &SharedStorefront, query: &CatalogQuery) {
    let view = storefront.borrow().catalog_view(&StaticCatalog, query);

    if let Some(title) = dom::query(".products-title") {
        title.set_text_content(Some(view.title));
    }
    if query.guided {
        if let Some(filters) = dom::query(".filters") {
            dom::add_class(&filters, "guided");
        }
    }

    let page = Rc::new(CatalogPage {
        storefront: Rc::clone(storefront),
        listing: RefCell::new(CatalogListing::new(view.products)),
        grid: Rc::new(RefCell::new(None)),
    });
    page.render();
    wire_controls(&page);

    storefront.borrow().refresh_compare();
}

impl CatalogPage {
    fn render(&self) {
        let Some(container) = dom::query(".products-grid").and_then(|el| el.dyn_ref::<web_sys::HtmlElement>().cloned())
        else {
            return;
        };
        let products = self.listing.borrow().visible();

        let on_view: ProductAction = {
            let storefront = Rc::clone(&self.storefront);
            Rc::new(move |id: &'static str| {
                with_storefront(&storefront, |s| s.view_product(id));
            })
        };
        let on_compare: ProductAction = {
            let storefront = Rc::clone(&self.storefront);
            Rc::new(move |id: &'static str| {
                with_storefront(&storefront, |s| s.add_to_compare(id));
            })
        };

        // Unmount the previous grid before mounting the new one.
        drop(self.grid.borrow_mut().take());
        container.set_inner_html("");
        let handle = leptos::mount::mount_to(container, move || {
            view! { <ProductGrid products=products on_view=on_view on_compare=on_compare/> }
        });
        *self.grid.borrow_mut() = Some(Box::new(handle));
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        with_storefront(&self.storefront, |s| s.ui().notify(message, kind));
    }
}

fn wire_controls(page: &Rc<CatalogPage>) {
    let apply = Rc::clone(page);
    dom::on_first(".filter-apply", "click", move |_| {
        let filters = collect_filters();
        log::debug!("applied filters: {filters:?}");
        apply.listing.borrow_mut().set_filters(filters);
        apply.render();
        apply.notify("Filters applied!", NotificationKind::Success);
    });

    let clear = Rc::clone(page);
    dom::on_first(".filter-clear", "click", move |_| {
        reset_filter_inputs();
        clear.listing.borrow_mut().clear_filters();
        clear.render();
        clear.notify("Filters cleared!", NotificationKind::Info);
    });

    let sort = Rc::clone(page);
    dom::on_first(".sort-select", "change", move |ev| {
        let Some(select) = ev.target().and_then(|t| t.dyn_ref::<HtmlSelectElement>().cloned()) else {
            return;
        };
        let value = select.value();
        sort.listing.borrow_mut().set_order(SortOrder::parse(&value));
        sort.render();
        sort.notify(&format!("Sorted by {value}"), NotificationKind::Info);
    });
}

fn collect_filters() -> FilterSet {
    FilterSet::from_inputs(
        &dom::input_value_by_id("minPrice"),
        &dom::input_value_by_id("maxPrice"),
        dom::checked_values("ram"),
        dom::checked_values("storage"),
        dom::checked_values("brand"),
    )
}

fn reset_filter_inputs() {
    for element in dom::query_all("input[type=\"checkbox\"]") {
        if let Some(checkbox) = element.dyn_ref::<HtmlInputElement>() {
            checkbox.set_checked(false);
        }
    }
    for element in dom::query_all("input[type=\"number\"]") {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
