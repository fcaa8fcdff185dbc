use crate::shared::api_utils::{product_image_path, PLACEHOLDER_IMAGE};
use crate::shared::number_format::format_euro;
use contracts::domain::a001_order::{product_image, OrderItem};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::HtmlImageElement;

/// Swap a broken thumbnail for the placeholder (once)
fn fallback_to_placeholder(ev: &web_sys::Event) {
    let img: HtmlImageElement = event_target(ev);
    if !img.src().ends_with(PLACEHOLDER_IMAGE) {
        img.set_src(PLACEHOLDER_IMAGE);
    }
}

#[component]
pub fn OrderItems(items: Vec<OrderItem>, product_images: HashMap<String, String>) -> impl IntoView {
    view! {
        <div class="order-items">
            {items
                .into_iter()
                .map(|item| {
                    let src = product_image_path(product_image(&product_images, item.product_id));
                    let size = item.size_label().map(str::to_string);
                    view! {
                        <div class="order-item">
                            <div class="order-item__image">
                                <img
                                    src=src
                                    alt=item.name.clone()
                                    loading="lazy"
                                    on:error=move |ev| fallback_to_placeholder(&ev)
                                />
                            </div>
                            <div class="order-item__info">
                                <p class="order-item__name">"Product: " {item.name.clone()}</p>
                                {size.map(|s| view! { <p>"Size: " {s}</p> })}
                                <p>"Qty: " {item.quantity}</p>
                                <p class="order-item__price">{format_euro(item.price)}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
