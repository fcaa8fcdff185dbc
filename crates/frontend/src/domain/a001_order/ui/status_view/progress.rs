//! Order progress templates
//!
//! Both layouts render the same `OrderProgress`; only markup differs.

use contracts::domain::a001_order::{OrderProgress, ProgressStep};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressLayout {
    /// Bar with connectors, for wide screens
    #[default]
    Horizontal,
    /// Compact list, for narrow screens
    Vertical,
}

#[component]
pub fn OrderProgressDisplay(
    #[prop(into)] progress: Signal<OrderProgress>,
    #[prop(optional)] layout: ProgressLayout,
) -> impl IntoView {
    move || match progress.get() {
        OrderProgress::Canceled => view! {
            <div class="order-progress__notice order-progress__notice--canceled">
                "❌ Order has been canceled."
            </div>
        }
        .into_any(),
        OrderProgress::ReturnRequested => view! {
            <div class="order-progress__notice order-progress__notice--return">
                "Return of the order has been requested"
            </div>
        }
        .into_any(),
        OrderProgress::Steps(steps) => match layout {
            ProgressLayout::Horizontal => view! { <ProgressHorizontal steps=steps /> }.into_any(),
            ProgressLayout::Vertical => view! { <ProgressVertical steps=steps /> }.into_any(),
        },
    }
}

fn segment_class(done: bool) -> &'static str {
    if done {
        "order-progress__segment order-progress__segment--done"
    } else {
        "order-progress__segment"
    }
}

#[component]
fn ProgressHorizontal(steps: Vec<ProgressStep>) -> impl IntoView {
    let last = steps.len().saturating_sub(1);
    let labels = steps.clone();

    view! {
        <div class="order-progress order-progress--horizontal">
            <div class="order-progress__track">
                {steps
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <div class="order-progress__step">
                                {(index != 0).then(|| view! { <div class=segment_class(step.leading_done)></div> })}
                                <div class=format!(
                                    "order-progress__marker order-progress__marker--{}",
                                    step.state.css_modifier(),
                                )>{step.number}</div>
                                {(index != last).then(|| view! { <div class=segment_class(step.trailing_done)></div> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="order-progress__labels">
                {labels
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| {
                        let align = if index == 0 {
                            "order-progress__label order-progress__label--start"
                        } else if index == last {
                            "order-progress__label order-progress__label--end"
                        } else {
                            "order-progress__label"
                        };
                        view! { <div class=align>{step.label}</div> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProgressVertical(steps: Vec<ProgressStep>) -> impl IntoView {
    view! {
        <ol class="order-progress order-progress--vertical">
            {steps
                .into_iter()
                .map(|step| {
                    let class = format!(
                        "order-progress__item order-progress__item--{}",
                        step.state.css_modifier(),
                    );
                    view! {
                        <li class=class>
                            <span class="order-progress__marker">
                                {if step.is_reached() { "✓".to_string() } else { step.number.to_string() }}
                            </span>
                            <span class="order-progress__label">{step.label}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
