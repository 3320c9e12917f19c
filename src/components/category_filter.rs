//! Category Filter Form Component
//!
//! Include select plus the dependent exclude select, for pages that render
//! the form client-side. Same derivation as the DOM controller.

use std::collections::HashSet;

use leptos::prelude::*;
use web_sys::HtmlSelectElement;

use crate::collation::default_collator;
use crate::config::FilterConfig;
use crate::derive::derive_exclude_options_for;
use crate::dom::read_options;
use crate::models::{CategoryOption, ExcludeRendering};

/// Ids currently selected in the select that fired `ev`
fn selected_in(ev: &web_sys::Event) -> HashSet<String> {
    let select = event_target::<HtmlSelectElement>(ev);
    read_options(&select)
        .into_iter()
        .filter(|o| o.selected)
        .map(|o| o.id)
        .collect()
}

#[component]
pub fn CategoryFilterForm(
    categories: Vec<CategoryOption>,
    #[prop(optional)] config: FilterConfig,
) -> impl IntoView {
    let config = config.normalized();

    let initial: HashSet<String> = categories
        .iter()
        .filter(|c| c.selected)
        .map(|c| c.id.clone())
        .collect();
    let primary_selected = RwSignal::new(initial);
    let exclude_selected = RwSignal::new(HashSet::<String>::new());
    let exclude = RwSignal::new(ExcludeRendering::default());

    // Only include-side changes re-derive; exclude choices are read untracked
    let derive_categories = categories.clone();
    let derive_config = config.clone();
    Effect::new(move |_| {
        let selected = primary_selected.get();
        let prior = exclude_selected.get_untracked();
        let selected_refs: HashSet<&str> = selected.iter().map(String::as_str).collect();
        let prior_refs: HashSet<&str> = prior.iter().map(String::as_str).collect();

        let rendering = derive_exclude_options_for(
            &derive_categories,
            &selected_refs,
            &prior_refs,
            &derive_config,
            default_collator().as_ref(),
        );
        let kept: HashSet<String> = rendering
            .selected_ids()
            .into_iter()
            .map(str::to_string)
            .collect();
        exclude_selected.set(kept);
        exclude.set(rendering);
    });

    view! {
        <div class="category-filter">
            <label class="category-filter-label">"Categories"</label>
            <select
                multiple
                name=config.primary_name.clone()
                on:change=move |ev| primary_selected.set(selected_in(&ev))
            >
                {categories.into_iter().map(|category| {
                    let id = category.id.clone();
                    view! {
                        <option
                            value=category.id
                            disabled=category.disabled
                            prop:selected=move || primary_selected.with(|s| s.contains(&id))
                        >
                            {category.display_path}
                        </option>
                    }
                }).collect_view()}
            </select>

            <label class="category-filter-label">"Exclude subcategories"</label>
            <select
                multiple
                name=config.secondary_name.clone()
                size=move || exclude.with(|r| r.visible_rows.to_string())
                on:change=move |ev| exclude_selected.set(selected_in(&ev))
            >
                <For
                    each=move || exclude.get().options
                    key=|option| (option.id.clone(), option.selected)
                    children=move |option| {
                        view! {
                            <option value=option.id selected=option.selected>
                                {option.display_path}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
