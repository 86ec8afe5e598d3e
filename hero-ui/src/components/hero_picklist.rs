//! Toggleable grid of predefined hero options.

use crate::state::AppState;
use dioxus::prelude::*;

/// Grid with one chip per catalog entry. Renders nothing while the list
/// is hidden.
#[component]
pub fn HeroPicklist() -> Element {
    let state = use_context::<AppState>();
    let (show_list, current) = {
        let form = state.form.read();
        (form.show_list, form.hero.clone())
    };
    if !show_list {
        return rsx! {};
    }

    let heroes: Vec<String> = state.catalog.read().iter().map(String::from).collect();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(140px, 1fr)); gap: 8px; max-height: 300px; overflow-y: auto; padding: 12px; background: rgba(255,255,255,0.95); border-radius: 8px; margin-top: 8px;",
            // Keyed by position so duplicate names stay distinct
            for (index, hero) in heroes.into_iter().enumerate() {
                HeroChip {
                    key: "{index}",
                    selected: hero == current,
                    hero: hero.clone(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HeroChipProps {
    pub hero: String,
    #[props(default = false)]
    pub selected: bool,
}

/// A single selectable hero. Clicking writes the hero into the form and
/// closes the picklist.
#[component]
pub fn HeroChip(props: HeroChipProps) -> Element {
    let mut state = use_context::<AppState>();
    let hero = props.hero.clone();

    let on_click = move |_| {
        state.form.write().select_hero(hero.clone());
    };

    let style = if props.selected {
        "padding: 8px 12px; font-size: 13px; background: #667eea; color: #fff; border: 2px solid #667eea; border-radius: 6px; cursor: pointer; text-align: center; font-weight: bold;"
    } else {
        "padding: 8px 12px; font-size: 13px; background: #f0f0f0; color: #333; border: 2px solid transparent; border-radius: 6px; cursor: pointer; text-align: center; font-weight: 500;"
    };

    rsx! {
        button {
            r#type: "button",
            style: "{style}",
            onclick: on_click,
            "{props.hero}"
        }
    }
}
