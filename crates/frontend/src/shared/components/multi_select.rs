use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dropdown with a checkbox per option.
///
/// Reports the toggled option; the caller owns the selection.
#[component]
pub fn MultiSelect(
    label: &'static str,
    /// Selectable values
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently selected values, in selection order
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    let button_text = move || {
        let count = selected.with(|s| s.len());
        if count > 0 {
            format!("{} ({})", label, count)
        } else {
            label.to_string()
        }
    };

    view! {
        <div class="multi-select">
            <button
                type="button"
                class=move || if selected.with(|s| s.is_empty()) {
                    "multi-select__button"
                } else {
                    "multi-select__button multi-select__button--active"
                }
                on:click=move |_| set_is_open.update(|o| *o = !*o)
            >
                <span>{button_text}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || is_open.get()>
                <div class="multi-select__backdrop" on:click=move |_| set_is_open.set(false)></div>
                <div class="multi-select__menu">
                    {move || {
                        let opts = options.get();
                        if opts.is_empty() {
                            view! { <div class="multi-select__empty">"No options available"</div> }.into_any()
                        } else {
                            opts.into_iter().map(|option| {
                                let value = option.clone();
                                let checked_value = option.clone();
                                view! {
                                    <label class="multi-select__option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.with(|s| s.contains(&checked_value))
                                            on:change=move |_| on_toggle.run(value.clone())
                                        />
                                        <span>{option}</span>
                                    </label>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
