use leptos::prelude::*;

/// DateRangeInput component - two date fields reported as a pair
///
/// Half-filled ranges stay local; `on_change` always receives both bounds
/// (possibly empty) and the caller decides whether the pair is usable.
#[component]
pub fn DateRangeInput(
    /// Committed range as (from, to) in yyyy-mm-dd, None when not set
    #[prop(into)]
    value: Signal<Option<(String, String)>>,

    /// Callback on any edit with (from, to)
    on_change: Callback<(String, String)>,

    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());

    // Follow external changes, e.g. "clear all"
    Effect::new(move |_| match value.get() {
        Some((from, to)) => {
            set_date_from.set(from);
            set_date_to.set(to);
        }
        None => {
            let complete = !date_from.get_untracked().is_empty()
                && !date_to.get_untracked().is_empty();
            if complete {
                set_date_from.set(String::new());
                set_date_to.set(String::new());
            }
        }
    });

    let on_from_change = move |new_from: String| {
        set_date_from.set(new_from.clone());
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_change = move |new_to: String| {
        set_date_to.set(new_to.clone());
        on_change.run((date_from.get_untracked(), new_to));
    };

    view! {
        <div class="date-range-input">
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <div class="date-range-input__fields">
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_from.get()
                    on:change=move |ev| on_from_change(event_target_value(&ev))
                />
                <span>"—"</span>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_to.get()
                    on:change=move |ev| on_to_change(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
