use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search debounce delay
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Text input that reports its value only after the user stops typing
#[component]
pub fn SearchInput(
    /// Initial text (e.g. restored from the URL)
    #[prop(optional, into)]
    initial: String,
    /// Called with the settled value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Name, Phone no.".to_string()
    } else {
        placeholder
    };

    // Local value, before debounce
    let (input_value, set_input_value) = signal(initial);
    let debouncer = StoredValue::new_local(Debouncer::new(SEARCH_DEBOUNCE_MS));

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debouncer.update_value(|d| {
            d.schedule(move || on_change.run(new_value));
        });
    };

    let clear = move |_| {
        debouncer.update_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
