use crate::shared::icons::icon;
use leptos::prelude::*;

/// Поле поиска с кнопкой очистки
///
/// Значение передаётся наверх на каждый ввод, без задержки.
#[component]
pub fn SearchInput(
    /// Текущее значение запроса
    #[prop(into)]
    value: Signal<String>,
    /// Callback на каждое изменение текста
    #[prop(into)]
    on_change: Callback<String>,
    /// Callback кнопки очистки
    #[prop(into)]
    on_clear: Callback<()>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <p class="control has-icons-left has-icons-right">
            <input
                data-cy="SearchField"
                type="text"
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />

            <span class="icon is-left">{icon("search")}</span>

            <span class="icon is-right">
                <button
                    data-cy="ClearButton"
                    type="button"
                    class="delete"
                    on:click=move |_| on_clear.run(())
                ></button>
            </span>
        </p>
    }
}
