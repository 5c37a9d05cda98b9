use uuid::Uuid;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::WheelHandle;
use crate::styles;

#[function_component(ItemsList)]
pub fn items_list() -> Html {
    let wheel = use_context::<WheelHandle>().expect("ItemsList needs the wheel context");
    // Id and draft label of the row being edited, if any.
    let editing = use_state(|| None::<(Uuid, String)>);

    let items = wheel.items();
    if items.is_empty() {
        return html! {
            <p class={classes!(styles::TEXT_SMALL, "mt-4", "text-center")}>
                {"No items yet. Add at least two to spin."}
            </p>
        };
    }

    let commit_edit = {
        let wheel = wheel.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            if let Some((id, label)) = (*editing).clone() {
                wheel.update_item(id, &label);
            }
            editing.set(None);
        })
    };

    let rows = items.iter().map(|item| {
        let row_edit = (*editing)
            .clone()
            .filter(|(id, _)| *id == item.id)
            .map(|(_, label)| label);

        match row_edit {
            Some(label) => {
                let oninput = {
                    let editing = editing.clone();
                    let id = item.id;
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        editing.set(Some((id, input.value())));
                    })
                };
                let onkeydown = {
                    let commit_edit = commit_edit.clone();
                    let editing = editing.clone();
                    Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
                        "Enter" => commit_edit.emit(()),
                        "Escape" => editing.set(None),
                        _ => {}
                    })
                };
                let onsave = {
                    let commit_edit = commit_edit.clone();
                    Callback::from(move |_: MouseEvent| commit_edit.emit(()))
                };
                let oncancel = {
                    let editing = editing.clone();
                    Callback::from(move |_: MouseEvent| editing.set(None))
                };
                html! {
                    <li key={item.id.to_string()} class={styles::LIST_ROW}>
                        <input class={styles::INPUT} value={label} {oninput} {onkeydown} />
                        <button class={styles::BUTTON_PRIMARY} onclick={onsave}>{"Save"}</button>
                        <button class={styles::BUTTON_SECONDARY} onclick={oncancel}>{"Cancel"}</button>
                    </li>
                }
            }
            None => {
                let onedit = {
                    let editing = editing.clone();
                    let id = item.id;
                    let label = item.label.clone();
                    Callback::from(move |_: MouseEvent| editing.set(Some((id, label.clone()))))
                };
                let onremove = {
                    let wheel = wheel.clone();
                    let id = item.id;
                    Callback::from(move |_: MouseEvent| wheel.remove_item(id))
                };
                html! {
                    <li key={item.id.to_string()} class={styles::LIST_ROW}>
                        <span class={classes!(styles::TEXT_BODY, "truncate", "flex-1")}>
                            {&item.label}
                        </span>
                        <button class={styles::BUTTON_SECONDARY} onclick={onedit}>{"Edit"}</button>
                        <button class={styles::BUTTON_DANGER} onclick={onremove}>{"Remove"}</button>
                    </li>
                }
            }
        }
    });

    let onclear = {
        let wheel = wheel.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            wheel.clear_items();
        })
    };

    html! {
        <div class="mt-4">
            <ul class="divide-y divide-gray-100 dark:divide-gray-700">
                { for rows }
            </ul>
            <div class="flex items-center justify-between mt-4">
                <span class={styles::TEXT_SMALL}>
                    { format!("{} item{}", items.len(), if items.len() == 1 { "" } else { "s" }) }
                </span>
                <button class={styles::BUTTON_SECONDARY} onclick={onclear}>{"Clear all"}</button>
            </div>
        </div>
    }
}
