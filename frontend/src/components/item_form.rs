use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::{SettingsHandle, WheelHandle};
use crate::sound::{self, Sound};
use crate::styles;

#[function_component(ItemForm)]
pub fn item_form() -> Html {
    let wheel = use_context::<WheelHandle>().expect("ItemForm needs the wheel context");
    let settings = use_context::<SettingsHandle>().expect("ItemForm needs the settings context");
    let draft = use_state(String::new);

    let submit = {
        let wheel = wheel.clone();
        let settings = settings.clone();
        let draft = draft.clone();
        Callback::from(move |_: ()| {
            // Blank labels are ignored by the engine; don't clear the field
            // or click for them.
            if draft.trim().is_empty() {
                return;
            }
            wheel.add_item(&draft);
            sound::play(Sound::Click, settings.sound_enabled());
            draft.set(String::new());
        })
    };

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    html! {
        <div class="flex gap-2">
            <input
                class={styles::INPUT}
                type="text"
                placeholder="Add an item..."
                value={(*draft).clone()}
                {oninput}
                {onkeydown}
            />
            <button class={styles::BUTTON_PRIMARY} {onclick} disabled={draft.trim().is_empty()}>
                {"Add"}
            </button>
        </div>
    }
}
