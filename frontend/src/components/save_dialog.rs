use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::{SettingsHandle, WheelHandle};
use crate::sound::{self, Sound};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SaveDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(SaveDialog)]
pub fn save_dialog(props: &SaveDialogProps) -> Html {
    let wheel = use_context::<WheelHandle>().expect("SaveDialog needs the wheel context");
    let settings = use_context::<SettingsHandle>().expect("SaveDialog needs the settings context");
    let name = use_state(String::new);

    // Prefill with the current name each time the dialog opens.
    {
        let name = name.clone();
        let current = wheel.current_name();
        use_effect_with(props.open, move |open| {
            if *open {
                name.set(current);
            }
            || ()
        });
    }

    if !props.open {
        return html! {};
    }

    let save = {
        let wheel = wheel.clone();
        let settings = settings.clone();
        let name = name.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            wheel.save_current(&name);
            sound::play(Sound::Click, settings.sound_enabled());
            on_close.emit(());
        })
    };

    let onclick_save = {
        let save = save.clone();
        Callback::from(move |_: MouseEvent| save.emit(()))
    };
    let onkeydown = {
        let save = save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => save.emit(()),
            "Escape" => on_close.emit(()),
            _ => {}
        })
    };
    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let onclose = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::DIALOG_BACKDROP}>
            <div class={styles::DIALOG_PANEL}>
                <h3 class={styles::TEXT_H3}>{"Save roulette"}</h3>
                <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                    {"Saved lists live in this browser's local storage."}
                </p>
                <label class={classes!(styles::TEXT_LABEL, "mt-4")}>{"Name"}</label>
                <input
                    class={classes!(styles::INPUT, "mt-1")}
                    type="text"
                    value={(*name).clone()}
                    {oninput}
                    {onkeydown}
                />
                <div class="flex justify-end gap-2 mt-6">
                    <button class={styles::BUTTON_SECONDARY} onclick={onclose}>{"Cancel"}</button>
                    <button class={styles::BUTTON_PRIMARY} onclick={onclick_save}>{"Save"}</button>
                </div>
            </div>
        </div>
    }
}
