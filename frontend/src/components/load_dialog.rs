use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::hooks::{SettingsHandle, WheelHandle};
use crate::sound::{self, Sound};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LoadDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn format_date(epoch_ms: u64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(epoch_ms as f64));
    String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED))
}

#[function_component(LoadDialog)]
pub fn load_dialog(props: &LoadDialogProps) -> Html {
    let wheel = use_context::<WheelHandle>().expect("LoadDialog needs the wheel context");
    let settings = use_context::<SettingsHandle>().expect("LoadDialog needs the settings context");

    if !props.open {
        return html! {};
    }

    let saved = wheel.saved();

    let onclose = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let rows = saved.iter().map(|roulette| {
        let onload = {
            let wheel = wheel.clone();
            let settings = settings.clone();
            let on_close = props.on_close.clone();
            let id = roulette.id;
            Callback::from(move |_: MouseEvent| {
                wheel.load(id);
                sound::play(Sound::Click, settings.sound_enabled());
                on_close.emit(());
            })
        };
        let ondelete = {
            let wheel = wheel.clone();
            let id = roulette.id;
            Callback::from(move |_: MouseEvent| wheel.delete_saved(id))
        };
        html! {
            <li key={roulette.id.to_string()} class={styles::LIST_ROW}>
                <div class="flex-1 min-w-0">
                    <div class={classes!(styles::TEXT_BODY, "font-medium", "truncate")}>
                        {&roulette.name}
                    </div>
                    <div class={styles::TEXT_SMALL}>
                        { format!(
                            "{} item{} · updated {}",
                            roulette.items.len(),
                            if roulette.items.len() == 1 { "" } else { "s" },
                            format_date(roulette.updated_at),
                        )}
                    </div>
                </div>
                <button class={styles::BUTTON_PRIMARY} onclick={onload}>{"Load"}</button>
                <button class={styles::BUTTON_DANGER} onclick={ondelete}>{"Delete"}</button>
            </li>
        }
    });

    html! {
        <div class={styles::DIALOG_BACKDROP}>
            <div class={styles::DIALOG_PANEL}>
                <h3 class={styles::TEXT_H3}>{"Load roulette"}</h3>
                {
                    if saved.is_empty() {
                        html! {
                            <p class={classes!(styles::TEXT_SMALL, "mt-4")}>
                                {"Nothing saved yet. Save the current list first."}
                            </p>
                        }
                    } else {
                        html! {
                            <ul class="divide-y divide-gray-100 dark:divide-gray-700 mt-4 max-h-80 overflow-y-auto">
                                { for rows }
                            </ul>
                        }
                    }
                }
                <div class="flex justify-end mt-6">
                    <button class={styles::BUTTON_SECONDARY} onclick={onclose}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
