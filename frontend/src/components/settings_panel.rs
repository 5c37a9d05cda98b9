use engine::storage::Theme;
use yew::prelude::*;

use crate::hooks::{SettingsHandle, WheelHandle};
use crate::styles;

#[function_component(SettingsPanel)]
pub fn settings_panel() -> Html {
    let wheel = use_context::<WheelHandle>().expect("SettingsPanel needs the wheel context");
    let settings =
        use_context::<SettingsHandle>().expect("SettingsPanel needs the settings context");

    let on_toggle_sound = {
        let settings = settings.clone();
        Callback::from(move |_: Event| settings.toggle_sound())
    };
    let on_toggle_theme = {
        let settings = settings.clone();
        Callback::from(move |_: Event| settings.toggle_theme())
    };
    let on_toggle_auto_remove = {
        let wheel = wheel.clone();
        Callback::from(move |_: Event| wheel.set_auto_remove(!wheel.auto_remove_enabled()))
    };

    html! {
        <div>
            <h2 class={styles::TEXT_H3}>{"Settings"}</h2>
            <div class="mt-2 divide-y divide-gray-100 dark:divide-gray-700">
                <div class={styles::TOGGLE_ROW}>
                    <div>
                        <div class={styles::TEXT_BODY}>{"Remove winner after spin"}</div>
                        <div class={styles::TEXT_SMALL}>
                            {"Each winning item leaves the wheel automatically."}
                        </div>
                    </div>
                    <input
                        type="checkbox"
                        class="h-5 w-5 accent-blue-600"
                        checked={wheel.auto_remove_enabled()}
                        onchange={on_toggle_auto_remove}
                    />
                </div>
                <div class={styles::TOGGLE_ROW}>
                    <div class={styles::TEXT_BODY}>{"Sound effects"}</div>
                    <input
                        type="checkbox"
                        class="h-5 w-5 accent-blue-600"
                        checked={settings.sound_enabled()}
                        onchange={on_toggle_sound}
                    />
                </div>
                <div class={styles::TOGGLE_ROW}>
                    <div class={styles::TEXT_BODY}>{"Dark mode"}</div>
                    <input
                        type="checkbox"
                        class="h-5 w-5 accent-blue-600"
                        checked={settings.theme() == Theme::Dark}
                        onchange={on_toggle_theme}
                    />
                </div>
            </div>
        </div>
    }
}
