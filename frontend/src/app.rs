use yew::prelude::*;

use crate::components::{
    Header, ItemForm, ItemsList, LoadDialog, SaveDialog, SettingsPanel, SpinResult, WheelCanvas,
};
use crate::hooks::{SettingsHandle, WheelHandle, use_settings, use_wheel};
use crate::styles;

#[function_component(App)]
pub fn app() -> Html {
    let wheel = use_wheel();
    let settings = use_settings();
    let save_open = use_state(|| false);
    let load_open = use_state(|| false);

    let items = wheel.items();
    let spinning = wheel.is_spinning();
    let can_spin = !spinning && !items.is_empty();

    let on_spin = {
        let wheel = wheel.clone();
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| wheel.spin(settings.sound_enabled()))
    };
    let on_new = {
        let wheel = wheel.clone();
        Callback::from(move |_: MouseEvent| wheel.create_new(""))
    };
    let open_save = {
        let save_open = save_open.clone();
        Callback::from(move |_: MouseEvent| save_open.set(true))
    };
    let close_save = {
        let save_open = save_open.clone();
        Callback::from(move |_: ()| save_open.set(false))
    };
    let open_load = {
        let load_open = load_open.clone();
        Callback::from(move |_: MouseEvent| load_open.set(true))
    };
    let close_load = {
        let load_open = load_open.clone();
        Callback::from(move |_: ()| load_open.set(false))
    };

    html! {
        <ContextProvider<WheelHandle> context={wheel.clone()}>
        <ContextProvider<SettingsHandle> context={settings.clone()}>
            <div class={styles::CONTAINER}>
                <Header />
                <main class="max-w-5xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                    <section class={styles::CARD}>
                        <WheelCanvas
                            items={items.clone()}
                            angle={wheel.angle()}
                            spinning={spinning}
                            duration_ms={wheel.spin_duration_ms()}
                            winner={wheel.winner()}
                        />
                        <div class="mt-6">
                            <button class={styles::BUTTON_SPIN} disabled={!can_spin} onclick={on_spin}>
                                { if spinning { "Spinning..." } else { "Spin!" } }
                            </button>
                        </div>
                        <SpinResult />
                    </section>

                    <section class="flex flex-col gap-6">
                        <div class={styles::CARD}>
                            <div class="flex items-center justify-between mb-4">
                                <h2 class={classes!(styles::TEXT_H3, "truncate")}>
                                    { wheel.current_name() }
                                </h2>
                                <div class="flex gap-2 shrink-0">
                                    <button class={styles::BUTTON_SECONDARY} onclick={on_new}>
                                        {"New"}
                                    </button>
                                    <button class={styles::BUTTON_SECONDARY} onclick={open_save}>
                                        {"Save"}
                                    </button>
                                    <button class={styles::BUTTON_SECONDARY} onclick={open_load}>
                                        {"Load"}
                                    </button>
                                </div>
                            </div>
                            <ItemForm />
                            <ItemsList />
                        </div>
                        <div class={styles::CARD}>
                            <SettingsPanel />
                        </div>
                    </section>
                </main>

                <SaveDialog open={*save_open} on_close={close_save} />
                <LoadDialog open={*load_open} on_close={close_load} />
            </div>
        </ContextProvider<SettingsHandle>>
        </ContextProvider<WheelHandle>>
    }
}
