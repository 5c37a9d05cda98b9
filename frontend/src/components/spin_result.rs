use yew::prelude::*;

use crate::hooks::WheelHandle;
use crate::styles;

#[function_component(SpinResult)]
pub fn spin_result() -> Html {
    let wheel = use_context::<WheelHandle>().expect("SpinResult needs the wheel context");

    // Nothing to show while the wheel is turning; the winner only appears
    // once the spin has settled.
    if wheel.is_spinning() {
        return html! {};
    }
    let Some(winner) = wheel.winner() else {
        return html! {};
    };

    let ondismiss = {
        let wheel = wheel.clone();
        Callback::from(move |_: MouseEvent| wheel.clear_result())
    };

    html! {
        <div class="mt-6 flex flex-col items-center">
            <div class="flex items-center gap-3 px-6 py-4 rounded-xl bg-gradient-to-r from-amber-400 to-orange-500 text-white font-bold text-xl shadow-lg border-2 border-amber-300 animate-bounce">
                <span>{"🎉"}</span>
                <span>{ &winner.label }</span>
            </div>
            <button class={classes!(styles::TEXT_SMALL, "mt-3", "underline")} onclick={ondismiss}>
                {"Dismiss"}
            </button>
        </div>
    }
}
