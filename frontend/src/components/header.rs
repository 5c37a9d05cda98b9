use yew::prelude::*;

use crate::styles;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="max-w-5xl mx-auto text-center">
            <h1 class={styles::TEXT_H1}>
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-blue-500 to-violet-500">
                    {"SpinWheel"}
                </span>
            </h1>
            <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                {"Add your options, spin the wheel, let fate decide."}
            </p>
        </header>
    }
}
