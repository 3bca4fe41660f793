use crate::auth::AuthProvider;
use crate::guard::GuardedSwitch;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <GuardedSwitch />
            </BrowserRouter>
        </AuthProvider>
    }
}
