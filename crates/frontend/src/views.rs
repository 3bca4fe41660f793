//! Views mounted by the router
//!
//! Role pages are placeholders; their content is served by separate page
//! components.

use crate::auth::{use_auth, use_session};
use crate::routes::Route;
use clinic_http::types::RegisterRequest;
use yew::prelude::*;
use yew_router::prelude::*;

/// Route render function for [`Switch`]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::NotFound => html! { <NotFound /> },
        Route::AdminAppointmentDetails { id } => html! {
            <Page title={format!("Appointment #{id}")} />
        },
        other => html! { <Page title={title(&other)} /> },
    }
}

fn title(route: &Route) -> String {
    let title = match route {
        Route::AdminDashboard => "Admin dashboard",
        Route::AdminDoctors => "Doctors",
        Route::AdminPatients => "Patients",
        Route::AdminAppointments => "Appointments",
        Route::AdminReports => "Reports",
        Route::DoctorDashboard => "Doctor dashboard",
        Route::DoctorAppointments => "My appointments",
        Route::DoctorPatientHistory => "Patient history",
        Route::DoctorAvailability => "Availability",
        Route::DoctorProfile => "Profile",
        Route::DoctorMyPatients => "My patients",
        Route::DoctorStatistics => "Statistics",
        Route::PatientDashboard => "Patient dashboard",
        Route::PatientProfile => "Profile",
        Route::PatientAppointments => "My appointments",
        Route::PatientBook => "Book an appointment",
        Route::PatientDepartments => "Departments",
        Route::PatientDoctors => "Doctors",
        Route::PatientHistory => "Medical history",
        _ => "",
    };
    title.to_string()
}

#[function_component(Landing)]
fn landing() -> Html {
    let session = use_session();

    let actions = match session.and_then(|s| s.role.dashboard()) {
        Some(dashboard) => {
            let route = Route::from_name(dashboard).unwrap_or(Route::Landing);
            html! { <Link<Route> to={route} classes="btn">{"Go to dashboard"}</Link<Route>> }
        }
        None => html! {
            <>
                <Link<Route> to={Route::Login} classes="btn">{"Sign in"}</Link<Route>>
                <Link<Route> to={Route::Register} classes="btn">{"Register"}</Link<Route>>
            </>
        },
    };

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-3xl font-bold">{"Clinic appointments"}</h1>
            <div class="flex gap-3">{actions}</div>
        </div>
    }
}

fn input_value(e: &InputEvent) -> String {
    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
    input.value()
}

#[function_component(LoginView)]
fn login_view() -> Html {
    let auth = use_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| username.set(input_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };

    // A successful sign-in changes the session; the guard then moves the
    // login page on to the role's dashboard. Rejected credentials come back
    // as 401, which reloads /login through the client's unauthorized
    // redirect, so the error below is only visible for other failures.
    let on_submit = {
        let sessions = auth.sessions.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if username.trim().is_empty() || password.is_empty() {
                error.set(Some("Username and password required".to_string()));
                return;
            }

            let sessions = sessions.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = sessions.sign_in(&username, &password).await {
                    error.set(Some(e.to_string()));
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center">
            <form class="w-full max-w-sm flex flex-col gap-3" onsubmit={on_submit}>
                <h2 class="text-2xl font-bold">{"Sign in"}</h2>
                if let Some(message) = &*error {
                    <p class="text-red-600">{message.clone()}</p>
                }
                <input type="text" placeholder="Username" value={(*username).clone()} oninput={on_username} />
                <input type="password" placeholder="Password" value={(*password).clone()} oninput={on_password} />
                <button type="submit" disabled={*submitting}>{"Sign in"}</button>
                <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
            </form>
        </div>
    }
}

#[function_component(RegisterView)]
fn register_view() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let form = use_state(RegisterRequest::default);
    let error = use_state(|| None::<String>);

    let field = |update: fn(&mut RegisterRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            update(&mut next, input_value(&e));
            form.set(next);
        })
    };

    let on_submit = {
        let sessions = auth.sessions.clone();
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = (*form).clone();
            if request.username.trim().is_empty()
                || request.email.trim().is_empty()
                || request.password.is_empty()
                || request.full_name.trim().is_empty()
            {
                error.set(Some("Missing required fields".to_string()));
                return;
            }

            let sessions = sessions.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match sessions.register(&request).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center">
            <form class="w-full max-w-sm flex flex-col gap-3" onsubmit={on_submit}>
                <h2 class="text-2xl font-bold">{"Register"}</h2>
                if let Some(message) = &*error {
                    <p class="text-red-600">{message.clone()}</p>
                }
                <input type="text" placeholder="Username" oninput={field(|f, v| f.username = v)} />
                <input type="email" placeholder="Email" oninput={field(|f, v| f.email = v)} />
                <input type="password" placeholder="Password" oninput={field(|f, v| f.password = v)} />
                <input type="text" placeholder="Full name" oninput={field(|f, v| f.full_name = v)} />
                <input type="tel" placeholder="Phone" oninput={field(|f, v| f.phone = v)} />
                <input type="text" placeholder="Address" oninput={field(|f, v| f.address = v)} />
                <button type="submit">{"Register"}</button>
                <Link<Route> to={Route::Login}>{"Already registered? Sign in"}</Link<Route>>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PageProps {
    title: String,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let auth = use_auth();
    let role = auth
        .session
        .as_ref()
        .map(|s| s.role.to_string())
        .unwrap_or_default();

    let on_sign_out = {
        let sessions = auth.sessions.clone();
        Callback::from(move |_: MouseEvent| sessions.sign_out())
    };

    html! {
        <div class="min-h-screen flex flex-col">
            <header class="p-4 flex justify-between items-center border-b">
                <h1 class="text-xl font-bold">{props.title.clone()}</h1>
                <div class="flex items-center gap-3">
                    <span class="text-sm text-gray-500">{role}</span>
                    <button onclick={on_sign_out}>{"Sign out"}</button>
                </div>
            </header>
        </div>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-3">
            <h1 class="text-2xl font-bold">{"Page not found"}</h1>
            <Link<Route> to={Route::Landing}>{"Back to start"}</Link<Route>>
        </div>
    }
}
