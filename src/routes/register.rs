use crate::{
    data::student::{Student, StudentForm, StudentFormInput},
    maud_conveniences::{Banner, delayed_redirect, page_header},
    routes::student_form::{FormText, student_form_fields},
    state::RosterState,
};
use axum::{Form, extract::State};
use maud::{Markup, html};

const REGISTER_TEXT: FormText = FormText {
    placeholders: true,
    cancel_to: "/",
    cancel_class: "bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded",
    submit: "Register Student",
    submitting: "Registering...",
};

pub async fn get_register(State(state): State<RosterState>) -> Markup {
    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full" {
            (page_header("Register New Student", "/", "Back to Dashboard", false))
            div id="register_panel" {
                (register_panel(None, &StudentForm::default()))
            }
        }
    })
}

fn register_panel(banner: Option<Banner>, form: &StudentForm) -> Markup {
    html! {
        @if let Some(banner) = banner {
            (banner)
        }
        form hx-post="/add" hx-target="#register_panel" hx-disabled-elt="find button[type='submit']" class="p-4" {
            (student_form_fields(form, &REGISTER_TEXT))
        }
    }
}

pub async fn post_register(
    State(state): State<RosterState>,
    Form(input): Form<StudentFormInput>,
) -> Markup {
    const FAILED: Banner = Banner::error("Failed to register student. Please try again.");

    let form = StudentForm::from(input);
    match Student::insert(&form, state.backend()).await {
        Ok(()) => {
            info!(student_id = ?form.student_id, "Registered student");
            html! {
                (register_panel(Some(Banner::success("Student registered successfully!")), &StudentForm::default()))
                (delayed_redirect("/", state.config().redirect_delay()))
            }
        }
        Err(e) => {
            warn!(?e, "Error registering student");
            register_panel(Some(FAILED), &form)
        }
    }
}
