use crate::{
    data::student::{Initials, Student, StudentForm, StudentFormInput},
    maud_conveniences::{Banner, delayed_redirect, loading, page_header, path_segment},
    routes::student_form::{FormText, student_form_fields},
    state::RosterState,
};
use axum::{
    Form,
    extract::{Path, State},
};
use maud::{Markup, html};

const EDIT_TEXT: FormText = FormText {
    placeholders: false,
    cancel_to: "/manage",
    cancel_class: "bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded",
    submit: "Update Profile",
    submitting: "Updating...",
};

pub async fn get_edit(State(state): State<RosterState>, Path(id): Path<String>) -> Markup {
    let id = path_segment(&id);

    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full" {
            (page_header("Edit Student Profile", "/manage", "Back to Records", false))
            div id="edit_panel" hx-get={"/internal/edit/" (id)} hx-trigger="load" {
                (loading("Loading student profile..."))
            }
        }
    })
}

pub async fn internal_get_edit(State(state): State<RosterState>, Path(id): Path<String>) -> Markup {
    match Student::get_by_id(&id, state.backend()).await {
        Ok(student) => edit_panel(&id, None, &StudentForm::from(&student)),
        Err(e) => {
            warn!(?e, ?id, "Error loading student");
            edit_panel(
                &id,
                Some(Banner::error("Failed to load student profile")),
                &StudentForm::default(),
            )
        }
    }
}

fn edit_panel(id: &str, banner: Option<Banner>, form: &StudentForm) -> Markup {
    let (status_class, status_text) = if form.is_active {
        ("bg-green-700", "Active Student")
    } else {
        ("bg-gray-600", "Inactive Student")
    };

    html! {
        @if let Some(banner) = banner {
            (banner)
        }
        div class="flex flex-row items-center space-x-4 mb-6" {
            div class="bg-blue-600 rounded-full h-16 w-16 flex items-center justify-center text-2xl font-bold" {
                (Initials { first_name: &form.first_name, last_name: &form.last_name })
            }
            div {
                h2 class="text-xl font-semibold" {(form.first_name) " " (form.last_name)}
                span class={"text-sm rounded px-2 py-1 " (status_class)} {(status_text)}
            }
        }
        form hx-put={"/edit/" (path_segment(id))} hx-target="#edit_panel" hx-disabled-elt="find button[type='submit']" class="p-4" {
            (student_form_fields(form, &EDIT_TEXT))
        }
    }
}

pub async fn put_edit(
    State(state): State<RosterState>,
    Path(id): Path<String>,
    Form(input): Form<StudentFormInput>,
) -> Markup {
    const FAILED: Banner = Banner::error("Failed to update student profile");

    let form = StudentForm::from(input);
    match Student::replace(&id, &form, state.backend()).await {
        Ok(()) => {
            info!(?id, "Updated student");
            html! {
                (edit_panel(&id, Some(Banner::success("Student profile updated successfully")), &form))
                (delayed_redirect("/manage", state.config().redirect_delay()))
            }
        }
        Err(e) => {
            warn!(?e, ?id, "Error updating student");
            edit_panel(&id, Some(FAILED), &form)
        }
    }
}
