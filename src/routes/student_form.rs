use crate::{
    data::student::{DEPARTMENTS, StudentForm},
    maud_conveniences::{INPUT_CLASSES, form_element, form_submit_button, simple_form_element, subtitle},
};
use maud::{Markup, html};

/// Labels for one use of the shared student form.
pub struct FormText {
    pub placeholders: bool,
    pub cancel_to: &'static str,
    pub cancel_class: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
}

pub fn student_form_fields(form: &StudentForm, text: &FormText) -> Markup {
    let placeholder = |p| text.placeholders.then_some(p);
    let dob_type = if form.dob_is_iso() { "date" } else { "text" };
    let unknown_department =
        !form.department.is_empty() && !DEPARTMENTS.contains(&form.department.as_str());

    html! {
        div class="mb-6" {
            (subtitle("Personal Information"))
            div class="grid grid-cols-1 md:grid-cols-2 gap-x-4" {
                (simple_form_element("first_name", "First Name", true, None, &form.first_name, placeholder("Enter first name")))
                (simple_form_element("last_name", "Last Name", true, None, &form.last_name, placeholder("Enter last name")))
                (simple_form_element("email", "Email Address", true, Some("email"), &form.email, placeholder("student@example.com")))
                (simple_form_element("dob", "Date of Birth", false, Some(dob_type), &form.dob, None))
            }
        }
        div class="mb-6" {
            (subtitle("Academic Information"))
            div class="grid grid-cols-1 md:grid-cols-2 gap-x-4" {
                (simple_form_element("student_id", "Student ID", true, None, &form.student_id, placeholder("Enter student ID")))
                (form_element("department", "Department", html! {
                    select id="department" name="department" class=(INPUT_CLASSES) {
                        option value="" selected[form.department.is_empty()] {"Select Department"}
                        @for department in DEPARTMENTS {
                            option value=(department) selected[form.department == department] {(department)}
                        }
                        @if unknown_department {
                            option value=(form.department) selected {(form.department)}
                        }
                    }
                }))
                (simple_form_element("enrollment_year", "Enrollment Year", false, None, &form.enrollment_year, placeholder("YYYY")))
                div class="mb-4 flex items-center" {
                    input type="checkbox" name="is_active" id="is_active" checked[form.is_active] class="mr-2 leading-tight";
                    label for="is_active" class="text-gray-300 cursor-pointer" {"Active Student"}
                }
            }
        }
        div class="flex items-center justify-end space-x-4" {
            a href=(text.cancel_to) class=(text.cancel_class) {"Cancel"}
            (form_submit_button(text.submit, text.submitting))
        }
    }
}
