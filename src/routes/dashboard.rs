use crate::{
    data::{
        student::{Initials, Student},
        summary::DashboardSummary,
    },
    maud_conveniences::{loading, page_header, path_segment, subtitle},
    state::RosterState,
};
use axum::extract::State;
use maud::{Markup, Render, html};

const RECENT_CARDS: usize = 6;

pub async fn get_dashboard(State(state): State<RosterState>) -> Markup {
    state.render(html! {
        div class="mx-auto max-w-6xl w-full" {
            (page_header("Student Dashboard", "/add", "Register New Student", true))
            div id="dashboard" hx-get="/internal/dashboard" hx-trigger="load" {
                (loading("Loading student data..."))
            }
        }
    })
}

///fetch failures are logged and render as an empty dashboard
pub async fn internal_get_dashboard(State(state): State<RosterState>) -> Markup {
    let students = Student::get_all(state.backend()).await.unwrap_or_else(|e| {
        warn!(?e, "Error loading students for the dashboard");
        vec![]
    });
    let summary = DashboardSummary::from_students(&students);

    html! {
        (summary)
        div class="flex flex-row items-center justify-between mt-8 mb-4" {
            (subtitle("Recent Students"))
            a href="/manage" class="text-blue-400 hover:underline" {"View All Records"}
        }
        @if students.is_empty() {
            div class="bg-gray-800 rounded shadow-md p-8 flex flex-col items-center space-y-2 text-center" {
                div class="text-4xl" {"📚"}
                h3 class="text-lg font-semibold" {"No Student Records Found"}
                p class="text-gray-300" {"Add your first student to get started"}
                a href="/add" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {"Add Student Now"}
            }
        } @else {
            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4" {
                @for student in students.iter().take(RECENT_CARDS) {
                    (StudentCard(student))
                }
            }
        }
    }
}

impl Render for DashboardSummary {
    fn render(&self) -> Markup {
        let tiles = [
            ("Total Students", self.total),
            ("Active Students", self.active),
            ("Departments", self.departments),
        ];

        html! {
            div class="grid grid-cols-1 sm:grid-cols-3 gap-4" {
                @for (label, value) in tiles {
                    div class="bg-gray-800 rounded shadow-md p-4 text-center" {
                        p class="text-3xl font-bold" data-stat=(label) {(value)}
                        p class="text-gray-300" {(label)}
                    }
                }
            }
        }
    }
}

struct StudentCard<'a>(&'a Student);

impl Render for StudentCard<'_> {
    fn render(&self) -> Markup {
        let student = self.0;
        let status = if student.is_active() { "Active" } else { "Inactive" };

        html! {
            div class="bg-gray-800 rounded-lg shadow-md overflow-hidden flex flex-col" {
                div class="flex flex-row items-center justify-between p-4 bg-gray-700" {
                    div class="bg-blue-600 rounded-full h-10 w-10 flex items-center justify-center font-bold" {
                        (Initials { first_name: &student.first_name, last_name: &student.last_name })
                    }
                    span class="text-sm rounded px-2 py-1 bg-gray-600" {(status)}
                }
                div class="p-4 flex-grow" {
                    h3 class="text-lg font-semibold mb-2" {(student.full_name())}
                    p class="text-gray-200" { span class="font-semibold" {"ID: "} (student.student_id) }
                    p class="text-gray-200" { span class="font-semibold" {"Department: "} (student.department().unwrap_or("N/A")) }
                    p class="text-gray-200" { span class="font-semibold" {"Email: "} (student.email) }
                }
                div class="p-4 border-t border-gray-600" {
                    a href={"/edit/" (path_segment(&student.id))} class="text-blue-400 hover:underline" {"Edit"}
                }
            }
        }
    }
}
