use crate::{
    data::{
        records_filter::{RecordsQuery, StatusFilter},
        student::{Initials, Student},
    },
    maud_conveniences::{Banner, loading, page_header, path_segment, render_table},
    state::RosterState,
};
use axum::extract::{Path, Query, State};
use maud::{Markup, html};
use uuid::Uuid;

const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this student record? This action cannot be undone.";

pub async fn get_records(State(state): State<RosterState>) -> Markup {
    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-6xl w-full" {
            (page_header("Student Records", "/add", "Register New Student", true))
            div id="records" hx-get="/internal/records" hx-trigger="load" {
                (loading("Loading student records..."))
            }
        }
    })
}

pub async fn internal_get_records(State(state): State<RosterState>) -> Markup {
    let query = RecordsQuery::default();
    let (view, students) = state.directory().open(state.backend()).await;

    html! {
        (filter_bar(view, &query))
        div id="records_table" {
            (records_table(&query.apply(&students), &query, None))
        }
    }
}

pub async fn internal_get_records_table(
    State(state): State<RosterState>,
    Query(query): Query<RecordsQuery>,
) -> Markup {
    let students = state
        .directory()
        .filtered(query.view, &query, state.backend())
        .await;
    records_table(&students.iter().collect::<Vec<_>>(), &query, None)
}

pub async fn internal_delete_record(
    State(state): State<RosterState>,
    Path(id): Path<String>,
    Query(query): Query<RecordsQuery>,
) -> Markup {
    let banner = match Student::remove(&id, state.backend()).await {
        Ok(()) => {
            info!(?id, "Deleted student");
            if let Some(view) = query.view {
                state.directory().refresh(view, state.backend()).await;
            }
            Banner::success("Student record deleted successfully")
        }
        Err(e) => {
            warn!(?e, ?id, "Error deleting student");
            Banner::error("Failed to delete student record")
        }
    };

    let students = state
        .directory()
        .filtered(query.view, &query, state.backend())
        .await;
    records_table(&students.iter().collect::<Vec<_>>(), &query, Some(banner))
}

fn filter_bar(view: Uuid, query: &RecordsQuery) -> Markup {
    html! {
        form id="records_filters" hx-get="/internal/records/table" hx-target="#records_table" hx-trigger="input changed delay:200ms from:#search, change" class="flex flex-row items-center justify-between mb-4 space-x-4" {
            input type="hidden" name="view" value=(view.to_string());
            div class="relative flex-grow" {
                input type="text" id="search" name="search" value=(query.search) placeholder="Search students..." autocomplete="off" class="shadow appearance-none border rounded w-full py-2 pl-3 pr-10 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
                span class="absolute right-3 top-2" {"🔍"}
            }
            div class="flex flex-row space-x-2" {
                @for status in StatusFilter::ALL {
                    label class="cursor-pointer" {
                        input type="radio" name="status" value=(status.as_str()) checked[status == query.status] class="peer hidden";
                        span class="block rounded py-2 px-4 bg-slate-600 hover:bg-slate-800 peer-checked:bg-blue-600 font-bold" {(status.label())}
                    }
                }
            }
        }
    }
}

fn records_table(students: &[&Student], query: &RecordsQuery, banner: Option<Banner>) -> Markup {
    let rows = students
        .iter()
        .map(|student| {
            let id = path_segment(&student.id);
            let (status_class, status_text) = if student.is_active() {
                ("bg-green-700", "Active")
            } else {
                ("bg-gray-600", "Inactive")
            };

            [
                html! {(student.student_id)},
                html! {
                    div class="flex flex-row items-center space-x-2" {
                        div class="bg-blue-600 rounded-full h-6 w-6 flex items-center justify-center text-xs font-bold" {
                            (Initials { first_name: &student.first_name, last_name: "" })
                        }
                        span {(student.full_name())}
                    }
                },
                html! {(student.department().unwrap_or("N/A"))},
                html! {(student.email)},
                html! {
                    span class={"rounded px-2 py-1 text-sm " (status_class)} {(status_text)}
                },
                html! {
                    div class="flex flex-row space-x-2" {
                        a href={"/edit/" (id)} title="Edit student" class="hover:bg-gray-600 rounded px-2 py-1" {"✏️"}
                        button hx-delete={"/internal/records/" (id)} hx-confirm=(DELETE_CONFIRMATION) hx-target="#records_table" hx-include="#records_filters" title="Delete student" class="hover:bg-red-800 rounded px-2 py-1" {"🗑️"}
                    }
                },
            ]
        })
        .collect::<Vec<_>>();

    html! {
        @if let Some(banner) = banner {
            (banner)
        }
        @if rows.is_empty() {
            div class="flex flex-col items-center py-8 space-y-2 text-center" {
                div class="text-4xl" {"🔍"}
                h3 class="text-lg font-semibold" {"No matching records found"}
                p class="text-gray-300" {
                    @if query.search.is_empty() {
                        "No student records available"
                    } @else {
                        "Try adjusting your search"
                    }
                }
            }
        } @else {
            (render_table(
                ["Student ID", "Name", "Department", "Email", "Status", "Actions"],
                rows,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{FakeBackend, send, student_json};
    use axum::{
        Router,
        http::{Method, StatusCode},
    };

    fn fixture() -> Vec<serde_json::Value> {
        vec![
            student_json("1", "CS-100", "Ada", "Lovelace", "Mathematics", true),
            student_json("2", "EN-200", "Nikola", "Tesla", "Engineering", false),
            student_json("3", "CS-300", "Grace", "Hopper", "Computer Science", true),
        ]
    }

    ///mounts the records screen and returns the view id its filter bar carries
    async fn mount(app: &Router) -> String {
        const MARKER: &str = r#"name="view" value=""#;

        let (_, body) = send(app, Method::GET, "/internal/records", None).await;
        let start = body.find(MARKER).expect("filter bar carries a view id") + MARKER.len();
        let end = start + body[start..].find('"').expect("closing quote");
        body[start..end].to_string()
    }

    #[tokio::test]
    async fn records_page_loads_table_on_mount() {
        let (_backend, app) = FakeBackend::spawn(fixture()).await;

        let (status, body) = send(&app, Method::GET, "/manage", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"hx-get="/internal/records""#));
        assert!(body.contains("Loading student records..."));
    }

    #[tokio::test]
    async fn mount_lists_every_student() {
        let (backend, app) = FakeBackend::spawn(fixture()).await;

        let (status, body) = send(&app, Method::GET, "/internal/records", None).await;
        assert_eq!(status, StatusCode::OK);
        for name in ["Ada Lovelace", "Nikola Tesla", "Grace Hopper"] {
            assert!(body.contains(name), "missing {name}");
        }
        assert!(body.contains(r#"hx-delete="/internal/records/2""#));
        assert!(body.contains("hx-confirm"));
        assert_eq!(backend.list_calls(), 1);
    }

    #[tokio::test]
    async fn search_and_status_filter_without_refetching() {
        let (backend, app) = FakeBackend::spawn(fixture()).await;
        let view = mount(&app).await;
        let table = |query: &str| format!("/internal/records/table?view={view}&{query}");

        let (_, body) = send(&app, Method::GET, &table("search=CS-&status=all"), None).await;
        assert!(body.contains("Ada Lovelace"));
        assert!(body.contains("Grace Hopper"));
        assert!(!body.contains("Nikola Tesla"));

        let (_, body) = send(&app, Method::GET, &table("search=GRACE&status=active"), None).await;
        assert!(body.contains("Grace Hopper"));
        assert!(!body.contains("Ada Lovelace"));

        let (_, body) = send(&app, Method::GET, &table("search=grace&status=inactive"), None).await;
        assert!(body.contains("No matching records found"));
        assert!(body.contains("Try adjusting your search"));

        let (_, body) = send(&app, Method::GET, &table("status=inactive"), None).await;
        assert!(body.contains("Nikola Tesla"));
        assert!(!body.contains("Grace Hopper"));

        assert_eq!(backend.list_calls(), 1);
    }

    #[tokio::test]
    async fn other_screens_leave_the_view_alone() {
        let (backend, app) = FakeBackend::spawn(fixture()).await;
        let view = mount(&app).await;

        backend.set_failing(true);
        let (_, dashboard) = send(&app, Method::GET, "/internal/dashboard", None).await;
        assert!(dashboard.contains("No Student Records Found"));
        let second = mount(&app).await;
        assert_ne!(second, view);
        backend.set_failing(false);

        let uri = format!("/internal/records/table?view={view}&search=ada&status=all");
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ada Lovelace"));
        assert_eq!(backend.list_calls(), 3);
    }

    #[tokio::test]
    async fn table_without_a_held_view_fetches_afresh() {
        let (backend, app) = FakeBackend::spawn(fixture()).await;

        let (_, body) = send(&app, Method::GET, "/internal/records/table?search=tesla", None).await;
        assert!(body.contains("Nikola Tesla"));
        assert_eq!(backend.list_calls(), 1);

        let uri = format!("/internal/records/table?view={}&search=ada", uuid::Uuid::new_v4());
        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert!(body.contains("Ada Lovelace"));
        send(&app, Method::GET, &uri, None).await;
        assert_eq!(backend.list_calls(), 2);
    }

    #[tokio::test]
    async fn empty_backend_shows_empty_state() {
        let (_backend, app) = FakeBackend::spawn(vec![]).await;

        let (_, body) = send(&app, Method::GET, "/internal/records", None).await;
        assert!(body.contains("No student records available"));
    }

    #[tokio::test]
    async fn delete_refetches_without_the_record() {
        let (backend, app) = FakeBackend::spawn(fixture()).await;
        let view = mount(&app).await;

        let uri = format!("/internal/records/2?view={view}&search=&status=all");
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Student record deleted successfully"));
        assert!(!body.contains("Nikola Tesla"));
        assert!(body.contains("Ada Lovelace"));
        assert_eq!(backend.deleted(), ["2"]);
        assert_eq!(backend.list_calls(), 2);
    }

    #[tokio::test]
    async fn failed_delete_keeps_previous_list() {
        let (backend, app) = FakeBackend::spawn(fixture()).await;
        let view = mount(&app).await;
        backend.set_failing(true);

        let uri = format!("/internal/records/2?view={view}");
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Failed to delete student record"));
        assert!(body.contains("Nikola Tesla"));
        assert_eq!(backend.students().len(), 3);
    }
}
