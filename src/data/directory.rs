use crate::{
    backend::BackendClient,
    data::{records_filter::RecordsQuery, student::Student},
};
use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};
use tokio::sync::RwLock;
use uuid::Uuid;

///open records screens past this many forget their list, oldest first
const MAX_VIEWS: usize = 32;

/// The list of students each records screen fetched when it was mounted, keyed by a view
/// id the screen sends back with every search, filter and delete. Searching and filtering
/// a view never goes back to the backend, and no other screen touches it.
#[derive(Clone, Debug, Default)]
pub struct StudentDirectory {
    views: Arc<RwLock<Views>>,
}

#[derive(Debug, Default)]
struct Views {
    lists: HashMap<Uuid, Vec<Student>>,
    opened: VecDeque<Uuid>,
}

impl Views {
    fn hold(&mut self, view: Uuid, students: Vec<Student>) {
        if self.lists.insert(view, students).is_none() {
            self.opened.push_back(view);
        }
        while self.opened.len() > MAX_VIEWS {
            if let Some(oldest) = self.opened.pop_front() {
                self.lists.remove(&oldest);
            }
        }
    }
}

async fn fetch(backend: &BackendClient) -> Vec<Student> {
    Student::get_all(backend).await.unwrap_or_else(|e| {
        warn!(?e, "Error loading students");
        vec![]
    })
}

impl StudentDirectory {
    /// Fetches the full list for a freshly mounted screen and holds it under a new view id.
    /// A failed fetch holds an empty list.
    pub async fn open(&self, backend: &BackendClient) -> (Uuid, Vec<Student>) {
        let view = Uuid::new_v4();
        let students = fetch(backend).await;
        self.views.write().await.hold(view, students.clone());
        (view, students)
    }

    /// Fetches the full list again for `view`, keeping the held one if that fails.
    pub async fn refresh(&self, view: Uuid, backend: &BackendClient) {
        match Student::get_all(backend).await {
            Ok(students) => self.views.write().await.hold(view, students),
            Err(e) => warn!(?e, %view, "Error re-loading students, keeping previous list"),
        }
    }

    /// The students of `view` that match `query`. A view that isn't held (or no view at
    /// all) is fetched afresh.
    pub async fn filtered(
        &self,
        view: Option<Uuid>,
        query: &RecordsQuery,
        backend: &BackendClient,
    ) -> Vec<Student> {
        if let Some(view) = view {
            if let Some(students) = self.views.read().await.lists.get(&view) {
                return query.apply(students).into_iter().cloned().collect();
            }
        }

        debug!(?view, "Records view not held, fetching");
        let students = fetch(backend).await;
        let found = query.apply(&students).into_iter().cloned().collect();
        if let Some(view) = view {
            self.views.write().await.hold(view, students);
        }
        found
    }
}
