use crate::data::student::Student;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    pub const fn allows(self, is_active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => is_active,
            Self::Inactive => !is_active,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Search term plus status filter for the records table, as sent by the filter bar along
/// with the id of the records view it belongs to.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct RecordsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub view: Option<Uuid>,
}

impl RecordsQuery {
    pub fn matches(&self, student: &Student) -> bool {
        self.matches_search(student) && self.status.allows(student.is_active())
    }

    fn matches_search(&self, student: &Student) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            Some(student.first_name.as_str()),
            Some(student.last_name.as_str()),
            Some(student.student_id.as_str()),
            student.department(),
        ]
        .into_iter()
        .flatten()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        students.iter().filter(|s| self.matches(s)).collect()
    }
}
