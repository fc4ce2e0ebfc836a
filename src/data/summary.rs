use crate::data::student::Student;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub total: usize,
    pub active: usize,
    pub departments: usize,
}

impl DashboardSummary {
    pub fn from_students(students: &[Student]) -> Self {
        let departments: HashSet<&str> = students.iter().filter_map(Student::department).collect();

        Self {
            total: students.len(),
            active: students.iter().filter(|s| s.is_active()).count(),
            departments: departments.len(),
        }
    }
}
