use crate::{backend::BackendClient, error::RosterResult};
use jiff::civil::Date;
use maud::{Markup, Render, html};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub const DEPARTMENTS: [&str; 8] = [
    "Computer Science",
    "Engineering",
    "Business",
    "Arts",
    "Science",
    "Mathematics",
    "Medicine",
    "Law",
];

/// A student record as the backend returns it.
///
/// Decoding is lenient: absent strings come through empty, numbers are accepted where
/// strings are expected, and a missing or unreadable `isActive` reads as active.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub enrollment_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_bool")]
    is_active: Option<bool>,
}

fn lenient_optional_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn lenient_optional_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient_optional_string(d).map(Option::unwrap_or_default)
}

impl Student {
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref().filter(|d| !d.is_empty())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub async fn get_all(backend: &BackendClient) -> RosterResult<Vec<Self>> {
        backend
            .get_json(backend.students_url(None), "list students")
            .await
    }

    pub async fn get_by_id(id: &str, backend: &BackendClient) -> RosterResult<Self> {
        backend
            .get_json(backend.students_url(Some(id)), "fetch student")
            .await
    }

    pub async fn insert(form: &StudentForm, backend: &BackendClient) -> RosterResult<()> {
        backend
            .send_json(
                reqwest::Method::POST,
                backend.students_url(None),
                form,
                "register student",
            )
            .await
    }

    ///full replace: every field of `form` is sent whether or not it changed
    pub async fn replace(id: &str, form: &StudentForm, backend: &BackendClient) -> RosterResult<()> {
        backend
            .send_json(
                reqwest::Method::PUT,
                backend.students_url(Some(id)),
                form,
                "update student",
            )
            .await
    }

    pub async fn remove(id: &str, backend: &BackendClient) -> RosterResult<()> {
        backend
            .delete(backend.students_url(Some(id)), "delete student")
            .await
    }
}

/// Up to two initials, taken from the first characters of the first and last names.
pub struct Initials<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl Render for Initials<'_> {
    fn render(&self) -> Markup {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        html! {
            @if let Some(first) = first {
                (first)
            }
            @if let Some(last) = last {
                (last)
            }
        }
    }
}

/// The payload sent to the backend on create and update. Mirrors every student field
/// except the identifier.
///
/// `dob` is held as text so a stored value that isn't an ISO date survives an edit
/// untouched. A blank one goes out as `null`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(serialize_with = "blank_as_null")]
    pub dob: String,
    pub department: String,
    pub enrollment_year: String,
    pub is_active: bool,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self {
            student_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            dob: String::new(),
            department: String::new(),
            enrollment_year: String::new(),
            is_active: true,
        }
    }
}

fn blank_as_null<S: Serializer>(value: &str, s: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        s.serialize_none()
    } else {
        s.serialize_str(value)
    }
}

impl StudentForm {
    ///whether `dob` can be edited with a date picker. Anything else is edited as plain text
    pub fn dob_is_iso(&self) -> bool {
        self.dob.is_empty() || self.dob.parse::<Date>().is_ok()
    }
}

impl From<&Student> for StudentForm {
    fn from(student: &Student) -> Self {
        let dob = student.dob.as_deref().unwrap_or_default();
        //`1815-12-10T00:00:00.000Z` -> `1815-12-10`
        let dob = dob.get(..10).unwrap_or(dob).to_string();

        Self {
            student_id: student.student_id.clone(),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            dob,
            department: student.department.clone().unwrap_or_default(),
            enrollment_year: student.enrollment_year.clone().unwrap_or_default(),
            is_active: student.is_active(),
        }
    }
}

/// The urlencoded body a student form submits. A checkbox only shows up when ticked.
#[derive(Deserialize, Debug, Default)]
pub struct StudentFormInput {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub enrollment_year: String,
    pub is_active: Option<String>,
}

impl From<StudentFormInput> for StudentForm {
    fn from(input: StudentFormInput) -> Self {
        Self {
            student_id: input.student_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            dob: input.dob.trim().to_string(),
            department: input.department,
            enrollment_year: input.enrollment_year,
            is_active: input.is_active.is_some_and(|v| v != "off" && v != "false"),
        }
    }
}
