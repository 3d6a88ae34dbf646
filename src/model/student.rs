//! Student record as stored and as carried over HTTP.

use serde::{Deserialize, Serialize};

/// One row of the `student` table. `id` is assigned by the store; every other field is free text and may be null.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rollno: Option<String>,
}

impl Student {
    /// New unsaved record (no id).
    pub fn new(name: impl Into<String>, email: impl Into<String>, rollno: impl Into<String>) -> Self {
        Student {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
            rollno: Some(rollno.into()),
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}
