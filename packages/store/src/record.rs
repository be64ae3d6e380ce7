//! Record types held by the store.
//!
//! All three are flat records with serde camelCase wire names. Optional
//! fields skip serialization when absent so the wire form never conflates
//! "absent" with "null".

use serde::{Deserialize, Serialize};

/// A student record, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique student id (e.g. a student number).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declared major, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            major: None,
        }
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }
}

/// A subject (course) record, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject id (e.g. a course code).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Instructor name, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            instructor: None,
        }
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }
}

/// An enrollment record linking one student to one subject.
///
/// Identity is the `(student_id, subject_id)` pair; `score` is payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub student_id: String,
    pub subject_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Selection {
    pub fn new(student_id: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            subject_id: subject_id.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// The pair key as rendered in failure messages: `"{student}/{subject}"`.
    pub fn pair_key(&self) -> String {
        format!("{}/{}", self.student_id, self.subject_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_absent_when_none() {
        let json = serde_json::to_value(Student::new("S1", "Alice")).unwrap();
        assert_eq!(json, serde_json::json!({"id": "S1", "name": "Alice"}));

        let json = serde_json::to_value(Selection::new("S1", "C1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"studentId": "S1", "subjectId": "C1"})
        );
    }

    #[test]
    fn optional_fields_round_trip_when_present() {
        let subject = Subject::new("C1", "Math").with_instructor("Knuth");
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json["instructor"], "Knuth");
        let back: Subject = serde_json::from_value(json).unwrap();
        assert_eq!(back, subject);
    }

    #[test]
    fn camel_case_wire_names() {
        let selection = Selection::new("S1", "C1").with_score(92.5);
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["studentId"], "S1");
        assert_eq!(json["subjectId"], "C1");
        assert_eq!(json["score"], 92.5);
    }

    #[test]
    fn pair_key_format() {
        assert_eq!(Selection::new("S1", "C1").pair_key(), "S1/C1");
    }
}
