//! The record store itself.

use crate::error::{Entity, Error};
use crate::record::{Selection, Student, Subject};

/// In-memory owner of the student, subject, and selection collections.
///
/// Collections keep insertion order, which is the order every read
/// projection returns. Lookups are linear scans: the collections are small
/// and every operation is O(collection size), so there is nothing to be
/// gained from an index.
///
/// A failed mutation leaves the store unchanged - every uniqueness or
/// existence check happens before the first write of the operation.
#[derive(Debug, Default)]
pub struct RecordStore {
    students: Vec<Student>,
    subjects: Vec<Subject>,
    selections: Vec<Selection>,
}

impl RecordStore {
    /// Create an empty store. All three collections start empty.
    pub fn new() -> Self {
        Self::default()
    }

    // --- students ---

    /// Add a student. Fails with `DuplicateKey` if the id is taken.
    pub fn add_student(&mut self, student: Student) -> Result<(), Error> {
        if self.students.iter().any(|s| s.id == student.id) {
            return Err(Error::duplicate(Entity::Student, &student.id));
        }
        self.students.push(student);
        Ok(())
    }

    /// Remove a student and every selection referencing it.
    ///
    /// Fails with `NotFound` if no student has this id.
    pub fn remove_student(&mut self, id: &str) -> Result<(), Error> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::not_found(Entity::Student, id))?;
        self.students.remove(index);
        self.selections.retain(|s| s.student_id != id);
        Ok(())
    }

    /// Clear the student collection. Also clears selections: with
    /// referential integrity enforced, every selection references some
    /// student, so none can survive.
    pub fn remove_all_students(&mut self) {
        self.students.clear();
        self.selections.clear();
    }

    // --- subjects ---

    /// Add a subject. Fails with `DuplicateKey` if the id is taken.
    pub fn add_subject(&mut self, subject: Subject) -> Result<(), Error> {
        if self.subjects.iter().any(|s| s.id == subject.id) {
            return Err(Error::duplicate(Entity::Subject, &subject.id));
        }
        self.subjects.push(subject);
        Ok(())
    }

    /// Remove a subject and every selection referencing it.
    ///
    /// Cascades symmetrically with [`remove_student`](Self::remove_student).
    /// Fails with `NotFound` if no subject has this id.
    pub fn remove_subject(&mut self, id: &str) -> Result<(), Error> {
        let index = self
            .subjects
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::not_found(Entity::Subject, id))?;
        self.subjects.remove(index);
        self.selections.retain(|s| s.subject_id != id);
        Ok(())
    }

    /// Clear the subject collection, and with it every selection.
    pub fn remove_all_subjects(&mut self) {
        self.subjects.clear();
        self.selections.clear();
    }

    // --- selections ---

    /// Add a selection.
    ///
    /// Fails with `NotFound` if the referenced student or subject does not
    /// exist, and with `DuplicateKey` if the pair is already enrolled.
    pub fn add_selection(&mut self, selection: Selection) -> Result<(), Error> {
        if !self.students.iter().any(|s| s.id == selection.student_id) {
            return Err(Error::not_found(Entity::Student, &selection.student_id));
        }
        if !self.subjects.iter().any(|s| s.id == selection.subject_id) {
            return Err(Error::not_found(Entity::Subject, &selection.subject_id));
        }
        if self
            .selections
            .iter()
            .any(|s| s.student_id == selection.student_id && s.subject_id == selection.subject_id)
        {
            return Err(Error::duplicate(Entity::Selection, selection.pair_key()));
        }
        self.selections.push(selection);
        Ok(())
    }

    /// Remove the selection for a `(student, subject)` pair.
    ///
    /// Fails with `NotFound` if no such pair is enrolled.
    pub fn remove_selection(&mut self, student_id: &str, subject_id: &str) -> Result<(), Error> {
        let index = self
            .selections
            .iter()
            .position(|s| s.student_id == student_id && s.subject_id == subject_id)
            .ok_or_else(|| {
                Error::not_found(Entity::Selection, format!("{}/{}", student_id, subject_id))
            })?;
        self.selections.remove(index);
        Ok(())
    }

    /// Clear the selection collection.
    pub fn remove_all_selections(&mut self) {
        self.selections.clear();
    }

    // --- read projections (all return owned copies) ---

    /// All students, in insertion order.
    pub fn students(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// The student with this id, if any. Absence is not an error.
    pub fn student_by_id(&self, id: &str) -> Option<Student> {
        self.students.iter().find(|s| s.id == id).cloned()
    }

    /// All subjects, in insertion order.
    pub fn subjects(&self) -> Vec<Subject> {
        self.subjects.clone()
    }

    /// The subject with this id, if any.
    pub fn subject_by_id(&self, id: &str) -> Option<Subject> {
        self.subjects.iter().find(|s| s.id == id).cloned()
    }

    /// All selections, in insertion order.
    pub fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    /// All selections for one student, in insertion order. Empty when none.
    pub fn student_selections(&self, student_id: &str) -> Vec<Selection> {
        self.selections
            .iter()
            .filter(|s| s.student_id == student_id)
            .cloned()
            .collect()
    }

    /// All selections for one subject, in insertion order. Empty when none.
    pub fn subject_selections(&self, subject_id: &str) -> Vec<Selection> {
        self.selections
            .iter()
            .filter(|s| s.subject_id == subject_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> RecordStore {
        let mut store = RecordStore::new();
        store.add_student(Student::new("S1", "Alice")).unwrap();
        store.add_student(Student::new("S2", "Bob")).unwrap();
        store.add_subject(Subject::new("C1", "Math")).unwrap();
        store.add_subject(Subject::new("C2", "Physics")).unwrap();
        store.add_selection(Selection::new("S1", "C1")).unwrap();
        store.add_selection(Selection::new("S1", "C2")).unwrap();
        store.add_selection(Selection::new("S2", "C1")).unwrap();
        store
    }

    #[test]
    fn duplicate_student_id_rejected_and_store_unchanged() {
        let mut store = RecordStore::new();
        store.add_student(Student::new("S1", "Alice")).unwrap();

        let err = store.add_student(Student::new("S1", "Bob")).unwrap_err();
        assert_eq!(err, Error::duplicate(Entity::Student, "S1"));

        let students = store.students();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Alice");
    }

    #[test]
    fn duplicate_subject_id_rejected() {
        let mut store = RecordStore::new();
        store.add_subject(Subject::new("C1", "Math")).unwrap();

        let err = store.add_subject(Subject::new("C1", "Algebra")).unwrap_err();
        assert_eq!(err, Error::duplicate(Entity::Subject, "C1"));
        assert_eq!(store.subjects().len(), 1);
    }

    #[test]
    fn duplicate_selection_pair_rejected() {
        let mut store = seeded();

        let err = store
            .add_selection(Selection::new("S1", "C1").with_score(50.0))
            .unwrap_err();
        assert_eq!(err, Error::duplicate(Entity::Selection, "S1/C1"));
        assert_eq!(store.selections().len(), 3);
    }

    #[test]
    fn selection_requires_existing_student_and_subject() {
        let mut store = seeded();

        let err = store.add_selection(Selection::new("S9", "C1")).unwrap_err();
        assert_eq!(err, Error::not_found(Entity::Student, "S9"));

        let err = store.add_selection(Selection::new("S1", "C9")).unwrap_err();
        assert_eq!(err, Error::not_found(Entity::Subject, "C9"));

        assert_eq!(store.selections().len(), 3);
    }

    #[test]
    fn remove_student_cascades_to_its_selections_only() {
        let mut store = seeded();

        store.remove_student("S1").unwrap();

        assert!(store.student_by_id("S1").is_none());
        assert!(store.student_selections("S1").is_empty());
        // S2's enrollment survives.
        assert_eq!(store.selections(), vec![Selection::new("S2", "C1")]);
    }

    #[test]
    fn remove_subject_cascades_symmetrically() {
        let mut store = seeded();

        store.remove_subject("C1").unwrap();

        assert!(store.subject_by_id("C1").is_none());
        assert!(store.subject_selections("C1").is_empty());
        assert_eq!(store.selections(), vec![Selection::new("S1", "C2")]);
    }

    #[test]
    fn remove_missing_keys_fail_and_leave_store_unchanged() {
        let mut store = seeded();

        assert_eq!(
            store.remove_student("S9").unwrap_err(),
            Error::not_found(Entity::Student, "S9")
        );
        assert_eq!(
            store.remove_subject("C9").unwrap_err(),
            Error::not_found(Entity::Subject, "C9")
        );
        assert_eq!(
            store.remove_selection("S2", "C2").unwrap_err(),
            Error::not_found(Entity::Selection, "S2/C2")
        );

        assert_eq!(store.students().len(), 2);
        assert_eq!(store.subjects().len(), 2);
        assert_eq!(store.selections().len(), 3);
    }

    #[test]
    fn remove_selection_only_removes_the_pair() {
        let mut store = seeded();

        store.remove_selection("S1", "C1").unwrap();

        assert_eq!(
            store.selections(),
            vec![Selection::new("S1", "C2"), Selection::new("S2", "C1")]
        );
    }

    #[test]
    fn bulk_clears() {
        let mut store = seeded();
        store.remove_all_selections();
        assert!(store.selections().is_empty());
        assert_eq!(store.students().len(), 2);

        let mut store = seeded();
        store.remove_all_students();
        assert!(store.students().is_empty());
        assert!(store.selections().is_empty());
        assert_eq!(store.subjects().len(), 2);

        let mut store = seeded();
        store.remove_all_subjects();
        assert!(store.subjects().is_empty());
        assert!(store.selections().is_empty());
        assert_eq!(store.students().len(), 2);
    }

    #[test]
    fn reads_return_defensive_copies() {
        let store = seeded();

        let mut first = store.students();
        first.clear();

        assert_eq!(store.students().len(), 2);
    }

    #[test]
    fn reads_preserve_insertion_order() {
        let store = seeded();

        let ids: Vec<String> = store.students().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["S1", "S2"]);

        let pairs: Vec<String> = store.selections().iter().map(|s| s.pair_key()).collect();
        assert_eq!(pairs, vec!["S1/C1", "S1/C2", "S2/C1"]);
    }

    #[test]
    fn foreign_key_projections() {
        let store = seeded();

        assert_eq!(store.student_selections("S1").len(), 2);
        assert_eq!(store.subject_selections("C1").len(), 2);
        assert!(store.student_selections("S9").is_empty());
        assert!(store.subject_selections("C9").is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let store = seeded();

        assert_eq!(store.student_by_id("S2").unwrap().name, "Bob");
        assert_eq!(store.subject_by_id("C2").unwrap().name, "Physics");
        assert!(store.student_by_id("missing").is_none());
        assert!(store.subject_by_id("missing").is_none());
    }
}
