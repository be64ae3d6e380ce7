//! Synchronous dispatch: one (name, args) pair in, one value or failure out.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use roster_store::{RecordStore, Selection, Student, Subject};

use crate::failure::Failure;
use crate::method::Method;

/// Dispatch a named call against the store.
///
/// This is the whole boundary contract in one function: allow-list check,
/// positional argument decoding, store invocation, and wrapping of the
/// outcome. Extra trailing arguments are ignored, matching the positional
/// spread semantics of the original call surface.
///
/// Absent lookups (`getStudentById` on a missing id) return `Value::Null`,
/// which is the explicit "absent" marker - not a failure.
pub fn dispatch(store: &mut RecordStore, method: &str, args: &[Value]) -> Result<Value, Failure> {
    let Some(method) = Method::parse(method) else {
        return Err(Failure::method_not_found(method));
    };

    match method {
        Method::AddStudent => {
            let student: Student = arg(method, args, 0)?;
            store.add_student(student)?;
            Ok(Value::Null)
        }
        Method::RemoveStudent => {
            let id: String = arg(method, args, 0)?;
            store.remove_student(&id)?;
            Ok(Value::Null)
        }
        Method::RemoveAllStudents => {
            store.remove_all_students();
            Ok(Value::Null)
        }
        Method::AddSubject => {
            let subject: Subject = arg(method, args, 0)?;
            store.add_subject(subject)?;
            Ok(Value::Null)
        }
        Method::RemoveSubject => {
            let id: String = arg(method, args, 0)?;
            store.remove_subject(&id)?;
            Ok(Value::Null)
        }
        Method::RemoveAllSubjects => {
            store.remove_all_subjects();
            Ok(Value::Null)
        }
        Method::AddSelection => {
            let selection: Selection = arg(method, args, 0)?;
            store.add_selection(selection)?;
            Ok(Value::Null)
        }
        Method::RemoveSelection => {
            let student_id: String = arg(method, args, 0)?;
            let subject_id: String = arg(method, args, 1)?;
            store.remove_selection(&student_id, &subject_id)?;
            Ok(Value::Null)
        }
        Method::RemoveAllSelections => {
            store.remove_all_selections();
            Ok(Value::Null)
        }
        Method::GetStudents => reply(store.students()),
        Method::GetStudentById => {
            let id: String = arg(method, args, 0)?;
            reply(store.student_by_id(&id))
        }
        Method::GetSubjects => reply(store.subjects()),
        Method::GetSubjectById => {
            let id: String = arg(method, args, 0)?;
            reply(store.subject_by_id(&id))
        }
        Method::GetSelections => reply(store.selections()),
        Method::GetStudentSelections => {
            let student_id: String = arg(method, args, 0)?;
            reply(store.student_selections(&student_id))
        }
        Method::GetSubjectSelections => {
            let subject_id: String = arg(method, args, 0)?;
            reply(store.subject_selections(&subject_id))
        }
    }
}

/// Decode the positional argument at `index`.
fn arg<T: DeserializeOwned>(method: Method, args: &[Value], index: usize) -> Result<T, Failure> {
    let value = args
        .get(index)
        .ok_or_else(|| Failure::invalid_arguments(method, format!("missing argument {}", index)))?;
    serde_json::from_value(value.clone()).map_err(|e| Failure::invalid_arguments(method, e))
}

/// Serialize a read projection into a boundary value.
///
/// Record types only contain string-keyed fields, so this cannot fail in
/// practice; the error arm keeps the no-raw-fault guarantee honest.
fn reply<T: Serialize>(value: T) -> Result<Value, Failure> {
    serde_json::to_value(value).map_err(Failure::internal)
}
