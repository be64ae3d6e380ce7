//! The allow-list, as a closed enum.
//!
//! Wire names are the exact camelCase strings the presenter sends. Parsing
//! into `Method` is the entire allow-list check: a name that does not parse
//! can never reach the store, and adding a variant without a wire name (or
//! the reverse) fails the round-trip test below.

/// One of the sixteen operations reachable through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    AddStudent,
    RemoveStudent,
    RemoveAllStudents,
    AddSubject,
    RemoveSubject,
    RemoveAllSubjects,
    AddSelection,
    RemoveSelection,
    RemoveAllSelections,
    GetStudents,
    GetStudentById,
    GetSubjects,
    GetSubjectById,
    GetSelections,
    GetStudentSelections,
    GetSubjectSelections,
}

impl Method {
    /// Every method, in the order the original call surface enumerates them.
    pub const ALL: [Method; 16] = [
        Method::AddStudent,
        Method::RemoveStudent,
        Method::RemoveAllStudents,
        Method::AddSubject,
        Method::RemoveSubject,
        Method::RemoveAllSubjects,
        Method::AddSelection,
        Method::RemoveSelection,
        Method::RemoveAllSelections,
        Method::GetStudents,
        Method::GetStudentById,
        Method::GetSubjects,
        Method::GetSubjectById,
        Method::GetSelections,
        Method::GetStudentSelections,
        Method::GetSubjectSelections,
    ];

    /// Parse a wire name. Returns `None` for anything off the allow-list.
    pub fn parse(name: &str) -> Option<Method> {
        let method = match name {
            "addStudent" => Method::AddStudent,
            "removeStudent" => Method::RemoveStudent,
            "removeAllStudents" => Method::RemoveAllStudents,
            "addSubject" => Method::AddSubject,
            "removeSubject" => Method::RemoveSubject,
            "removeAllSubjects" => Method::RemoveAllSubjects,
            "addSelection" => Method::AddSelection,
            "removeSelection" => Method::RemoveSelection,
            "removeAllSelections" => Method::RemoveAllSelections,
            "getStudents" => Method::GetStudents,
            "getStudentById" => Method::GetStudentById,
            "getSubjects" => Method::GetSubjects,
            "getSubjectById" => Method::GetSubjectById,
            "getSelections" => Method::GetSelections,
            "getStudentSelections" => Method::GetStudentSelections,
            "getSubjectSelections" => Method::GetSubjectSelections,
            _ => return None,
        };
        Some(method)
    }

    /// The wire name for this method.
    pub fn name(self) -> &'static str {
        match self {
            Method::AddStudent => "addStudent",
            Method::RemoveStudent => "removeStudent",
            Method::RemoveAllStudents => "removeAllStudents",
            Method::AddSubject => "addSubject",
            Method::RemoveSubject => "removeSubject",
            Method::RemoveAllSubjects => "removeAllSubjects",
            Method::AddSelection => "addSelection",
            Method::RemoveSelection => "removeSelection",
            Method::RemoveAllSelections => "removeAllSelections",
            Method::GetStudents => "getStudents",
            Method::GetStudentById => "getStudentById",
            Method::GetSubjects => "getSubjects",
            Method::GetSubjectById => "getSubjectById",
            Method::GetSelections => "getSelections",
            Method::GetStudentSelections => "getStudentSelections",
            Method::GetSubjectSelections => "getSubjectSelections",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_method_round_trips_through_its_wire_name() {
        for method in Method::ALL {
            assert_eq!(Method::parse(method.name()), Some(method));
        }
    }

    #[test]
    fn unknown_names_do_not_parse() {
        assert_eq!(Method::parse("__proto__"), None);
        assert_eq!(Method::parse("constructor"), None);
        assert_eq!(Method::parse("dropEverything"), None);
        assert_eq!(Method::parse(""), None);
        // Wire names are case-sensitive.
        assert_eq!(Method::parse("addstudent"), None);
        assert_eq!(Method::parse("AddStudent"), None);
    }

    #[test]
    fn allow_list_is_exactly_sixteen_names() {
        let names: std::collections::HashSet<&str> =
            Method::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), 16);
    }
}
