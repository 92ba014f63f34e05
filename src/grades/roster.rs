use super::student::Student;

/// Ordered in-memory list of students; lives only for the session.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Students in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
