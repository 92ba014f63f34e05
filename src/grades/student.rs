use std::fmt;

/// A single student entry holding the raw marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub marks: i32,
}

impl Student {
    pub fn new(name: impl Into<String>, marks: i32) -> Self {
        Self {
            name: name.into(),
            marks,
        }
    }

    /// Letter grade derived from the marks; never stored.
    pub fn grade(&self) -> Grade {
        Grade::for_marks(self.marks)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Marks: {}, Grade: {}",
            self.name,
            self.marks,
            self.grade()
        )
    }
}

/// Letter grade ladder with inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn for_marks(marks: i32) -> Self {
        if marks >= 90 {
            Grade::A
        } else if marks >= 75 {
            Grade::B
        } else if marks >= 60 {
            Grade::C
        } else if marks >= 40 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{letter}")
    }
}
