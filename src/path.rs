use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Location of a field inside a (possibly nested) record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path<'a> {
    segments: Vec<PathSegment<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment<'a> {
    Field(Cow<'a, str>),
    Index(usize),
}

impl<'a> Path<'a> {
    /// An empty path - pointing to the record itself.
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    pub fn push(&mut self, segment: PathSegment<'a>) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment<'a>> {
        self.segments.pop()
    }
}

// Fields are not escaped, a field name containing `.` or `[` renders ambiguously.
impl Display for Path<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(field) => {
                    if i != 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", field)?;
                }
                PathSegment::Index(i) => {
                    write!(f, "[{}]", i)?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> From<&'a str> for PathSegment<'a> {
    fn from(value: &'a str) -> Self {
        Self::Field(Cow::Borrowed(value))
    }
}
