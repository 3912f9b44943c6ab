use std::any::Any;

use crate::PathSegment;

/// Any struct that can be checked by a [StructValidator](crate::StructValidator) needs to
/// implement `Record`. Each field is visited together with its rule annotations, a
/// comma-separated list such as `"required,cpf"`.
///
/// ```
/// use brdocs::{Cpf, Date, Record, RecordVisitor};
///
/// struct Person {
///     name: String,
///     cpf: Cpf,
///     birth_date: Date,
/// }
///
/// impl Record for Person {
///     fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
///         visitor.field("name", &self.name, "required,max=120");
///         visitor.field("cpf", &self.cpf, "required,cpf");
///         visitor.field("birth_date", &self.birth_date, "required,date");
///     }
/// }
/// ```
pub trait Record {
    /// Recursively visit all annotated fields of the record.
    fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>);
}

pub trait RecordVisitor<'a> {
    fn push_segment(&mut self, segment: PathSegment<'a>);
    fn pop_segment(&mut self);
    fn visit_value(&mut self, value: &'a dyn Any, rules: &'a str);

    fn field(&mut self, name: &'a str, value: &'a dyn Any, rules: &'a str) {
        self.push_segment(name.into());
        self.visit_value(value, rules);
        self.pop_segment();
    }

    fn nested<R: Record>(&mut self, name: &'a str, record: &'a R)
    where
        Self: Sized,
    {
        self.push_segment(name.into());
        record.visit_record(self);
        self.pop_segment();
    }
}

impl<R: Record> Record for Vec<R> {
    fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
        for (i, item) in self.iter().enumerate() {
            visitor.push_segment(PathSegment::Index(i));
            item.visit_record(visitor);
            visitor.pop_segment();
        }
    }
}

impl<R: Record> Record for Option<R> {
    fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
        if let Some(record) = self {
            record.visit_record(visitor);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum VisitOp<'a> {
        Push(PathSegment<'a>),
        Pop,
        Visit(String),
    }

    struct Visitor<'a> {
        ops: Vec<VisitOp<'a>>,
    }

    impl<'a> RecordVisitor<'a> for Visitor<'a> {
        fn push_segment(&mut self, segment: PathSegment<'a>) {
            self.ops.push(VisitOp::Push(segment));
        }

        fn pop_segment(&mut self) {
            self.ops.push(VisitOp::Pop);
        }

        fn visit_value(&mut self, _value: &'a dyn Any, rules: &'a str) {
            self.ops.push(VisitOp::Visit(rules.to_string()));
        }
    }

    struct Address {
        zip_code: String,
    }

    impl Record for Address {
        fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
            visitor.field("zip_code", &self.zip_code, "numeric,len=8");
        }
    }

    struct Company {
        name: String,
        addresses: Vec<Address>,
    }

    impl Record for Company {
        fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
            visitor.field("name", &self.name, "required");
            visitor.nested("addresses", &self.addresses);
        }
    }

    #[test]
    fn test_nested_record() {
        let company = Company {
            name: "ACME".to_string(),
            addresses: vec![
                Address {
                    zip_code: "01310100".to_string(),
                },
                Address {
                    zip_code: "20040002".to_string(),
                },
            ],
        };

        let mut visitor = Visitor { ops: vec![] };
        company.visit_record(&mut visitor);

        assert_eq!(
            visitor.ops,
            vec![
                VisitOp::Push(PathSegment::Field("name".into())),
                VisitOp::Visit("required".into()),
                VisitOp::Pop,
                VisitOp::Push(PathSegment::Field("addresses".into())),
                VisitOp::Push(PathSegment::Index(0)),
                VisitOp::Push(PathSegment::Field("zip_code".into())),
                VisitOp::Visit("numeric,len=8".into()),
                VisitOp::Pop,
                VisitOp::Pop,
                VisitOp::Push(PathSegment::Index(1)),
                VisitOp::Push(PathSegment::Field("zip_code".into())),
                VisitOp::Visit("numeric,len=8".into()),
                VisitOp::Pop,
                VisitOp::Pop,
                VisitOp::Pop,
            ]
        );
    }

    #[test]
    fn test_optional_record() {
        let missing: Option<Address> = None;
        let present = Some(Address {
            zip_code: "01310100".to_string(),
        });

        let mut visitor = Visitor { ops: vec![] };
        missing.visit_record(&mut visitor);
        assert!(visitor.ops.is_empty());

        present.visit_record(&mut visitor);
        assert_eq!(visitor.ops.len(), 3);
    }
}
