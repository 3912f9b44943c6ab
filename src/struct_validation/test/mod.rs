
use super::*;
use crate::{Cnpj, Cpf, Date, Record, RecordVisitor};

pub struct Person {
    pub name: String,
    pub cpf: Cpf,
    pub birth_date: Date,
    pub nickname: Option<String>,
}

impl Record for Person {
    fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
        visitor.field("name", &self.name, "required,min=3,max=120");
        visitor.field("cpf", &self.cpf, "required,cpf");
        visitor.field("birth_date", &self.birth_date, "required,date");
        visitor.field("nickname", &self.nickname, "omitempty,min=2");
    }
}

pub struct Partner {
    pub cpf: String,
    pub share: u32,
}

impl Record for Partner {
    fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
        visitor.field("cpf", &self.cpf, "required,cpf");
        visitor.field("share", &self.share, "min=1,max=100");
    }
}

pub struct Company {
    pub cnpj: Cnpj,
    pub zip_code: String,
    pub partners: Vec<Partner>,
}

impl Record for Company {
    fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
        visitor.field("cnpj", &self.cnpj, "required,cnpj");
        visitor.field("zip_code", &self.zip_code, "numeric,len=8");
        visitor.nested("partners", &self.partners);
    }
}

pub fn valid_person() -> Person {
    Person {
        name: "Maria da Silva".to_string(),
        cpf: Cpf::new("883.500.570-17").unwrap(),
        birth_date: Date::from_ymd(1980, 12, 31).unwrap(),
        nickname: None,
    }
}

pub fn company_with_partners(partners: Vec<Partner>) -> Company {
    Company {
        cnpj: Cnpj::new("19.783.246/0001-05").unwrap(),
        zip_code: "01310100".to_string(),
        partners,
    }
}

fn violations(result: Result<(), StructValidationError>) -> Vec<(String, Rule)> {
    match result {
        Err(StructValidationError::Violations(errors)) => errors
            .into_iter()
            .map(|error| (error.field, error.rule))
            .collect(),
        other => panic!("expected violations, got {other:?}"),
    }
}

#[test]
fn test_valid_person() {
    let validator = StructValidator::new();
    assert_eq!(validator.validate(&valid_person()), Ok(()));
}

#[test]
fn test_unset_date_fails_required() {
    let validator = StructValidator::new();
    let person = Person {
        birth_date: Date::unset(),
        ..valid_person()
    };
    assert_eq!(
        violations(validator.validate(&person)),
        vec![
            ("birth_date".to_string(), Rule::Required),
            ("birth_date".to_string(), Rule::Date),
        ]
    );
}

#[test]
fn test_omit_empty() {
    let validator = StructValidator::new();

    let person = Person {
        nickname: Some(String::new()),
        ..valid_person()
    };
    assert_eq!(validator.validate(&person), Ok(()));

    let person = Person {
        nickname: Some("M".to_string()),
        ..valid_person()
    };
    assert_eq!(
        violations(validator.validate(&person)),
        vec![("nickname".to_string(), Rule::Min { value: 2 })]
    );
}

#[test]
fn test_all_violations_are_collected() {
    let validator = StructValidator::new();
    let person = Person {
        name: "Al".to_string(),
        birth_date: Date::unset(),
        ..valid_person()
    };

    let result = validator.validate(&person);
    let errors = result.as_ref().unwrap_err().violations().unwrap();
    assert_eq!(errors.len(), 3);

    let name_error = errors.for_field("name").next().unwrap();
    assert_eq!(name_error.rule, Rule::Min { value: 3 });
    assert_eq!(name_error.value, Primitive::Text("Al".to_string()));
}

#[test]
fn test_nested_paths() {
    let validator = StructValidator::new();
    let company = company_with_partners(vec![
        Partner {
            cpf: "883.500.570-17".to_string(),
            share: 60,
        },
        Partner {
            cpf: "111.111.111-11".to_string(),
            share: 0,
        },
    ]);

    assert_eq!(
        violations(validator.validate(&company)),
        vec![
            ("partners[1].cpf".to_string(), Rule::Cpf),
            ("partners[1].share".to_string(), Rule::Min { value: 1 }),
        ]
    );
}

#[test]
fn test_invalid_rules() {
    struct Misconfigured {
        rg: String,
    }

    impl Record for Misconfigured {
        fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
            visitor.field("rg", &self.rg, "required,rg");
        }
    }

    let validator = StructValidator::new();
    assert_eq!(
        validator.validate(&Misconfigured {
            rg: "12.345.678-9".to_string()
        }),
        Err(StructValidationError::InvalidRules {
            field: "rg".to_string(),
            source: RuleParseError::UnknownRule("rg".to_string()),
        })
    );
}

struct Phone {
    number: String,
}

struct Contact {
    phone: Phone,
}

impl Record for Contact {
    fn visit_record<'a>(&'a self, visitor: &mut impl RecordVisitor<'a>) {
        visitor.field("phone", &self.phone, "required,numeric,min=10");
    }
}

#[test]
fn test_unsupported_type() {
    let validator = StructValidator::new();
    let contact = Contact {
        phone: Phone {
            number: "11987654321".to_string(),
        },
    };
    assert_eq!(
        validator.validate(&contact),
        Err(StructValidationError::UnsupportedType {
            field: "phone".to_string()
        })
    );
}

#[test]
fn test_custom_type() {
    let validator = StructValidator::builder()
        .register_custom_type(|phone: &Phone| Primitive::Text(phone.number.clone()))
        .build();

    let contact = Contact {
        phone: Phone {
            number: "11987654321".to_string(),
        },
    };
    assert_eq!(validator.validate(&contact), Ok(()));

    let contact = Contact {
        phone: Phone {
            number: "(11) 98765-4321".to_string(),
        },
    };
    assert_eq!(
        violations(validator.validate(&contact)),
        vec![("phone".to_string(), Rule::Numeric)]
    );
}

#[test]
fn test_custom_type_overrides_default() {
    // dates as plain text, so a `len` rule applies to them
    let validator = StructValidator::builder()
        .register_custom_type(|date: &Date| Primitive::Text(date.to_string()))
        .build();

    let date = Date::from_ymd(2016, 8, 15).unwrap();
    assert_eq!(validator.validate_value(&date, "date,len=10"), Ok(()));
    assert!(StructValidator::new()
        .validate_value(&date, "date,len=10")
        .is_err());
}

#[test]
fn test_validate_value() {
    let validator = StructValidator::new();
    assert_eq!(
        validator.validate_value(&"00.623.904/0001-73".to_string(), "cnpj"),
        Ok(())
    );
    assert_eq!(validator.validate_value(&42i64, "min=18,max=130"), Ok(()));
    assert_eq!(
        violations(validator.validate_value(&"00.623.904/0001-71".to_string(), "cnpj")),
        vec![(String::new(), Rule::Cnpj)]
    );
    assert_eq!(
        validator.validate_value(&1.5f64, "required"),
        Err(StructValidationError::UnsupportedType {
            field: String::new()
        })
    );
}

#[test]
fn test_identifier_types_unwrap_to_formatted_text() {
    let validator = StructValidator::new();
    let cpf = Cpf::new("84149405018").unwrap();
    assert_eq!(validator.validate_value(&cpf, "len=14"), Ok(()));
    assert_eq!(
        validator.validate_value(cpf.as_identifier(), "required,cpf"),
        Ok(())
    );
}

#[test]
fn test_validator_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StructValidator>();
}
