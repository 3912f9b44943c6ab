use afl::fuzz;
use brdocs::{
    digits, format, generate_cpf, only_digits, validate_document, Cnpj, Cpf, Date,
    DocumentError, DocumentKind, Identifier,
};
use rand::{rngs::StdRng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    assert_eq!(digits(input).len(), only_digits(input).len());

    for kind in [DocumentKind::Cpf, DocumentKind::Cnpj] {
        check_identifier(input, kind);
    }

    if let Ok(date) = Date::parse(input) {
        assert_eq!(date.to_string(), input);
    }

    let cpf = generate_cpf(&mut rng);
    assert_eq!(validate_document(&cpf, DocumentKind::Cpf), Ok(()));
    let cpf = Cpf::new(&cpf).unwrap();
    assert_eq!(Cpf::new(cpf.formatted()).unwrap(), cpf);
}

fn check_identifier(input: &str, kind: DocumentKind) {
    let validation = validate_document(input, kind);
    match Identifier::new(input, kind) {
        Ok(identifier) => {
            // only the canonical shapes construct, and they must also validate
            assert_eq!(validation, Ok(()));
            assert_eq!(format(input, kind).as_deref(), Ok(identifier.formatted()));
            assert_eq!(identifier.digits_only(), only_digits(input));
            let reparsed = Identifier::new(&identifier.digits_only(), kind).unwrap();
            assert_eq!(reparsed, identifier);
        }
        Err(err) => match err.error() {
            DocumentError::InvalidFormat(_) => assert!(format(input, kind).is_err()),
            DocumentError::InvalidDocument(_) => assert!(validation.is_err()),
        },
    }

    let constructs = match kind {
        DocumentKind::Cpf => Cpf::new(input).is_ok(),
        DocumentKind::Cnpj => Cnpj::new(input).is_ok(),
    };
    assert_eq!(constructs, validation.is_ok() && format(input, kind).is_ok());
}
