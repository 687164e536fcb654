use cpename_core::{bind, unbind, Attribute, AttributeValue, Encoding, Error, Name};
use proptest::prelude::*;

const MAX_LITERAL_LEN: usize = 8;
const MAX_QUESTION_RUN: usize = 4;

/// Punctuation that may appear quoted in a WFN value, tilde excluded
const PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '`', '{', '|', '}',
];

fn literal_char() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::char::range('a', 'z').prop_map(|c| c.to_string()),
        2 => prop::char::range('0', '9').prop_map(|c| c.to_string()),
        1 => Just(String::from("_")),
        2 => prop::sample::select(PUNCTUATION).prop_map(|c| format!("\\{}", c)),
    ]
}

fn logical_body() -> impl Strategy<Value = String> {
    let edge = prop_oneof![
        2 => Just(String::new()),
        1 => Just(String::from("*")),
        1 => (1..=MAX_QUESTION_RUN).prop_map(|n| "?".repeat(n)),
    ];
    (
        edge.clone(),
        prop::collection::vec(literal_char(), 1..=MAX_LITERAL_LEN),
        any::<bool>(),
        edge,
    )
        .prop_map(|(lead, chars, embedded_star, trail)| {
            let mut body = lead;
            let middle = chars.len() / 2;
            for (i, c) in chars.iter().enumerate() {
                if embedded_star && i == middle && i > 0 {
                    body.push('*');
                }
                body.push_str(c);
            }
            body.push_str(&trail);
            body
        })
}

fn attribute_value(attribute: Attribute) -> BoxedStrategy<AttributeValue> {
    if attribute == Attribute::Part {
        return prop_oneof![
            Just(AttributeValue::Any),
            Just(AttributeValue::NotApplicable),
            prop::sample::select(vec!["a", "o", "h"])
                .prop_map(|p| AttributeValue::logical(Attribute::Part, p).unwrap()),
        ]
        .boxed();
    }
    prop_oneof![
        2 => Just(AttributeValue::Any),
        1 => Just(AttributeValue::NotApplicable),
        4 => logical_body().prop_map(move |b| AttributeValue::logical(attribute, &b).unwrap()),
    ]
    .boxed()
}

fn name() -> impl Strategy<Value = Name> {
    let strategies: Vec<BoxedStrategy<AttributeValue>> =
        Attribute::ALL.iter().map(|a| attribute_value(*a)).collect();
    strategies.prop_map(|values| {
        let mut builder = Name::builder();
        for (attribute, value) in Attribute::ALL.iter().zip(values) {
            builder = builder.value(*attribute, value);
        }
        builder.build()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn roundtrip_every_encoding(n in name()) {
        for encoding in Encoding::ALL {
            let text = bind(&n, encoding).unwrap();
            let back = unbind(&text, encoding).unwrap();
            prop_assert_eq!(&back, &n, "encoding {} text {}", encoding, text);
        }
    }

    #[test]
    fn wfn_fs_wfn_is_stable(n in name()) {
        let wfn = bind(&n, Encoding::Wfn).unwrap();
        let fs = bind(&unbind(&wfn, Encoding::Wfn).unwrap(), Encoding::Fs).unwrap();
        let again = bind(&unbind(&fs, Encoding::Fs).unwrap(), Encoding::Wfn).unwrap();
        prop_assert_eq!(again, wfn);
    }

    #[test]
    fn question_mark_runs_at_edges_are_valid(lead in 0usize..16, trail in 0usize..16) {
        let body = format!("{}hp{}", "?".repeat(lead), "?".repeat(trail));
        prop_assert!(AttributeValue::logical(Attribute::Vendor, &body).is_ok());
    }

    #[test]
    fn embedded_question_mark_is_rejected(left in "[a-z]{1,6}", right in "[a-z]{1,6}") {
        let body = format!("{}?{}", left, right);
        prop_assert!(AttributeValue::logical(Attribute::Vendor, &body).is_err());
    }
}

#[test]
fn legacy_uri_refuses_literal_tilde() {
    let n = Name::builder()
        .logical(Attribute::Part, "a")
        .unwrap()
        .logical(Attribute::Version, "1\\~2")
        .unwrap()
        .build();
    assert!(matches!(
        bind(&n, Encoding::Uri22),
        Err(Error::UnrepresentableValue {
            attribute: Attribute::Version,
            encoding: Encoding::Uri22,
        })
    ));
    let uri = bind(&n, Encoding::Uri).unwrap();
    assert_eq!(unbind(&uri, Encoding::Uri).unwrap(), n);
}
