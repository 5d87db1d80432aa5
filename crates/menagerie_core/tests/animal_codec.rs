use menagerie_core::{decode_animals, encode_animals, seed_animals, CodecError};
use serde_json::{json, Value};

#[test]
fn round_trip_preserves_order_and_fields() {
    let animals = seed_animals().unwrap();

    let text = encode_animals(&animals).unwrap();
    let decoded = decode_animals(&text).unwrap();

    assert_eq!(decoded, animals);
    assert_eq!(encode_animals(&decoded).unwrap(), text);
}

#[test]
fn encoded_document_uses_wire_field_names() {
    let text = encode_animals(&seed_animals().unwrap()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
        value,
        json!([
            { "$type": "lion", "Name": "Simba", "Age": 5, "IsAlpha": true },
            { "$type": "parrot", "Name": "Polly", "Age": 2, "Vocabulary": ["Hello", "Cracker"] },
            { "$type": "snake", "Name": "Nagini", "Age": 4, "IsVenomous": true }
        ])
    );
}

#[test]
fn decode_normalizes_parrot_vocabulary() {
    let text = json!([
        { "$type": "parrot", "Name": " Polly ", "Age": 2, "Vocabulary": ["hi", " HI ", ""] }
    ])
    .to_string();

    let decoded = decode_animals(&text).unwrap();
    assert_eq!(decoded[0].name(), "Polly");
    assert_eq!(decoded[0].vocabulary().unwrap().as_slice(), ["hi"]);
}

#[test]
fn decode_rejects_missing_or_unknown_discriminator() {
    let missing = json!([{ "Name": "Simba", "Age": 5, "IsAlpha": true }]).to_string();
    assert!(matches!(decode_animals(&missing), Err(CodecError::Json(_))));

    let unknown = json!([{ "$type": "tiger", "Name": "Shere Khan", "Age": 5 }]).to_string();
    assert!(matches!(decode_animals(&unknown), Err(CodecError::Json(_))));
}

#[test]
fn decode_rejects_missing_and_mistyped_fields() {
    let cases = [
        json!([{ "$type": "lion", "Name": "Simba", "Age": 5 }]),
        json!([{ "$type": "lion", "Name": "Simba", "Age": "five", "IsAlpha": true }]),
        json!([{ "$type": "lion", "Name": "Simba", "Age": 5.5, "IsAlpha": true }]),
        json!([{ "$type": "snake", "Name": "Kaa", "Age": 5, "IsVenomous": "yes" }]),
        json!([{ "$type": "parrot", "Name": "Polly", "Age": 2, "Vocabulary": "Hello" }]),
        json!({ "$type": "lion", "Name": "Simba", "Age": 5, "IsAlpha": true }),
    ];

    for case in cases {
        let result = decode_animals(&case.to_string());
        assert!(
            matches!(result, Err(CodecError::Json(_))),
            "expected format error for {case}"
        );
    }
}

#[test]
fn decode_applies_record_validation() {
    let text = json!([
        { "$type": "lion", "Name": "Simba", "Age": 5, "IsAlpha": true },
        { "$type": "snake", "Name": "   ", "Age": 4, "IsVenomous": true }
    ])
    .to_string();

    let err = decode_animals(&text).unwrap_err();
    assert!(matches!(err, CodecError::InvalidRecord { index: 1, .. }));

    let negative = json!([{ "$type": "lion", "Name": "Simba", "Age": -3, "IsAlpha": true }]);
    let err = decode_animals(&negative.to_string()).unwrap_err();
    assert!(matches!(err, CodecError::InvalidRecord { index: 0, .. }));
}

#[test]
fn log_fields_omit_document_values() {
    let text = r#"[{"$type":"parrot","Name":"Polly","Age":2,"Vocabulary":"SecretWord"}]"#;
    let err = decode_animals(text).unwrap_err();

    let fields = err.log_fields();
    assert!(!fields.contains("SecretWord"), "leaked value: {fields}");
    assert!(!fields.contains("Polly"), "leaked value: {fields}");
    assert!(fields.starts_with("category=data line=1 column="), "{fields}");
}

#[test]
fn log_fields_report_index_and_reason_for_invalid_records() {
    let text = json!([
        { "$type": "snake", "Name": "Nagini", "Age": 4, "IsVenomous": true },
        { "$type": "lion", "Name": "Simba", "Age": -7, "IsAlpha": true }
    ])
    .to_string();

    let fields = decode_animals(&text).unwrap_err().log_fields();
    assert_eq!(fields, "category=validation index=1 reason=negative_age");
}
