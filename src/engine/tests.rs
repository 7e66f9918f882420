use super::*;

fn verifier() -> Verifier {
    Verifier::with_defaults()
}

#[test]
fn invalid_config_rejected_at_construction() {
    let cfg = VerifyConfig {
        fuzzy_threshold: 180.0,
        ..Default::default()
    };
    let err = Verifier::new(cfg).expect_err("config should be invalid");
    match err {
        VerifyError::InvalidConfig(msg) => assert!(msg.contains("fuzzy_threshold")),
    }
}

#[test]
fn cascade_short_circuits_on_exact_match() {
    let result = verifier().check_matches_cascade("750 ml", "net contents 750 ml");
    assert!(result.matched);
    // An exact hit must never be reported under a fuzzy label.
    assert_eq!(result.comment, "Exact match");
}

#[test]
fn cascade_falls_through_to_normalized() {
    let result = verifier().check_matches_cascade("750 ml", "NET CONTENTS 750 mL");
    assert!(result.matched);
    assert_eq!(result.comment, "Normalized match");
}

#[test]
fn cascade_recovers_misspellings_via_fuzzy() {
    let source = normalize_text("OLD TOM DISTILERY Bourbon Whiskey");
    let result = verifier().check_matches_cascade("Old Tom Distillery", &source);
    assert!(result.matched);
    assert!(result.comment.contains("Fuzzy match"));
}

#[test]
fn cascade_failure_returns_fuzzy_diagnostic() {
    let source = normalize_text("RIVER BEND BREWING CO.");
    let result = verifier().verify_brand("Riverbend Winery", &source);
    assert!(!result.matched);
    assert!(result.comment.contains("Closest text"));
}

#[test]
fn cascade_never_matches_empty_input() {
    let v = verifier();
    for (target, source) in [("", "label text"), ("Old Tom", ""), ("", "")] {
        let result = v.check_matches_cascade(target, source);
        assert!(!result.matched);
        assert_eq!(result.comment, EMPTY_INPUT_COMMENT);
    }
}

#[test]
fn verify_abv_requires_percent_suffix() {
    let v = verifier();
    let source = normalize_text("This label includes 13.5% alc by volume");
    let result = v.verify_abv("13.5", &source);
    assert!(result.matched);
    assert_eq!(result.expected, "13.5");

    // The same number without a percent sign anywhere must not count.
    let source = normalize_text("aged 13.5 years in oak");
    let result = v.verify_abv("13.5", &source);
    assert!(!result.matched);
}

#[test]
fn verify_abv_echoes_declared_text_unmodified() {
    // Trimming is search-side only; the verdict reports what the user typed.
    let result = verifier().verify_abv(" 45 ", "45% alc vol");
    assert!(result.matched);
    assert_eq!(result.expected, " 45 ");
}

#[test]
fn verify_abv_empty_input_reported_before_suffixing() {
    let result = verifier().verify_abv("  ", "45% alc vol");
    assert!(!result.matched);
    assert_eq!(result.comment, EMPTY_INPUT_COMMENT);
}

#[test]
fn verify_volume_edge_cases() {
    let cases = [
        ("750 ml", "10% ABV 750 mL volume", true),
        ("750 ml", "10% ABV 750 ML volume", true),
        ("750  ml", "10% ABV 750 ml volume", true),
        ("700 ml", "10% ABV 750 ml volume", false),
        ("75 ml", "10% ABV 750 ml volume", false),
        ("50 ml", "10% ABV 750 ml volume", false),
        ("7500 ml", "10% ABV 750 ml volume", false),
        ("12.4 fl oz", "10% ABV 124 fl oz volume", false),
        ("124 fl oz", "10% ABV 12.4 fl oz volume", false),
    ];
    let v = verifier();
    for (declared, source, expected) in cases {
        let result = v.verify_volume(declared, source);
        assert_eq!(
            result.matched, expected,
            "declared: {declared:?}, source: {source:?}, comment: {}",
            result.comment
        );
    }
}

#[test]
fn gov_warning_matches_full_text() {
    let source = normalize_text(
        "GOVERNMENT WARNING: 1. According to the Surgeon General, women \
         should not drink alcoholic beverages during pregnancy because of the \
         risk of birth defects. 2. Consumption of alcoholic beverages impairs \
         your ability to drive a car or operate machinery, and may cause \
         health problems.",
    );
    let result = verifier().verify_gov_warning(&source);
    assert!(result.matched, "comment: {}", result.comment);
    assert_eq!(
        result.expected,
        [GOV_WARNING_TITLE, GOV_WARNING_PREGNANCY, GOV_WARNING_IMPAIRMENT].join("\n")
    );
    // The per-section strategy is still named on success.
    assert!(result.comment.contains("match"));
}

#[test]
fn gov_warning_lists_missing_sections_verbatim() {
    // Only the pregnancy clause is present.
    let source = normalize_text(
        "According to the Surgeon General, women should not drink alcoholic \
         beverages during pregnancy because of the risk of birth defects.",
    );
    let result = verifier().verify_gov_warning(&source);
    assert!(!result.matched);
    assert!(result.comment.starts_with("Sections not found:"));
    assert!(result.comment.contains(GOV_WARNING_TITLE));
    assert!(result.comment.contains(GOV_WARNING_IMPAIRMENT));
    assert!(!result.comment.contains("Surgeon General"));
}

#[test]
fn verify_all_returns_all_five_fields() {
    let input = VerificationInput {
        brand_name: "Old Tom Distillery".into(),
        product_name: "Kentucky Straight Bourbon Whiskey".into(),
        abv: "45".into(),
        volume: "750 ml".into(),
    };
    let ocr = "
        OLD TOM DISTILLERY
        Kentucky Straight Bourbon Whiskey
        45% Alc./Vol. (90 Proof)
        Net Contents 750 mL
        GOVERNMENT WARNING:
        1. According to the Surgeon General, women should not drink alcoholic \
        beverages during pregnancy because of the risk of birth defects.
        2. Consumption of alcoholic beverages impairs your ability to drive a \
        car or operate machinery, and may cause health problems.
    ";

    let results = verifier().verify_all(&input, ocr);
    let keys: Vec<LabelField> = results.keys().copied().collect();
    assert_eq!(keys, LabelField::ALL.to_vec());
    for (field, result) in &results {
        assert!(result.matched, "{field}: {}", result.comment);
    }
}

#[test]
fn verify_all_with_empty_inputs_still_reports_every_field() {
    let results = verifier().verify_all(&VerificationInput::default(), "");
    assert_eq!(results.len(), LabelField::ALL.len());
    for (field, result) in &results {
        assert!(!result.matched, "{field} should not match on empty input");
        assert!(!result.comment.is_empty());
    }
}

#[test]
fn results_are_self_consistent() {
    let input = VerificationInput {
        brand_name: "Riverbend Winery".into(),
        product_name: "Cabernet Sauvignon".into(),
        abv: "13.5".into(),
        volume: "750 ml".into(),
    };
    let ocr = "RIVERBEND WINERY Cabernet Sauvignon 13.5% Alc./Vol. 750 mL";

    for (field, result) in verifier().verify_all(&input, ocr) {
        if result.matched {
            let names_strategy = ["Exact match", "Normalized match", "Fuzzy match"]
                .iter()
                .any(|label| result.comment.contains(label));
            assert!(names_strategy, "{field}: {}", result.comment);
            assert!(result.found.is_some(), "{field} should carry found text");
        } else {
            assert!(
                result.comment == EMPTY_INPUT_COMMENT
                    || result.comment.contains("Closest text")
                    || result.comment.starts_with("Sections not found:")
                    || result.comment.contains("No comparable text"),
                "{field}: {}",
                result.comment
            );
        }
    }
}

#[test]
fn verify_all_is_deterministic() {
    let input = VerificationInput {
        brand_name: "Old Tom Distillery".into(),
        product_name: "Bourbon".into(),
        abv: "45".into(),
        volume: "750 ml".into(),
    };
    let ocr = "OLD TOM DISTILERY Bourbon 45% 750 mL";
    let v = verifier();
    assert_eq!(v.verify_all(&input, ocr), v.verify_all(&input, ocr));
}
