//! End-to-end checks of the public codec API.

use colortween_codec::{
    normalize, parse, serialize, to_hsl_string, to_rgb_string, CodecError, ColorSpace, ColorToken,
    Grammar,
};

#[test]
fn every_grammar_normalizes_to_rgb() {
    let cases = [
        ("#f00", "rgb(255,0,0)"),
        ("f00", "rgb(255,0,0)"),
        ("#ff0000", "rgb(255,0,0)"),
        ("#FF000080", "rgb(255,0,0)"),
        ("rgb(255, 0, 0)", "rgb(255,0,0)"),
        ("rgba(255,0,0,0.25)", "rgb(255,0,0)"),
        ("hsl(0,100%,50%)", "rgb(255,0,0)"),
        ("HSL(0, 100, 50)", "rgb(255,0,0)"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_rgb_string(input).unwrap(), expected, "{}", input);
    }
}

#[test]
fn every_grammar_normalizes_to_hsl() {
    let cases = [
        ("#00f", "hsl(240,100%,50%)"),
        ("#0000ff", "hsl(240,100%,50%)"),
        ("rgb(0,0,255)", "hsl(240,100%,50%)"),
        ("hsl(240,100%,50%)", "hsl(240,100%,50%)"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_hsl_string(input).unwrap(), expected, "{}", input);
    }
}

#[test]
fn malformed_input_is_a_typed_error() {
    for input in ["notacolor", "#12", "rgb(1,2)", "hsl(a,b,c)", "   "] {
        match parse(input, ColorSpace::Rgb) {
            Err(CodecError::UnrecognizedColorFormat(value)) => assert_eq!(value, input),
            other => panic!("expected UnrecognizedColorFormat for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn precedence_resolves_the_same_way_in_both_target_spaces() {
    // The grammar is decided by the string alone; the target only affects conversion.
    for value in ["hsl(10,20%,30%)", "rgb(10,20,30)", "#0a141e", "#abc"] {
        let token = colortween_codec::tokenize(value);
        assert!(token.grammar().is_some());
        assert_eq!(
            token.into_space(ColorSpace::Rgb).is_some(),
            token.into_space(ColorSpace::Hsl).is_some()
        );
    }
    assert_eq!(
        colortween_codec::tokenize("#abc").grammar(),
        Some(Grammar::ShortHex)
    );
    assert!(matches!(
        colortween_codec::tokenize("#aabbcc"),
        ColorToken::FullHex(_)
    ));
}

#[test]
fn out_of_range_channels_propagate() {
    assert_eq!(normalize("rgb(300,0,999)", ColorSpace::Rgb).unwrap(), "rgb(300,0,999)");
    assert_eq!(
        normalize("hsl(720,150%,50%)", ColorSpace::Hsl).unwrap(),
        "hsl(720,150%,50%)"
    );
}

#[test]
fn hsl_to_rgb_to_hsl_is_stable_for_canonical_strings() {
    let rgb = to_rgb_string("hsl(210,50%,40%)").unwrap();
    assert_eq!(rgb, "rgb(51,102,153)");
    let channels = parse(&rgb, ColorSpace::Hsl).unwrap();
    assert_eq!(serialize(channels, ColorSpace::Hsl), "hsl(210,50%,40%)");
}
