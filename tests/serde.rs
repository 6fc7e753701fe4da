#![cfg(feature = "serde")]

use sm_rs::{ChartFormat, FieldName, SampleSelector, sm::model::bpm::TempoSegment};

#[test]
fn field_names_use_chart_tokens() {
    assert_eq!(
        serde_json::to_string(&FieldName::SampleStart).unwrap(),
        r#""SAMPLESTART""#
    );
    assert_eq!(
        serde_json::from_str::<FieldName>(r#""DISPLAYBPM""#).unwrap(),
        FieldName::DisplayBpm
    );
    for name in FieldName::ALL {
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, format!("\"{name}\""));
    }
}

#[test]
fn selector_and_format() {
    assert_eq!(
        serde_json::from_str::<SampleSelector>(r#""length""#).unwrap(),
        SampleSelector::Length
    );
    assert_eq!(serde_json::to_string(&ChartFormat::Ssc).unwrap(), r#""Ssc""#);
}

#[test]
fn tempo_segment_borrows() {
    let json = r#"{"beat":"0.000","bpm":"120.000"}"#;
    let segment: TempoSegment<'_> = serde_json::from_str(json).unwrap();
    assert_eq!(segment.bpm, "120.000");
    assert_eq!(serde_json::to_string(&segment).unwrap(), json);
}
