use iptc_naa::{
    buffer::SegmentView,
    iptc::{Iptc, resources, scan},
};
use iptc_naa_types::iptc::{IptcKey, IptcKeyValue, IptcValue};

fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

/// helper: one well-formed tagged data set
fn record(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut bytes: Vec<u8> = vec![0x1C, 0x02, tag];
    bytes.extend_from_slice(&(value.len() as u16).to_be_bytes());
    bytes.extend_from_slice(value);
    bytes
}

/// helper: build an APP13 segment to make these tests readable
///
/// `name_field` must already include its length byte and any padding, since
/// several tests exercise exactly that part of the format.
fn make_app13_sample(name_field: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::new();

    // segment head: APP13 marker pair, a (fake) length pair, identifier
    bytes.extend_from_slice(&[0xFF, 0xED, 0x00, 0x00]);
    bytes.extend_from_slice(b"Photoshop 3.0\0");

    // the IPTC-NAA resource: 8BIM signature + resource id 0x0404
    bytes.extend_from_slice(&[0x38, 0x42, 0x49, 0x4D, 0x04, 0x04]);

    // high byte of the name length pair, then the caller-shaped name field
    bytes.push(0x00);
    bytes.extend_from_slice(name_field);

    // the tagged data sets
    bytes.extend_from_slice(payload);

    bytes
}

/// The probe should accept APP13 Photoshop segments and refuse everything
/// else, with no partial matches.
#[test]
fn probe_routes_correctly() {
    logger();

    let sample = make_app13_sample(&[0x00, 0x00, 0x00, 0x00, 0x00], &[]);
    assert!(resources::can_handle(&SegmentView::new(&sample), 0));

    // same bytes, wrong marker code
    let mut wrong_marker = sample.clone();
    wrong_marker[1] = 0xE1;
    assert!(!resources::can_handle(&SegmentView::new(&wrong_marker), 0));

    // same bytes, identifier dented
    let mut wrong_identifier = sample.clone();
    wrong_identifier[4] = b'p';
    assert!(!resources::can_handle(&SegmentView::new(&wrong_identifier), 0));
}

/// Scenario: a segment with no `8BIM 04 04` anywhere reports "no IPTC",
/// and the pipeline never parses.
#[test]
fn signature_free_segment_has_no_iptc() {
    logger();

    let mut segment: Vec<u8> = vec![0xFF, 0xED, 0x00, 0x00];
    segment.extend_from_slice(b"Photoshop 3.0\0");
    segment.extend_from_slice(b"no resources in here at all");
    let view = SegmentView::new(&segment);

    assert_eq!(resources::header_length(&view, 0, segment.len()), Ok(None));
    assert_eq!(Iptc::from_segment(&view, 0, segment.len()), Ok(None));
}

/// Scenario: legacy resource (name length byte of zero) - the payload
/// starts four reserved bytes later, and a single record decodes.
#[test]
fn legacy_name_single_record() {
    logger();

    // name field: length byte 0, then the four reserved bytes
    let sample = make_app13_sample(&[0x00, 0x00, 0x00, 0x00, 0x00], &record(0x78, b"Hello"));
    let view = SegmentView::new(&sample);

    let iptc = Iptc::from_segment(&view, 0, sample.len())
        .expect("offsets are in range")
        .expect("sample carries an IPTC resource");

    assert_eq!(
        iptc.pairs,
        vec![IptcKeyValue {
            key: IptcKey::Name("CaptionAbstract"),
            value: IptcValue::Single("Hello".into()),
        }]
    );
}

/// Scenario: an odd name length pads up to the next even number. The skip
/// distance matches the legacy case numerically, but for a different
/// reason - this sample has a real three-byte name.
#[test]
fn odd_name_pads_to_even() {
    logger();

    // name field: length byte 3, name "abc", one pad byte
    let sample = make_app13_sample(&[0x03, b'a', b'b', b'c', 0x00], &record(0x78, b"Hello"));
    let view = SegmentView::new(&sample);

    // identifier (14) + marker head (4) puts the resource at 18; 8 + 4 past it
    let head = resources::header_length(&view, 0, sample.len());
    assert_eq!(head, Ok(Some(18 + 8 + 4)));

    let iptc = Iptc::from_segment(&view, 0, sample.len()).unwrap().unwrap();
    assert_eq!(iptc.pairs.len(), 1);
}

/// Scenario: the same tag three times becomes a three-element list, in
/// stream order; the second occurrence is where scalar becomes list.
#[test]
fn repeats_promote_to_list() {
    logger();

    let mut payload: Vec<u8> = Vec::new();
    payload.extend_from_slice(&record(25, b"A"));
    payload.extend_from_slice(&record(25, b"B"));

    // two occurrences: a two-element list
    let two = Iptc::parse(&payload);
    assert_eq!(
        two.pairs,
        vec![IptcKeyValue {
            key: IptcKey::Name("Keywords"),
            value: IptcValue::List(vec!["A".into(), "B".into()]),
        }]
    );

    // a third appends
    payload.extend_from_slice(&record(25, b"C"));
    let three = Iptc::parse(&payload);
    assert_eq!(
        three.pairs,
        vec![IptcKeyValue {
            key: IptcKey::Name("Keywords"),
            value: IptcValue::List(vec!["A".into(), "B".into(), "C".into()]),
        }]
    );
}

/// Output order follows the stream, not tag-id order, and mixes named and
/// numeric keys freely.
#[test]
fn stream_order_with_mixed_keys() {
    logger();

    let mut payload: Vec<u8> = Vec::new();
    payload.extend_from_slice(&record(120, b"a caption"));
    payload.extend_from_slice(&record(250, b"mystery"));
    payload.extend_from_slice(&record(25, b"press"));

    let iptc = Iptc::parse(&payload);
    let keys: Vec<IptcKey> = iptc.pairs.iter().map(|p| p.key).collect();

    assert_eq!(
        keys,
        vec![
            IptcKey::Name("CaptionAbstract"),
            IptcKey::Tag(250),
            IptcKey::Name("Keywords"),
        ]
    );
}

/// Scenario: a record declaring 0xFFFF bytes with only ten remaining fails
/// alone and is skipped; the rest of the stream still parses. No crash, no
/// out-of-bounds read.
#[test]
fn truncated_record_is_skipped() {
    logger();

    let mut payload: Vec<u8> = Vec::new();
    payload.extend_from_slice(&record(105, b"good headline"));
    payload.extend_from_slice(&[0x1C, 0x02, 0x78, 0xFF, 0xFF]); // size 0xFFFF...
    payload.extend_from_slice(&[0x20; 10]); // ...with 10 bytes left

    let iptc = Iptc::parse(&payload);
    assert_eq!(
        iptc.pairs,
        vec![IptcKeyValue {
            key: IptcKey::Name("Headline"),
            value: IptcValue::Single("good headline".into()),
        }]
    );

    // the scan itself still reports the broken record
    let results = scan::scan(&payload);
    assert_eq!(results.len(), 2);
    assert!(results[1].is_err());
}

/// The whole pipeline is a pure function of the segment bytes.
#[test]
fn pipeline_is_pure() {
    logger();

    let sample = make_app13_sample(
        &[0x00, 0x00, 0x00, 0x00, 0x00],
        &[record(80, b"someone"), record(25, b"x"), record(25, b"y")].concat(),
    );
    let view = SegmentView::new(&sample);

    let first = Iptc::from_segment(&view, 0, sample.len()).unwrap().unwrap();
    let second = Iptc::from_segment(&view, 0, sample.len()).unwrap().unwrap();
    assert_eq!(first, second);
}
