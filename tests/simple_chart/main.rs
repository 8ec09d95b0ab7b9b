use midichart::prelude::*;
use pretty_assertions::assert_eq;

const SIMPLE: &[u8] = include_bytes!("./simple.mid");

#[test]
fn test_parse() {
    let chart = Chart::parse(SIMPLE).unwrap();

    assert_eq!(*chart.header(), Header::new(1, 2, 480));
    assert_eq!(chart.header().format_type(), Some(FormatType::Simultaneous));
    assert!(chart.failures().is_empty());

    use NoteKind::*;
    assert_eq!(
        chart.notes(),
        [
            NoteEvent::new(0, 60, Normal),
            NoteEvent::new(500, 62, LongStart),
            NoteEvent::new(1000, 62, LongEnd),
            NoteEvent::new(1500, 64, Normal),
            NoteEvent::new(2000, 65, LongStart),
            NoteEvent::new(2250, 65, LongEnd),
            NoteEvent::new(2500, 67, Normal),
        ]
    );
}

#[test]
fn test_tempo_changes() {
    let chart = Chart::parse(SIMPLE).unwrap();
    let tempos = chart.tempos();

    assert_eq!(tempos.len(), 2);
    tempo(&tempos[0], 0, 120., 1.041_666_666);
    tempo(&tempos[1], 2000, 240., 0.520_833_333);
}

#[test]
fn test_stop_at_end_of_track_is_equivalent() {
    let options = LoadOptions::default().stop_at_end_of_track(true);
    assert_eq!(
        Chart::parse_with(SIMPLE, &options).unwrap(),
        Chart::parse(SIMPLE).unwrap()
    );
}

#[test]
fn test_raw_tracks() {
    let mut reader = Reader::from_byte_slice(SIMPLE);
    let header = read_header_chunk(&mut reader).unwrap();

    let conductor = read_track_chunk(&mut reader).unwrap();
    let lanes = read_track_chunk(&mut reader).unwrap();
    assert!(reader.is_at_end());

    let mut events = TrackEvents::default();
    decode_track(conductor.data(), header.division, &mut events).unwrap();
    assert!(events.notes.is_empty());
    assert_eq!(
        events.tempos.iter().map(|t| t.time).collect::<Vec<_>>(),
        [0, 1920]
    );

    let mut events = TrackEvents::default();
    decode_track(lanes.data(), header.division, &mut events).unwrap();
    assert_eq!(
        events.notes.iter().map(|n| n.time).collect::<Vec<_>>(),
        [0, 480, 960, 1440, 1920, 2400, 2880]
    );
}

fn tempo(t: &TempoEvent, time: i64, bpm: f64, tick_duration_ms: f64) {
    assert_eq!(t.time, time);
    assert_eq!(t.bpm, bpm);
    assert!(
        (t.tick_duration_ms - tick_duration_ms).abs() < 1e-6,
        "{} != {}",
        t.tick_duration_ms,
        tick_duration_ms
    );
}
