//! Тест поиска миниатюры по времени

use crate::track::{Cue, ImageDescriptor, Track};

fn image(name: &str) -> ImageDescriptor {
    ImageDescriptor {
        url: format!("https://cdn.example.com/{}", name),
        crop: None,
    }
}

fn two_cue_track() -> Track {
    Track::new(vec![
        Cue::new(0.0, 5.0, image("first.jpg")),
        Cue::new(5.0, 10.0, image("second.jpg")),
    ])
}

#[test]
fn test_half_open_boundaries() {
    let track = two_cue_track();

    assert_eq!(track.resolve(0.0), Some(&image("first.jpg")));
    assert_eq!(track.resolve(4.999), Some(&image("first.jpg")));
    assert_eq!(track.resolve(5.0), Some(&image("second.jpg")));
    assert_eq!(track.resolve(9.999), Some(&image("second.jpg")));
    assert_eq!(track.resolve(10.0), None);
    assert_eq!(track.resolve(-1.0), None);
    assert_eq!(track.resolve(f64::NAN), None);
}

#[test]
fn test_empty_track_never_resolves() {
    let track = Track::empty();
    for time in [-1.0, 0.0, 0.5, 1e9] {
        assert_eq!(track.resolve(time), None);
    }
}

#[test]
fn test_gap_between_cues() {
    let track = Track::new(vec![
        Cue::new(0.0, 2.0, image("a.jpg")),
        Cue::new(4.0, 6.0, image("b.jpg")),
    ]);

    assert!(track.is_sorted());
    assert_eq!(track.resolve(3.0), None);
    assert_eq!(track.resolve(4.0), Some(&image("b.jpg")));
}

#[test]
fn test_overlapping_cues_first_match_wins() {
    let track = Track::new(vec![
        Cue::new(0.0, 10.0, image("wide.jpg")),
        Cue::new(2.0, 4.0, image("narrow.jpg")),
    ]);

    assert!(!track.is_sorted());
    assert_eq!(track.resolve(3.0), Some(&image("wide.jpg")));
}

#[test]
fn test_out_of_order_cues_first_match_wins() {
    let track = Track::new(vec![
        Cue::new(5.0, 10.0, image("later.jpg")),
        Cue::new(0.0, 5.0, image("earlier.jpg")),
        Cue::new(0.0, 8.0, image("shadowed.jpg")),
    ]);

    assert!(!track.is_sorted());
    assert_eq!(track.resolve(1.0), Some(&image("earlier.jpg")));
    assert_eq!(track.resolve(6.0), Some(&image("later.jpg")));
}

#[test]
fn test_binary_and_linear_lookup_agree() {
    let cues: Vec<Cue> = (0..200)
        .map(|i| {
            let start = i as f64 * 2.0;
            // Каждая третья реплика короче, чтобы появились разрывы
            let end = if i % 3 == 0 { start + 1.5 } else { start + 2.0 };
            Cue::new(start, end, image(&format!("{}.jpg", i)))
        })
        .collect();
    let track = Track::new(cues);
    assert!(track.is_sorted());

    let mut time = -1.0;
    while time < 402.0 {
        assert_eq!(track.resolve(time), track.resolve_linear(time), "time {}", time);
        time += 0.25;
    }
}
