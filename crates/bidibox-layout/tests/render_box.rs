//! End-to-end behavior of `render_directional_box` against a recording
//! host surface.

mod common;

use bidibox_layout::{
    BoxOptions, Direction, FitStrategy, MeasuredBy, Overflow, RenderError, RenderPath,
    render_directional_box,
};
use bidibox_text::{DEFAULT_LTR_FONT, DEFAULT_RTL_FONT, SegmentOptions, segment_to_fragments};
use common::{Draw, RecordingSurface, UnknownFont};

const LONG_HEBREW: &str =
    "טקסט ארוך מאוד בעברית שצריך להתכווץ כדי להיכנס לתוך התיבה הקטנה הזאת";
const LATIN: &str = "The quick brown fox jumps over the lazy dog again and again";

fn shrink_box(width: f32, height: f32, size: f32) -> BoxOptions {
    BoxOptions::new((50.0, 700.0), width)
        .height(height)
        .size(size)
        .overflow(Overflow::ShrinkToFit)
        .min_font_size(6.0)
}

fn texts(draw: &[bidibox_text::Fragment]) -> Vec<&str> {
    draw.iter().map(|f| f.text.as_str()).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// Path selection
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn latin_text_uses_plain_text_box() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((10.0, 20.0), 300.0).height(100.0);
    let report = render_directional_box(&mut surface, "Hello \u{2014} world", &opts).unwrap();

    assert_eq!(report.path, RenderPath::Plain);
    assert_eq!(report.fragment_count, 0);
    assert!(report.fit.is_none());
    match &surface.draws[..] {
        [Draw::Plain { text, font, size, .. }] => {
            assert_eq!(text, "Hello - world");
            assert_eq!(font, DEFAULT_LTR_FONT);
            assert_eq!(*size, 12.0);
        }
        other => panic!("unexpected draws: {other:?}"),
    }
}

#[test]
fn latin_shrink_is_delegated_to_host() {
    let mut surface = RecordingSurface::new();
    let opts = shrink_box(120.0, 40.0, 16.0);
    let report = render_directional_box(&mut surface, LATIN, &opts).unwrap();

    assert_eq!(report.path, RenderPath::Plain);
    assert_eq!(surface.dry_runs.get(), 0);
    match &surface.draws[..] {
        [Draw::Plain { frame, .. }] => {
            assert_eq!(frame.overflow, Overflow::ShrinkToFit);
            assert_eq!(frame.min_font_size, Some(6.0));
        }
        other => panic!("unexpected draws: {other:?}"),
    }
}

#[test]
fn forced_rtl_direction_segments_latin_text() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), 300.0).direction(Direction::Rtl);
    let report = render_directional_box(&mut surface, "one two", &opts).unwrap();

    assert_eq!(report.path, RenderPath::Segmented);
    let (fragments, _, _) = surface.only_fragments();
    assert_eq!(texts(fragments), ["one ", "two "]);
}

#[test]
fn hebrew_content_segments_even_when_ltr_requested() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), 300.0).direction(Direction::Ltr);
    let report = render_directional_box(&mut surface, "שלום world", &opts).unwrap();
    assert_eq!(report.path, RenderPath::Segmented);
}

// ═════════════════════════════════════════════════════════════════════════
// Segmented rendering
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn hebrew_box_draws_reversed_fragments_once() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), 300.0).height(100.0).size(13.0);
    let report = render_directional_box(&mut surface, "שלום עולם!", &opts).unwrap();

    assert_eq!(report.font_size, 13.0);
    assert_eq!(report.fragment_count, 4);
    assert_eq!(surface.dry_runs.get(), 0);
    let (fragments, frame, transform) = surface.only_fragments();
    assert_eq!(texts(fragments), ["עולם", " ", "שלום", "!"]);
    assert_eq!(fragments[0].font, DEFAULT_RTL_FONT);
    assert_eq!(fragments[3].font, DEFAULT_LTR_FONT);
    assert!(fragments.iter().all(|f| f.size == 13.0));
    assert_eq!(frame.overflow, Overflow::None);
    assert!(transform.is_identity());
}

#[test]
fn truncate_is_passed_through() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), 300.0)
        .height(10.0)
        .overflow(Overflow::Truncate);
    render_directional_box(&mut surface, LONG_HEBREW, &opts).unwrap();
    let (_, frame, _) = surface.only_fragments();
    assert_eq!(frame.overflow, Overflow::Truncate);
    assert_eq!(surface.dry_runs.get(), 0);
}

#[test]
fn explicit_newlines_survive() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), 300.0);
    render_directional_box(&mut surface, "שורה ראשונה\nשורה שנייה\nשורה שלישית", &opts).unwrap();
    let (fragments, _, _) = surface.only_fragments();
    assert_eq!(fragments.iter().filter(|f| f.is_line_break()).count(), 2);
}

#[test]
fn rotation_and_spacing_wrap_only_the_commit() {
    let mut surface = RecordingSurface::new();
    let opts = shrink_box(200.0, 50.0, 14.0)
        .rotation(90.0)
        .character_spacing(1.5)
        .leading(2.0);
    render_directional_box(&mut surface, LONG_HEBREW, &opts).unwrap();

    assert!(surface.dry_runs.get() > 0);
    let (_, frame, transform) = surface.only_fragments();
    assert_eq!(transform.rotation, 90.0);
    assert_eq!(transform.character_spacing, 1.5);
    assert_eq!(transform.origin, (50.0, 700.0));
    assert_eq!(frame.leading, 2.0);
}

// ═════════════════════════════════════════════════════════════════════════
// Shrink-to-fit
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn long_hebrew_shrinks_to_the_largest_fitting_size() {
    let mut surface = RecordingSurface::new();
    let opts = shrink_box(200.0, 50.0, 14.0);
    let report = render_directional_box(&mut surface, LONG_HEBREW, &opts).unwrap();

    let fit = report.fit.expect("shrink search ran");
    assert!(fit.fitted);
    assert_eq!(fit.measured_by, MeasuredBy::DryRun);
    assert!(report.font_size < 14.0);
    assert!(report.font_size >= 6.0);

    let (fragments, frame, _) = surface.only_fragments();
    assert!(fragments.iter().all(|f| f.size == report.font_size));
    assert!(!surface.check(fragments, frame), "chosen size must fit");

    let larger = segment_to_fragments(
        LONG_HEBREW,
        &SegmentOptions::new(report.font_size + 0.5),
    );
    assert!(surface.check(&larger, frame), "one step larger must overflow");
}

#[test]
fn short_hebrew_keeps_its_size() {
    let mut surface = RecordingSurface::new();
    let report =
        render_directional_box(&mut surface, "טקסט קצר", &shrink_box(200.0, 50.0, 14.0)).unwrap();
    assert_eq!(report.font_size, 14.0);
    assert_eq!(report.fit.map(|f| f.candidates_tried), Some(1));
}

#[test]
fn falls_back_to_min_font_size_when_nothing_fits() {
    let mut surface = RecordingSurface::new();
    let report =
        render_directional_box(&mut surface, "שלום עולם", &shrink_box(10.0, 10.0, 9.0)).unwrap();
    let fit = report.fit.unwrap();
    assert!(!fit.fitted);
    assert_eq!(report.font_size, 6.0);
    assert_eq!(fit.candidates_tried, 7);
    assert_eq!(surface.draws.len(), 1);
}

#[test]
fn default_min_font_size_is_five() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), 1.0)
        .height(1.0)
        .size(6.0)
        .overflow(Overflow::ShrinkToFit);
    let report = render_directional_box(&mut surface, "שלום", &opts).unwrap();
    assert_eq!(report.font_size, 5.0);
}

#[test]
fn shrink_without_height_renders_at_initial_size() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), 10.0)
        .size(14.0)
        .overflow(Overflow::ShrinkToFit);
    let report = render_directional_box(&mut surface, LONG_HEBREW, &opts).unwrap();
    assert!(report.fit.is_none());
    assert_eq!(report.font_size, 14.0);
    assert_eq!(surface.dry_runs.get(), 0);
}

#[test]
fn approximates_without_dry_run_capability() {
    let mut surface = RecordingSurface::without_dry_run();
    let opts = shrink_box(60.0, 100.0, 20.0);
    let report = render_directional_box(&mut surface, "שלום עולם", &opts).unwrap();

    let fit = report.fit.unwrap();
    assert_eq!(fit.measured_by, MeasuredBy::Approximate);
    // 9 columns * 0.5 * size <= 0.95 * 60 first holds at 12.5
    assert_eq!(report.font_size, 12.5);
    assert!(surface.measures.get() > 0);
    assert_eq!(surface.dry_runs.get(), 0);
}

#[test]
fn approximate_strategy_can_be_forced() {
    let mut surface = RecordingSurface::new();
    let opts = shrink_box(60.0, 100.0, 20.0).strategy(FitStrategy::Approximate);
    let report = render_directional_box(&mut surface, "שלום עולם", &opts).unwrap();
    assert_eq!(report.font_size, 12.5);
    assert_eq!(surface.dry_runs.get(), 0);
}

#[test]
fn native_and_dry_run_paths_agree_for_latin_text() {
    for (width, height, size) in [(120.0, 40.0, 16.0), (200.0, 50.0, 14.0), (80.0, 90.0, 20.0)] {
        let mut native = RecordingSurface::new();
        render_directional_box(&mut native, LATIN, &shrink_box(width, height, size)).unwrap();
        let native_size = match &native.draws[..] {
            [Draw::Plain { size, .. }] => *size,
            other => panic!("unexpected draws: {other:?}"),
        };

        let mut forced = RecordingSurface::new();
        let opts = shrink_box(width, height, size)
            .direction(Direction::Rtl)
            .strategy(FitStrategy::DryRun);
        let report = render_directional_box(&mut forced, LATIN, &opts).unwrap();

        assert_eq!(report.path, RenderPath::Segmented);
        assert!(
            (report.font_size - native_size).abs() <= 0.5,
            "box {width}x{height}: native {native_size} vs dry-run {}",
            report.font_size
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Errors
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn invalid_options_fail_before_any_host_call() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), -1.0);
    let err = render_directional_box(&mut surface, "שלום", &opts).unwrap_err();
    assert!(matches!(err, RenderError::InvalidOptions(_)));
    assert!(surface.draws.is_empty());
    assert_eq!(surface.dry_runs.get(), 0);
}

#[test]
fn unregistered_font_is_propagated_from_trial_layout() {
    let mut surface = RecordingSurface::missing_font(DEFAULT_RTL_FONT);
    let err = render_directional_box(&mut surface, LONG_HEBREW, &shrink_box(200.0, 50.0, 14.0))
        .unwrap_err();
    match err {
        RenderError::Surface(UnknownFont(font)) => assert_eq!(font, DEFAULT_RTL_FONT),
        other => panic!("unexpected error: {other}"),
    }
    assert!(surface.draws.is_empty());
}

#[test]
fn unregistered_font_is_propagated_from_commit() {
    let mut surface = RecordingSurface::missing_font("David");
    let opts = BoxOptions::new((0.0, 0.0), 100.0)
        .fonts(bidibox_text::FontPair::new("David", DEFAULT_LTR_FONT));
    let err = render_directional_box(&mut surface, "שלום", &opts).unwrap_err();
    assert_eq!(err.surface_error().map(|e| e.0.as_str()), Some("David"));
}

#[test]
fn empty_text_draws_nothing_visible() {
    let mut surface = RecordingSurface::new();
    let opts = BoxOptions::new((0.0, 0.0), 100.0).direction(Direction::Rtl);
    let report = render_directional_box(&mut surface, "\u{200F}", &opts).unwrap();
    assert_eq!(report.fragment_count, 0);
    let (fragments, _, _) = surface.only_fragments();
    assert!(fragments.is_empty());
}
