use super::*;
use crate::config::BACKGROUND;
use crate::foundation::core::Canvas;

fn small_config() -> StageConfig {
    StageConfig {
        viewport: Canvas {
            width: 120,
            height: 40,
        },
        ..StageConfig::default()
    }
}

#[test]
fn one_click_renders_one_frame_per_tick_plus_final() {
    let mut indices = Vec::new();
    let stats = render_interactions(small_config(), 1, |idx, frame| {
        assert_eq!((frame.width, frame.height), (120, 40));
        indices.push(idx.0);
        Ok(())
    })
    .unwrap();

    assert_eq!(stats.clicks, 1);
    assert_eq!(stats.segments_completed, 1);
    assert_eq!(stats.frames_rendered, 21);
    assert_eq!(indices, (0..21).collect::<Vec<_>>());
}

#[test]
fn zero_clicks_renders_only_the_settled_frame() {
    let mut frames = Vec::new();
    let stats = render_interactions(small_config(), 0, |_, frame| {
        frames.push(frame);
        Ok(())
    })
    .unwrap();
    assert_eq!(stats.frames_rendered, 1);

    let bg = BACKGROUND.to_premul_bytes();
    assert!(frames[0].data.chunks_exact(4).all(|px| px == bg));
}

#[test]
fn sink_errors_abort_the_run() {
    let err = render_interactions(small_config(), 2, |_, _| {
        Err(StepmoreError::render("sink full"))
    })
    .unwrap_err();
    assert!(err.to_string().contains("sink full"));
}

#[test]
fn invalid_config_is_rejected() {
    let config = StageConfig {
        viewport: Canvas {
            width: 0,
            height: 10,
        },
        ..StageConfig::default()
    };
    assert!(Session::new(config).is_err());
}

#[test]
fn session_settle_counts_ticks_and_stops_timers() {
    let mut session = Session::new(small_config()).unwrap();
    let mut scratch = crate::render::surface::RecordingSurface::new();
    assert!(session.press());
    assert_eq!(session.settle(&mut scratch), 20);
    assert_eq!(session.timers().active_count(), 0);
    assert_eq!(session.timers().now(), std::time::Duration::from_millis(1000));
    assert_eq!(session.stage().sequence().current_index(), 1);
}

#[test]
fn write_png_rejects_short_frames() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 4],
        premultiplied: true,
    };
    let path = std::env::temp_dir().join("stepmore_short_frame.png");
    assert!(write_png(&path, &frame).is_err());
}
