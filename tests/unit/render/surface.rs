use super::*;

#[test]
fn recording_surface_tracks_calls_in_order() {
    let mut s = RecordingSurface::new();
    s.save();
    s.translate(1.0, 2.0);
    s.scale(0.5, 0.5);
    s.set_fill(Rgba8::WHITE);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
    s.restore();

    assert_eq!(
        s.commands(),
        &[
            DrawCmd::Save,
            DrawCmd::Translate { dx: 1.0, dy: 2.0 },
            DrawCmd::Scale { sx: 0.5, sy: 0.5 },
            DrawCmd::SetFill {
                color: Rgba8::WHITE
            },
            DrawCmd::FillRect {
                x0: 0.0,
                y0: 0.0,
                x1: 4.0,
                y1: 4.0
            },
            DrawCmd::Restore,
        ]
    );
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn unmatched_restore_does_not_underflow() {
    let mut s = RecordingSurface::new();
    s.restore();
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn draw_cmds_serialize_with_op_tag() {
    let json = serde_json::to_string(&DrawCmd::Scale { sx: 2.0, sy: 3.0 }).unwrap();
    assert_eq!(json, r#"{"op":"scale","sx":2.0,"sy":3.0}"#);
}

#[test]
fn clear_resets_commands_and_depth() {
    let mut s = RecordingSurface::new();
    s.save();
    s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    s.clear();
    assert!(s.commands().is_empty());
    assert_eq!(s.save_depth(), 0);
    assert_eq!(s.filled_rects().count(), 0);
}
