use super::*;

const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Canvas {
        width: w,
        height: h,
    })
    .unwrap()
}

#[test]
fn rejects_empty_and_oversized_surfaces() {
    assert!(
        CpuSurface::new(Canvas {
            width: 0,
            height: 4
        })
        .is_err()
    );
    assert!(
        CpuSurface::new(Canvas {
            width: 100_000,
            height: 4
        })
        .is_err()
    );
}

#[test]
fn untouched_surface_is_transparent() {
    let frame = surface(8, 8).finish();
    assert_eq!(frame.data.len(), 8 * 8 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn fill_rect_covers_pixels() {
    let mut s = surface(16, 16);
    s.set_fill(RED);
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0));
    let frame = s.finish();
    assert_eq!(frame.pixel(8, 8), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(0, 15), Some([255, 0, 0, 255]));
}

#[test]
fn translate_and_scale_compose() {
    let mut s = surface(16, 16);
    s.set_fill(RED);
    s.translate(8.0, 8.0);
    s.scale(2.0, 2.0);
    s.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
    let frame = s.finish();

    assert_eq!(frame.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(4, 4), Some([0, 0, 0, 0]));
}

#[test]
fn restore_reverts_transform_and_fill() {
    let mut s = surface(16, 16);
    s.set_fill(BLUE);
    s.save();
    s.set_fill(RED);
    s.translate(8.0, 0.0);
    s.restore();
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
    let frame = s.finish();

    assert_eq!(frame.pixel(1, 1), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(9, 1), Some([0, 0, 0, 0]));
}

#[test]
fn zero_scale_draws_nothing() {
    let mut s = surface(8, 8);
    s.set_fill(RED);
    s.translate(4.0, 4.0);
    s.scale(0.0, 0.0);
    s.fill_rect(Rect::new(-4.0, -4.0, 4.0, 4.0));
    let frame = s.finish();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn extra_restore_is_ignored() {
    let mut s = surface(4, 4);
    s.restore();
    s.set_fill(RED);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
    assert_eq!(s.finish().pixel(2, 2), Some([255, 0, 0, 255]));
}
