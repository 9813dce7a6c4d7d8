use ndarray::s;

use crate::shared::frame::Frame;

/// Draws `overlay`, nearest-neighbour scaled to `size`, onto `target` with
/// its top-left at `origin`, using source-over compositing.
///
/// Only the part of the scaled rectangle that lands inside `target` is
/// sampled, so cost is bounded by the target regardless of `size`. RGB
/// overlays and targets are treated as opaque.
pub(crate) fn blit_scaled_source_over(
    target: &mut Frame,
    overlay: &Frame,
    size: (u32, u32),
    origin: (i64, i64),
) {
    let (sw, sh) = size;
    let (ox, oy) = origin;
    let x0 = ox.max(0);
    let y0 = oy.max(0);
    let x1 = ox.saturating_add(i64::from(sw)).min(i64::from(target.width()));
    let y1 = oy.saturating_add(i64::from(sh)).min(i64::from(target.height()));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let src = overlay.as_ndarray();
    let src_has_alpha = overlay.has_alpha();
    let (src_w, src_h) = (u64::from(overlay.width()), u64::from(overlay.height()));
    let dst_has_alpha = target.has_alpha();

    let mut view = target.as_ndarray_mut();
    let (row_start, row_end) = (y0 as usize, y1 as usize);
    let (col_start, col_end) = (x0 as usize, x1 as usize);
    let mut roi = view.slice_mut(s![row_start..row_end, col_start..col_end, ..]);
    let (rows, cols, _) = roi.dim();

    // Non-empty intersection bounds both offsets by the scaled size.
    let row_offset = (y0 - oy) as u64;
    let col_offset = (x0 - ox) as u64;

    for row in 0..rows {
        let sy = ((row_offset + row as u64) * src_h / u64::from(sh)) as usize;
        for col in 0..cols {
            let sx = ((col_offset + col as u64) * src_w / u64::from(sw)) as usize;
            let alpha = if src_has_alpha { src[[sy, sx, 3]] } else { 255 };
            let pixel = [src[[sy, sx, 0]], src[[sy, sx, 1]], src[[sy, sx, 2]], alpha];
            let mut dst = roi.slice_mut(s![row, col, ..]);
            let dst_pixel = dst.as_slice_mut().expect("pixel lane is contiguous");
            blend_pixel(dst_pixel, pixel, dst_has_alpha);
        }
    }
}

fn blend_pixel(dst: &mut [u8], src: [u8; 4], dst_has_alpha: bool) {
    let src_a = src[3];
    if src_a == 0 {
        return;
    }
    if src_a == 255 {
        dst[..3].copy_from_slice(&src[..3]);
        if dst_has_alpha {
            dst[3] = 255;
        }
        return;
    }

    let sa = f32::from(src_a) / 255.0;
    let da = if dst_has_alpha {
        f32::from(dst[3]) / 255.0
    } else {
        1.0
    };
    let out_a = sa + da * (1.0 - sa);
    for c in 0..3 {
        let s = f32::from(src[c]);
        let d = f32::from(dst[c]);
        let v = (s * sa + d * da * (1.0 - sa)) / out_a;
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    if dst_has_alpha {
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}
