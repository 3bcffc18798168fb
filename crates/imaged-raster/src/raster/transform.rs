// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel transforms — brightness reduction, channel isolation, circle
// annotation and resize. Brightness and circle mutate in place; isolation and
// resize return a new raster.

use image::imageops::{self, FilterType};
use std::ops::RangeInclusive;

use image::{ImageBuffer, Pixel, Rgb, Rgba};
use imaged_core::config::{BrightnessOverflow, CircleStyle, ResizeFilter};
use imaged_core::error::{ImagedError, Result};
use imaged_core::types::Channel;
use imageproc::map;
use tracing::{debug, info, instrument, warn};

use super::buffer::{Pixels, Raster, buffer_len};

impl Raster {
    /// Subtract `amount` from every channel of every pixel, saturating at 0.
    ///
    /// Alpha, when present, is reduced too. Amounts above 255 follow
    /// `overflow`: `Ignore` leaves the raster untouched, `Clamp` applies the
    /// maximum reduction. Returns whether the reduction was applied.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn decrease_brightness(&mut self, amount: u32, overflow: BrightnessOverflow) -> bool {
        let amount = match u8::try_from(amount) {
            Ok(amount) => amount,
            Err(_) => match overflow {
                BrightnessOverflow::Ignore => {
                    warn!(amount, "brightness reduction above 255 ignored");
                    return false;
                }
                BrightnessOverflow::Clamp => u8::MAX,
            },
        };

        info!(amount, "Decreasing brightness");
        for sample in self.samples_mut() {
            *sample = sample.saturating_sub(amount);
        }
        true
    }

    /// Build a new RGB raster keeping only `channel`; the other two are zero.
    ///
    /// The source raster is not modified. Alpha is dropped.
    #[instrument(skip(self), fields(channel = channel.label()))]
    pub fn isolate_channel(&self, channel: Channel) -> Raster {
        let rgb = self.rgb_view();
        let isolated = match channel {
            Channel::Red => map::as_red_channel(&map::red_channel(&*rgb)),
            Channel::Green => map::as_green_channel(&map::green_channel(&*rgb)),
            Channel::Blue => map::as_blue_channel(&map::blue_channel(&*rgb)),
        };
        debug!("Channel isolated");
        Raster::from_rgb(isolated)
    }

    /// Draw an unfilled circle centred on `(center_x, center_y)`.
    ///
    /// The outline fills the bounding box `[(cx - r, cy - r), (cx + r, cy + r)]`
    /// and the stroke grows inward from it. Parts outside the raster are
    /// clipped. A radius of zero or less is rejected.
    #[instrument(skip(self, style))]
    pub fn draw_circle(
        &mut self,
        center_x: i64,
        center_y: i64,
        radius: i64,
        style: &CircleStyle,
    ) -> Result<()> {
        if radius <= 0 {
            return Err(ImagedError::InvalidRadius(radius));
        }
        if style.stroke_width == 0 {
            return Ok(());
        }

        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Ok(());
        }

        // Clip the bounding box to the raster.
        let x0 = center_x.saturating_sub(radius).max(0);
        let y0 = center_y.saturating_sub(radius).max(0);
        let x1 = center_x.saturating_add(radius).min(i64::from(width) - 1);
        let y1 = center_y.saturating_add(radius).min(i64::from(height) - 1);
        if x0 > x1 || y0 > y1 {
            debug!("Circle lies outside the raster");
            return Ok(());
        }

        let outer = radius as f64 + 0.5;
        let inner = (outer - f64::from(style.stroke_width)).max(0.0);
        let (outer_sq, inner_sq) = (outer * outer, inner * inner);
        let [r, g, b] = style.color;

        let on_stroke = |x: u32, y: u32| {
            let dx = (i64::from(x) - center_x) as f64;
            let dy = (i64::from(y) - center_y) as f64;
            let dist_sq = dx * dx + dy * dy;
            dist_sq <= outer_sq && (inner == 0.0 || dist_sq > inner_sq)
        };
        // The box is clipped to the raster, so the casts are lossless.
        let (xs, ys) = (x0 as u32..=x1 as u32, y0 as u32..=y1 as u32);
        let painted = match &mut self.pixels {
            Pixels::Rgb(img) => paint_where(img, xs, ys, Rgb([r, g, b]), on_stroke),
            Pixels::Rgba(img) => paint_where(img, xs, ys, Rgba([r, g, b, u8::MAX]), on_stroke),
        };

        info!(painted, "Circle drawn");
        Ok(())
    }

    /// Resample to exactly `new_width` x `new_height`, ignoring aspect ratio.
    ///
    /// Both dimensions must be positive, and the resulting buffer must stay
    /// within `MAX_BUFFER_BYTES`.
    #[instrument(skip(self), fields(from_w = self.width(), from_h = self.height()))]
    pub fn resize(&self, new_width: i64, new_height: i64, filter: ResizeFilter) -> Result<Raster> {
        let invalid = || ImagedError::InvalidSize {
            width: new_width,
            height: new_height,
        };
        if new_width <= 0 || new_height <= 0 {
            return Err(invalid());
        }
        let width = u32::try_from(new_width).map_err(|_| invalid())?;
        let height = u32::try_from(new_height).map_err(|_| invalid())?;
        if buffer_len(width, height, self.channel_count()).is_none() {
            warn!(width, height, "resize target exceeds the buffer limit");
            return Err(invalid());
        }

        let filter = match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Bilinear => FilterType::Triangle,
        };
        info!(width, height, ?filter, "Resizing image");

        let pixels = match &self.pixels {
            Pixels::Rgb(img) => Pixels::Rgb(imageops::resize(img, width, height, filter)),
            Pixels::Rgba(img) => Pixels::Rgba(imageops::resize(img, width, height, filter)),
        };
        Ok(Raster { pixels })
    }
}

/// Set `color` on every pixel of the `xs` x `ys` box where `on_stroke` holds.
/// Returns the number of pixels painted.
fn paint_where<P: Pixel>(
    img: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    xs: RangeInclusive<u32>,
    ys: RangeInclusive<u32>,
    color: P,
    on_stroke: impl Fn(u32, u32) -> bool,
) -> usize {
    let mut painted = 0;
    for y in ys {
        for x in xs.clone() {
            if on_stroke(x, y) {
                img.put_pixel(x, y, color);
                painted += 1;
            }
        }
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage};

    /// 3x2 raster with distinct values in every channel.
    fn sample_raster() -> Raster {
        let mut img = RgbImage::new(3, 2);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let base = (y * 3 + x) as u8 * 40;
            *pixel = Rgb([base, base.wrapping_add(10), base.wrapping_add(200)]);
        }
        Raster::from_rgb(img)
    }

    // -- Brightness -----------------------------------------------------------

    #[test]
    fn brightness_subtracts_and_saturates() {
        let original = sample_raster();
        let mut raster = original.clone();

        assert!(raster.decrease_brightness(50, BrightnessOverflow::Ignore));

        assert_eq!(raster.dimensions(), original.dimensions());
        assert_eq!(raster.channel_count(), 3);
        for (after, before) in raster.as_bytes().iter().zip(original.as_bytes()) {
            assert_eq!(*after, before.saturating_sub(50));
        }
    }

    #[test]
    fn brightness_of_zero_leaves_pixels_alone() {
        let original = sample_raster();
        let mut raster = original.clone();
        raster.decrease_brightness(0, BrightnessOverflow::Ignore);
        assert_eq!(raster, original);
    }

    #[test]
    fn brightness_of_255_blacks_out_everything() {
        let mut raster = Raster::filled(4, 4, [255, 128, 3]);
        raster.decrease_brightness(255, BrightnessOverflow::Ignore);
        assert!(raster.as_bytes().iter().all(|&v| v == 0));
    }

    #[test]
    fn brightness_above_255_is_ignored_by_default() {
        let original = sample_raster();
        let mut raster = original.clone();
        assert!(!raster.decrease_brightness(256, BrightnessOverflow::Ignore));
        assert_eq!(raster, original);
    }

    #[test]
    fn brightness_above_255_clamps_when_configured() {
        let mut raster = sample_raster();
        assert!(raster.decrease_brightness(1000, BrightnessOverflow::Clamp));
        assert!(raster.as_bytes().iter().all(|&v| v == 0));
    }

    #[test]
    fn brightness_reduces_alpha_too() {
        let mut raster = Raster::from_rgba(RgbaImage::from_pixel(1, 1, Rgba([100, 100, 100, 255])));
        raster.decrease_brightness(55, BrightnessOverflow::Ignore);
        assert_eq!(raster.pixel(0, 0), Some(&[45u8, 45, 45, 200][..]));
        assert_eq!(raster.channel_count(), 4);
    }

    // -- Channel isolation ----------------------------------------------------

    #[test]
    fn isolation_keeps_selected_plane_only() {
        let source = sample_raster();
        let snapshot = source.clone();

        for channel in Channel::ALL {
            let isolated = source.isolate_channel(channel);
            assert_eq!(isolated.channel_count(), 3);
            assert_eq!(isolated.dimensions(), source.dimensions());

            for y in 0..source.height() {
                for x in 0..source.width() {
                    let src = source.pixel(x, y).unwrap();
                    let out = isolated.pixel(x, y).unwrap();
                    for c in 0..3 {
                        if c == channel.index() {
                            assert_eq!(out[c], src[c]);
                        } else {
                            assert_eq!(out[c], 0);
                        }
                    }
                }
            }
        }
        assert_eq!(source, snapshot, "isolation must not mutate the source");
    }

    #[test]
    fn isolation_of_rgba_drops_alpha() {
        let source = Raster::from_rgba(RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4])));
        let isolated = source.isolate_channel(Channel::Blue);
        assert_eq!(isolated.channel_count(), 3);
        assert_eq!(isolated.pixel(1, 1), Some(&[0u8, 0, 3][..]));
    }

    // -- Circle ---------------------------------------------------------------

    #[test]
    fn circle_outline_is_red_and_hollow() {
        let mut raster = Raster::filled(41, 41, [0, 0, 0]);
        raster
            .draw_circle(20, 20, 15, &CircleStyle::default())
            .unwrap();

        // Bounding-box extremes lie on the outline.
        assert_eq!(raster.pixel(35, 20), Some(&[255u8, 0, 0][..]));
        assert_eq!(raster.pixel(5, 20), Some(&[255u8, 0, 0][..]));
        assert_eq!(raster.pixel(20, 35), Some(&[255u8, 0, 0][..]));
        assert_eq!(raster.pixel(20, 5), Some(&[255u8, 0, 0][..]));
        // Stroke is two pixels wide, growing inward.
        assert_eq!(raster.pixel(34, 20), Some(&[255u8, 0, 0][..]));
        assert_eq!(raster.pixel(33, 20), Some(&[0u8, 0, 0][..]));
        // Outside the box and the centre stay untouched.
        assert_eq!(raster.pixel(36, 20), Some(&[0u8, 0, 0][..]));
        assert_eq!(raster.pixel(20, 20), Some(&[0u8, 0, 0][..]));
    }

    #[test]
    fn circle_entirely_outside_is_a_no_op() {
        let original = sample_raster();
        let mut raster = original.clone();
        raster
            .draw_circle(-100, -100, 10, &CircleStyle::default())
            .unwrap();
        raster
            .draw_circle(5_000, 20, 30, &CircleStyle::default())
            .unwrap();
        assert_eq!(raster, original);
    }

    #[test]
    fn circle_enclosing_the_raster_is_a_no_op() {
        let original = Raster::filled(10, 10, [9, 9, 9]);
        let mut raster = original.clone();
        raster
            .draw_circle(5, 5, 500, &CircleStyle::default())
            .unwrap();
        assert_eq!(raster, original);
    }

    #[test]
    fn circle_partially_outside_is_clipped() {
        let mut raster = Raster::filled(10, 10, [0, 0, 0]);
        raster.draw_circle(0, 0, 5, &CircleStyle::default()).unwrap();
        assert_eq!(raster.pixel(5, 0), Some(&[255u8, 0, 0][..]));
        assert_eq!(raster.pixel(0, 5), Some(&[255u8, 0, 0][..]));
        assert_eq!(raster.pixel(0, 0), Some(&[0u8, 0, 0][..]));
    }

    #[test]
    fn circle_with_non_positive_radius_is_rejected() {
        let original = sample_raster();
        let mut raster = original.clone();
        for radius in [0, -4] {
            let err = raster
                .draw_circle(1, 1, radius, &CircleStyle::default())
                .unwrap_err();
            assert!(matches!(err, ImagedError::InvalidRadius(r) if r == radius));
        }
        assert_eq!(raster, original);
    }

    #[test]
    fn circle_on_rgba_is_opaque() {
        let mut raster = Raster::from_rgba(RgbaImage::new(11, 11));
        let style = CircleStyle {
            color: [0, 255, 0],
            stroke_width: 1,
        };
        raster.draw_circle(5, 5, 5, &style).unwrap();
        assert_eq!(raster.pixel(10, 5), Some(&[0u8, 255, 0, 255][..]));
    }

    // -- Resize ---------------------------------------------------------------

    #[test]
    fn resize_reports_requested_dimensions() {
        let source = sample_raster();
        for filter in [ResizeFilter::Nearest, ResizeFilter::Bilinear] {
            let resized = source.resize(7, 5, filter).unwrap();
            assert_eq!(resized.dimensions(), (7, 5));
            assert_eq!(resized.channel_count(), source.channel_count());
        }
        assert_eq!(source.dimensions(), (3, 2));
    }

    #[test]
    fn resize_rejects_non_positive_dimensions() {
        let source = sample_raster();
        for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3)] {
            let err = source.resize(w, h, ResizeFilter::Bilinear).unwrap_err();
            assert!(matches!(
                err,
                ImagedError::InvalidSize { width, height } if width == w && height == h
            ));
        }
    }

    #[test]
    fn resize_rejects_dimensions_beyond_u32() {
        let source = sample_raster();
        assert!(source
            .resize(i64::from(u32::MAX) + 1, 1, ResizeFilter::Nearest)
            .is_err());
    }

    #[test]
    fn resize_rejects_targets_beyond_the_buffer_limit() {
        let source = sample_raster();
        let huge = i64::from(u32::MAX);
        for (w, h) in [(huge, huge), (1 << 16, 1 << 16), (huge, 1)] {
            let err = source.resize(w, h, ResizeFilter::Nearest).unwrap_err();
            assert!(matches!(
                err,
                ImagedError::InvalidSize { width, height } if width == w && height == h
            ));
        }
        // One column past the limit for a single-row RGB raster.
        let widest = (crate::raster::MAX_BUFFER_BYTES / 3) as i64;
        assert!(source.resize(widest + 1, 1, ResizeFilter::Nearest).is_err());
    }

    #[test]
    fn nearest_upscale_of_uniform_raster_is_uniform() {
        let source = Raster::filled(2, 2, [10, 20, 30]);
        let resized = source.resize(6, 6, ResizeFilter::Nearest).unwrap();
        assert!(resized.as_bytes().chunks(3).all(|p| p == [10, 20, 30]));
    }
}
