use super::{Paint, Scene, OTHER_COLOR, WHITE};
use crate::{color::Color, raster::Shape};
use rand::prelude::*;

fn pixel(rgb: &[u8], width: u32, col: u32, row: u32) -> Color {
    let index = ((row * width + col) * 3) as usize;
    Color {
        r: rgb[index],
        g: rgb[index + 1],
        b: rgb[index + 2],
    }
}

#[test]
fn every_pixel_is_initialized() {
    let scene = Scene {
        width: 13,
        height: 7,
        paint: Paint::Packed {
            background: WHITE,
            shapes: vec![],
        },
    };
    let rgb = scene.rasterize();

    assert_eq!(rgb.len(), 13 * 7 * 3);
    assert!(rgb.iter().all(|&byte| byte == 0xff));
}

#[test]
fn two_circles_make_an_annulus() {
    let (radius, thickness) = (8.0, 4.0);
    let scene = Scene {
        width: 20,
        height: 20,
        paint: Paint::Packed {
            background: WHITE,
            shapes: vec![
                (
                    Shape::Circle {
                        x0: 10.0,
                        y0: 10.0,
                        radius,
                    },
                    0xcc2200,
                ),
                (
                    Shape::Circle {
                        x0: 10.0,
                        y0: 10.0,
                        radius: radius - thickness,
                    },
                    WHITE,
                ),
            ],
        },
    };
    let rgb = scene.rasterize();

    let ring = Color::from_packed(0xcc2200);
    let background = Color::from_packed(WHITE);
    // distance R - T/2 = 6 lands on the ring, R - T - 1 = 3 in the hole
    assert_eq!(pixel(&rgb, 20, 16, 10), ring);
    assert_eq!(pixel(&rgb, 20, 13, 10), background);
    // the outer boundary at distance R is still part of the ring
    assert_eq!(pixel(&rgb, 20, 18, 10), ring);
    assert_eq!(pixel(&rgb, 20, 19, 10), background);
}

#[test]
fn ramped_background_sentinel_maps_through_the_ramp() {
    let scene = Scene {
        width: 4,
        height: 4,
        paint: Paint::Ramped {
            background: OTHER_COLOR,
            shapes: vec![(
                Shape::Square {
                    x0: 1.0,
                    y0: 1.0,
                    side_length: 1.0,
                },
                0.0,
            )],
        },
    };
    let rgb = scene.rasterize();

    // the sentinel 1.0 maps to the top of the ramp
    assert_eq!(
        pixel(&rgb, 4, 0, 0),
        Color {
            r: 255,
            g: 0,
            b: 255
        }
    );
    assert_eq!(pixel(&rgb, 4, 1, 1), Color { r: 0, g: 0, b: 0 });
}

#[test]
fn draw_order_is_last_write_wins() {
    // fixed rng for stabilize test results
    let mut rng = StdRng::seed_from_u64(1);
    let shapes: Vec<(Shape, u32)> = (0..8)
        .map(|_| {
            let shape = Shape::Square {
                x0: rng.gen_range(0.0..12.0),
                y0: rng.gen_range(0.0..12.0),
                side_length: rng.gen_range(1.0..6.0),
            };
            (shape, rng.gen_range(0u32..=0xff_ffff))
        })
        .collect();

    let scene = Scene {
        width: 16,
        height: 16,
        paint: Paint::Packed {
            background: WHITE,
            shapes: shapes.clone(),
        },
    };
    let rgb = scene.rasterize();

    for row in 0..16u32 {
        for col in 0..16u32 {
            // the latest shape containing the pixel decides its color
            let expected = shapes
                .iter()
                .rev()
                .find(|(shape, _)| shape.contains(col as f64, row as f64))
                .map_or(WHITE, |&(_, color)| color);
            assert_eq!(
                pixel(&rgb, 16, col, row),
                Color::from_packed(expected),
                "wrong pixel at ({}, {})",
                col,
                row
            );
        }
    }
}
