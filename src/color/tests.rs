use super::{ramp, Color};

#[test]
fn unpack_is_exact() {
    let color = Color::from_packed(0x00cc_2200);
    assert_eq!(
        color,
        Color {
            r: 0xcc,
            g: 0x22,
            b: 0x00
        }
    );
    assert_eq!(color.to_packed(), 0xcc_2200);

    // the top byte does not participate
    assert_eq!(
        Color::from_packed(0xff04_08ff),
        Color::from_packed(0x0004_08ff)
    );
}

#[test]
fn ramp_endpoints_and_midpoint() {
    assert_eq!(ramp(0.0), Color { r: 0, g: 0, b: 0 });
    // 0.5 * 767 = 383.5 truncates to 383, offset 127, second segment
    assert_eq!(
        ramp(0.5),
        Color {
            r: 0,
            g: 127,
            b: 128
        }
    );
    // the last segment keeps blue pinned at 255
    assert_eq!(
        ramp(1.0),
        Color {
            r: 255,
            g: 0,
            b: 255
        }
    );
}

#[test]
fn ramp_segment_boundaries() {
    // 255 -> 256 is continuous
    assert_eq!(ramp(255.5 / 767.0), Color { r: 0, g: 0, b: 255 });
    assert_eq!(ramp(256.5 / 767.0), Color { r: 0, g: 0, b: 255 });
    // 511 -> 512 jumps in blue because the third segment pins it
    assert_eq!(
        ramp(511.5 / 767.0),
        Color {
            r: 0,
            g: 255,
            b: 0
        }
    );
    assert_eq!(
        ramp(512.5 / 767.0),
        Color {
            r: 0,
            g: 255,
            b: 255
        }
    );
}

#[test]
fn ramp_clamps_out_of_range() {
    assert_eq!(ramp(-1.0), Color { r: 0, g: 0, b: 0 });
    assert_eq!(
        ramp(2.0),
        Color {
            r: 255,
            g: 0,
            b: 255
        }
    );
}
