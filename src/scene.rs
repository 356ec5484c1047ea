use crate::{
    canvas::Canvas,
    color::{self, Color},
    raster::{self, Shape},
};

/// 背景に使う不透明白の詰め込み値.
pub const WHITE: u32 = 0x00ff_ffff;

/// ランプ変換前のキャンバスで図形の外側を表す番兵値.
pub const OTHER_COLOR: f64 = 1.0;

/// `Paint` はピクセルに何を置くかの動作モードを表す.
#[derive(Debug, Clone)]
pub enum Paint {
    /// 24 ビット RGB をそのまま置き, 符号化時にはビット分解だけを行う.
    Packed {
        background: u32,
        shapes: Vec<(Shape, u32)>,
    },
    /// [0, 1] のスカラーを置き, 符号化前にランプで RGB へ写す.
    Ramped {
        background: f64,
        shapes: Vec<(Shape, f64)>,
    },
}

/// `Scene` は出力画像 1 枚の組み立て手順を表す.
///
/// キャンバス確保, 指定順の図形描画, モードに応じた色変換の順で流し,
/// 符号化器へ渡す row-major の RGB バイト列を作る.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub paint: Paint,
}

impl Scene {
    /// キャンバスを塗り上げて RGB バイト列 (1 ピクセル 3 バイト, R-G-B 順) にする.
    pub fn rasterize(&self) -> Vec<u8> {
        match &self.paint {
            Paint::Packed { background, shapes } => {
                let mut canvas = Canvas::with_init(self.width, self.height, *background);
                for &(shape, color) in shapes {
                    raster::draw(&mut canvas, shape, color);
                }
                to_rgb_bytes(&canvas, |&packed| Color::from_packed(packed))
            }
            Paint::Ramped { background, shapes } => {
                let mut canvas = Canvas::with_init(self.width, self.height, *background);
                for &(shape, value) in shapes {
                    raster::draw(&mut canvas, shape, value);
                }
                to_rgb_bytes(&canvas, |&value| color::ramp(value))
            }
        }
    }
}

fn to_rgb_bytes<T, F>(canvas: &Canvas<T>, to_color: F) -> Vec<u8>
where
    F: Fn(&T) -> Color,
{
    canvas
        .iter()
        .map(to_color)
        .flat_map(|c| [c.r, c.g, c.b])
        .collect()
}

#[cfg(test)]
mod tests;
