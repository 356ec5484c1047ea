use crate::canvas::Canvas;

/// `Shape` は 1 回の描画呼び出しで消費される図形のパラメータを表す.
///
/// 座標と寸法は倍精度のまま受け取り, ピクセル格子には判定時にだけ重ねる.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// 左上 `(x0, y0)` で一辺 `side_length` の正方形. 境界を両端とも含むため,
    /// 実効的な辺は `side_length + 1` ピクセルになる.
    Square { x0: f64, y0: f64, side_length: f64 },
    /// 中心 `(x0, y0)` で半径 `radius` の円. 距離がちょうど `radius` のピクセルを含む.
    Circle { x0: f64, y0: f64, radius: f64 },
}

impl Shape {
    /// ピクセル `(col, row)` が図形の内側 (境界含む) に入るかを判定する.
    pub fn contains(&self, col: f64, row: f64) -> bool {
        match *self {
            Shape::Square {
                x0,
                y0,
                side_length,
            } => x0 <= col && col <= x0 + side_length && y0 <= row && row <= y0 + side_length,
            Shape::Circle { x0, y0, radius } => {
                let x_diff = col - x0;
                let y_diff = row - y0;
                (x_diff * x_diff + y_diff * y_diff).sqrt() <= radius
            }
        }
    }
}

/// 図形の内側にあたる全ピクセルへ `value` を書き込む. 外側のピクセルには触れない.
///
/// 呼び出し順がそのまま重なり順になる. ブレンドはせず後勝ちで上書きするので,
/// 大きい円の上へ背景色の小さい円を重ねれば輪が, 正方形を並べれば格子が描ける.
/// 寸法の検証は呼び出し側の仕事で, ここでは幾何の判定以外に範囲検査をしない.
pub fn draw<T: Copy>(canvas: &mut Canvas<T>, shape: Shape, value: T) {
    for row in 0..canvas.height() {
        for col in 0..canvas.width() {
            if shape.contains(col as f64, row as f64) {
                canvas[(col, row)] = value;
            }
        }
    }
}
