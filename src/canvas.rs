use std::ops;

/// `Canvas` は row-major で並んだ `width * height` 個のピクセル値を保持するバッファを提供する.
///
/// 添字は `(col, row)` の組で指定し, (0, 0) が左上になる. row は下へ, col は右へ増える.
/// 生成時に全要素が初期値で埋まるため, 符号化器へ渡る時点で未初期化のピクセルは存在しない.
#[derive(Debug, Clone)]
pub struct Canvas<T> {
    width: u32,
    height: u32,
    vec: Vec<T>,
}

impl<T: Copy> Canvas<T> {
    /// 全要素を `init` で埋めたキャンバスを作る.
    pub fn with_init(width: u32, height: u32, init: T) -> Self {
        Self {
            width,
            height,
            vec: vec![init; width as usize * height as usize],
        }
    }
}

impl<T> Canvas<T> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 走査順 (row 0 から, 行内は左から) の借用イテレータを作る.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.vec.iter()
    }

    fn index_of(&self, col: u32, row: u32) -> usize {
        debug_assert!(col < self.width, "col {} out of 0..{}", col, self.width);
        debug_assert!(row < self.height, "row {} out of 0..{}", row, self.height);
        (row * self.width + col) as usize
    }
}

impl<T> ops::Index<(u32, u32)> for Canvas<T> {
    type Output = T;

    fn index(&self, (col, row): (u32, u32)) -> &T {
        &self.vec[self.index_of(col, row)]
    }
}

impl<T> ops::IndexMut<(u32, u32)> for Canvas<T> {
    fn index_mut(&mut self, (col, row): (u32, u32)) -> &mut T {
        let index = self.index_of(col, row);
        &mut self.vec[index]
    }
}
