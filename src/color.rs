/// `Color` は 24 ビットの RGB カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06x}", self.to_packed())
    }
}

impl Color {
    /// 32 ビット値の下位 24 ビットに詰め込まれた RGB を取り出す. 最上位バイトは無視する.
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// 下位 24 ビットへ詰め直す.
    pub fn to_packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// [0, 1] に正規化されたスカラー値を 3 区間の線形ランプで RGB へ写す.
///
/// `v * 767` を切り捨てて [0, 767] へクランプし, 256 ごとの区間で 1 チャンネルずつ遷移させる.
/// 第 3 区間だけは青を 255 に固定したままにする. 0 へ落とす対称形は意図的に採用していない.
pub fn ramp(v: f64) -> Color {
    let scaled = ((v * 767.0) as i32).clamp(0, 767);
    let offset = (scaled % 256) as u8;
    if scaled < 256 {
        Color { r: 0, g: 0, b: offset }
    } else if scaled < 512 {
        Color {
            r: 0,
            g: offset,
            b: 255 - offset,
        }
    } else {
        Color {
            r: offset,
            g: 255 - offset,
            b: 255,
        }
    }
}

#[cfg(test)]
mod tests;
