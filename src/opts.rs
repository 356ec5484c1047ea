use anyhow::{bail, Context, Result};

/// `SizeFlag` は変種ごとに名前の変わる寸法フラグ (正方形の一辺か円の半径か) を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeFlag {
    SideLength,
    Radius,
}

impl SizeFlag {
    fn long(self) -> &'static str {
        match self {
            SizeFlag::SideLength => "side_length",
            SizeFlag::Radius => "radius",
        }
    }

    fn short(self) -> char {
        match self {
            SizeFlag::SideLength => 's',
            SizeFlag::Radius => 'r',
        }
    }

    fn describe(self) -> &'static str {
        match self {
            SizeFlag::SideLength => {
                "length of a side of the largest square in the generated image."
            }
            SizeFlag::Radius => "radius of the outer circle in the generated image.",
        }
    }
}

/// `Opts` はコマンドライン引数を検証済みの数値に落としたパラメータ一式を表す.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    pub width: f64,
    pub height: f64,
    /// `--side_length` または `--radius` の値.
    pub size: f64,
    pub color: u32,
    pub outfile: String,
    pub verbose: bool,
}

/// プログラム名を除いた引数列を解釈する.
///
/// `--flag value` と `--flag=value` の両方を受け付ける. 必須の寸法が正の値でなければ
/// ここで失敗させ, 呼び出し側がファイルへ書く前に打ち切れるようにする.
pub fn parse(
    args: impl IntoIterator<Item = String>,
    size_flag: SizeFlag,
    default_outfile: &str,
) -> Result<Opts> {
    let size_long = format!("--{}", size_flag.long());
    let size_short = format!("-{}", size_flag.short());

    let mut width = 0.0;
    let mut height = 0.0;
    let mut size = 0.0;
    let mut color = 0;
    let mut outfile = default_outfile.to_owned();
    let mut verbose = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (flag, mut inline) = if arg.starts_with("--") {
            match arg.split_once('=') {
                Some((flag, value)) => (flag.to_owned(), Some(value.to_owned())),
                None => (arg, None),
            }
        } else {
            (arg, None)
        };

        let mut value = |name: &str| -> Result<String> {
            inline.take().map(Ok).unwrap_or_else(|| {
                args.next()
                    .with_context(|| format!("option {} requires a value", name))
            })
        };

        match flag.as_str() {
            "--width" | "-w" => width = number(&value("--width")?, "width")?,
            "--height" | "-h" => height = number(&value("--height")?, "height")?,
            _ if flag == size_long || flag == size_short => {
                size = number(&value(&size_long)?, size_flag.long())?
            }
            "--color" | "-c" => color = hex_color(&value("--color")?)?,
            "--outfile" | "-o" => outfile = value("--outfile")?,
            "--verbose" | "-v" => verbose = true,
            _ => bail!("option {} invalid", flag),
        }
    }

    if !(width > 0.0) {
        bail!("width is {}. Invalid input.", width);
    }
    if !(height > 0.0) {
        bail!("height is {}. Invalid input.", height);
    }
    if !(size > 0.0) {
        bail!("{} is {}. Invalid input.", size_flag.long(), size);
    }

    Ok(Opts {
        width,
        height,
        size,
        color,
        outfile,
        verbose,
    })
}

fn number(input: &str, name: &str) -> Result<f64> {
    input
        .parse()
        .with_context(|| format!("{} must be a number, but got {:?}", name, input))
}

fn hex_color(input: &str) -> Result<u32> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    u32::from_str_radix(digits, 16)
        .with_context(|| format!("color must be a packed RGB hex value, but got {:?}", input))
}

/// プログラム名と寸法フラグの種類から usage の文面を組み立てる.
pub fn usage(program: &str, size_flag: SizeFlag) -> String {
    let lines = [
        ("width", 'w', "width of the image to be generated."),
        ("height", 'h', "height of the image to be generated."),
        (size_flag.long(), size_flag.short(), size_flag.describe()),
        (
            "color",
            'c',
            "packed RGB (rightmost 24 bits of 32-bit) value for the color in the generated image. (optional)",
        ),
        ("outfile", 'o', "name for the PNG file generated (optional)."),
        ("verbose", 'v', "show more display statements (optional)"),
    ];

    let mut text = format!("Usage {} <options>\noptions is one of:\n", program);
    for (long, short, description) in lines.iter() {
        text.push_str(&format!("  --{} -{} {}\n", long, short, description));
    }
    text
}
